//! Best-pair search — the one algorithm behind every di-lepton channel.
//!
//! For each enumerated candidate pair, in order:
//! 1. opposite charge (product of signed pT negative),
//! 2. both legs pass their quality predicate,
//! 3. pair mass above `PairCuts::min_mass`,
//! 4. pair mass outside the Z window, when the veto is enabled,
//! 5. score = |pT₁| + |pT₂|; the pair replaces the running best unless its
//!    score is strictly lower.
//!
//! Step 5 means equal scores go to the pair enumerated LAST. Every pair is
//! examined; there is no early exit.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::config::PairCuts;
use super::LeptonQuality;
use crate::domain::{Charge, EventRecord, FourMomentum, LeptonRef, Species};

/// One side of a pair: which collection it draws from and the predicate it must pass.
#[derive(Clone, Copy)]
pub struct LeptonLeg<'a> {
    pub species: Species,
    pub quality: &'a dyn LeptonQuality,
}

impl<'a> LeptonLeg<'a> {
    /// Leg for the predicate's own species.
    pub fn new(quality: &'a dyn LeptonQuality) -> Self {
        Self {
            species: quality.species(),
            quality,
        }
    }

    /// Quality-checked candidate with its four-momentum, or `None` if it fails.
    fn candidate(&self, event: &EventRecord, index: usize) -> Option<Candidate> {
        if !self.quality.passes(event, index) {
            return None;
        }
        Some(Candidate::build(event, LeptonRef { species: self.species, index }))
    }
}

impl std::fmt::Debug for LeptonLeg<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LeptonLeg")
            .field("species", &self.species)
            .field("quality", &self.quality.name())
            .finish()
    }
}

/// How index pairs are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Enumeration {
    /// Unordered pairs `(i, j)` with `i < j` inside one collection.
    UnorderedWithin,
    /// Every `(i, j)` of first collection × second collection, first index outer.
    CrossProduct,
}

/// Whether the Z-resonance mass window is vetoed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZVeto {
    Enabled,
    Disabled,
}

/// A lepton that passed quality, with its on-shell four-momentum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub lepton: LeptonRef,
    pub signed_pt: f64,
    pub p4: FourMomentum,
}

impl Candidate {
    fn build(event: &EventRecord, lepton: LeptonRef) -> Self {
        let LeptonRef { species, index } = lepton;
        let signed_pt = event.signed_pt(species, index);
        let p4 = FourMomentum::from_pt_eta_phi_m(
            signed_pt.abs(),
            event.eta(species, index),
            event.phi(species, index),
            species.mass(),
        );
        Self { lepton, signed_pt, p4 }
    }

    pub fn charge(&self) -> Charge {
        Charge::from_signed_pt(self.signed_pt)
    }
}

/// Two opposite-charge candidates and their combined kinematics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidatePair {
    pub minus: Candidate,
    pub plus: Candidate,
    pub p4: FourMomentum,
    pub mass: f64,
    /// Scalar sum of the two |pT| values.
    pub sum_pt: f64,
}

impl CandidatePair {
    /// Order two candidates by charge. The caller has checked the charges differ.
    fn new(a: Candidate, b: Candidate) -> Self {
        let (minus, plus) = match a.charge() {
            Charge::Minus => (a, b),
            Charge::Plus => (b, a),
        };
        let p4 = a.p4 + b.p4;
        Self {
            minus,
            plus,
            p4,
            mass: p4.mass(),
            sum_pt: a.signed_pt.abs() + b.signed_pt.abs(),
        }
    }

    pub fn into_result(self) -> SelectionResult {
        SelectionResult {
            lep_minus: self.minus.p4,
            lep_plus: self.plus.p4,
            sum_pt: self.sum_pt,
            mass: self.mass,
            minus: self.minus.lepton,
            plus: self.plus.lepton,
        }
    }
}

/// Selected pair for one channel of one event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionResult {
    /// Four-momentum of the negatively charged lepton.
    pub lep_minus: FourMomentum,
    /// Four-momentum of the positively charged lepton.
    pub lep_plus: FourMomentum,
    pub sum_pt: f64,
    pub mass: f64,
    pub minus: LeptonRef,
    pub plus: LeptonRef,
}

/// Running best-pair accumulator.
///
/// Starts at a floor score; `offer` replaces the held pair whenever the new
/// score is not below the current best.
#[derive(Debug, Clone, PartialEq)]
pub struct BestPair {
    best_sum_pt: f64,
    result: Option<SelectionResult>,
}

impl Default for BestPair {
    fn default() -> Self {
        Self::new(f64::NEG_INFINITY)
    }
}

impl BestPair {
    pub fn new(floor: f64) -> Self {
        Self {
            best_sum_pt: floor,
            result: None,
        }
    }

    /// Offer a pair; returns true if it became the new best.
    pub fn offer(&mut self, pair: CandidatePair) -> bool {
        if pair.sum_pt < self.best_sum_pt {
            return false;
        }
        self.best_sum_pt = pair.sum_pt;
        self.result = Some(pair.into_result());
        true
    }

    /// Current best score (the floor while nothing has been accepted).
    pub fn best_sum_pt(&self) -> f64 {
        self.best_sum_pt
    }

    pub fn result(&self) -> Option<&SelectionResult> {
        self.result.as_ref()
    }

    pub fn into_result(self) -> Option<SelectionResult> {
        self.result
    }
}

/// Generic best-pair selector, configured per channel.
#[derive(Debug, Clone, Copy)]
pub struct PairSelector<'a> {
    pub first: LeptonLeg<'a>,
    pub second: LeptonLeg<'a>,
    pub enumeration: Enumeration,
    pub z_veto: ZVeto,
    pub cuts: &'a PairCuts,
}

impl<'a> PairSelector<'a> {
    /// Same-flavor selector: unordered pairs within one collection, Z veto on.
    pub fn same_flavor(leg: LeptonLeg<'a>, cuts: &'a PairCuts) -> Self {
        Self {
            first: leg,
            second: leg,
            enumeration: Enumeration::UnorderedWithin,
            z_veto: ZVeto::Enabled,
            cuts,
        }
    }

    /// Mixed-flavor selector: full cross product of two collections, Z veto off.
    pub fn mixed_flavor(first: LeptonLeg<'a>, second: LeptonLeg<'a>, cuts: &'a PairCuts) -> Self {
        Self {
            first,
            second,
            enumeration: Enumeration::CrossProduct,
            z_veto: ZVeto::Disabled,
            cuts,
        }
    }

    pub fn with_z_veto(mut self, z_veto: ZVeto) -> Self {
        self.z_veto = z_veto;
        self
    }

    /// Best qualifying pair in the event, or `None` if no pair qualifies.
    pub fn select(&self, event: &EventRecord) -> Option<SelectionResult> {
        self.select_above(event, f64::NEG_INFINITY)
    }

    /// Best qualifying pair whose score reaches `floor`.
    ///
    /// Lets a caller carry one running score across several channels: pass the
    /// best score so far and a pair is returned only if it ties or beats it.
    pub fn select_above(&self, event: &EventRecord, floor: f64) -> Option<SelectionResult> {
        let mut best = BestPair::new(floor);
        self.accumulate(event, &mut best);
        best.into_result()
    }

    /// Offer every qualifying pair of `event` to `best`, in enumeration order.
    pub fn accumulate(&self, event: &EventRecord, best: &mut BestPair) {
        let n_first = event.count(self.first.species);
        let n_second = event.count(self.second.species);

        for i in 0..n_first {
            let Some(a) = self.first.candidate(event, i) else {
                continue;
            };
            let start = match self.enumeration {
                Enumeration::UnorderedWithin => i + 1,
                Enumeration::CrossProduct => 0,
            };
            for j in start..n_second {
                let second_ref = LeptonRef { species: self.second.species, index: j };
                if a.signed_pt * event.signed_pt(self.second.species, j) >= 0.0 {
                    trace!("{} + {}: same charge", a.lepton, second_ref);
                    continue;
                }
                let Some(b) = self.second.candidate(event, j) else {
                    trace!("{} + {}: {} fails quality", a.lepton, second_ref, second_ref);
                    continue;
                };
                let pair = CandidatePair::new(a, b);
                if pair.mass <= self.cuts.min_mass {
                    trace!("{} + {}: mass {:.2} too low", a.lepton, b.lepton, pair.mass);
                    continue;
                }
                if self.z_veto == ZVeto::Enabled && self.cuts.z_window.contains(pair.mass) {
                    trace!("{} + {}: mass {:.2} in Z window", a.lepton, b.lepton, pair.mass);
                    continue;
                }
                if best.offer(pair) {
                    debug!(
                        "best pair now {} + {} (sum pT {:.2}, mass {:.2})",
                        pair.minus.lepton, pair.plus.lepton, pair.sum_pt, pair.mass
                    );
                }
            }
        }
    }
}
