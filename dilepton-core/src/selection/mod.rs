//! Lepton quality cuts and best-pair selection.
//!
//! Single-lepton predicates implement [`LeptonQuality`]. The
//! [`PairSelector`](pair::PairSelector) combines two legs, each a species plus
//! its predicate, and keeps the opposite-charge pair with the largest summed
//! |pT|. [`Channel`](channel::Channel) wires the three di-lepton channels.

pub mod channel;
pub mod config;
pub mod electron;
pub mod muon;
pub mod pair;

use serde::{Deserialize, Serialize};

use crate::domain::{EventRecord, Species};

/// Outcome of a single-lepton quality evaluation.
///
/// Cuts are checked in a fixed order and the first failure is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeptonVerdict {
    Passed,
    FailedPt,
    FailedEta,
    FailedIsolation,
    FailedMissingHits,
    FailedConversion,
    FailedTrackerHits,
    FailedImpactParameter,
    FailedTrackChi2,
}

impl LeptonVerdict {
    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }
}

/// Per-candidate quality predicate for one lepton species.
///
/// Implementations are pure: the verdict depends only on the candidate's
/// fields and the cut values. `index` must be inside the species' arrays.
pub trait LeptonQuality: Send + Sync {
    /// Human-readable name (e.g., "electron_cuts").
    fn name(&self) -> &str;

    /// Species this predicate applies to.
    fn species(&self) -> Species;

    /// Evaluate all cuts, reporting the first one that fails.
    fn evaluate(&self, event: &EventRecord, index: usize) -> LeptonVerdict;

    fn passes(&self, event: &EventRecord, index: usize) -> bool {
        self.evaluate(event, index).is_passed()
    }
}

pub use channel::{select_ee, select_emu, select_mumu, Channel, ParseChannelError};
pub use config::{ConfigError, MassWindow, PairCuts, SelectionConfig};
pub use electron::{ConversionVeto, ElectronCuts};
pub use muon::MuonCuts;
pub use pair::{
    BestPair, Candidate, CandidatePair, Enumeration, LeptonLeg, PairSelector, SelectionResult,
    ZVeto,
};
