//! Electron quality cuts.
//!
//! Default values: |pT| >= 20 GeV, |eta| <= 2.4 (central electrons only),
//! ΔR = 0.3 isolation <= 0.17, no missing hits. The photon-conversion veto is
//! available but switched off unless configured.

use serde::{Deserialize, Serialize};

use super::config::{check_non_negative, ConfigError};
use super::{LeptonQuality, LeptonVerdict};
use crate::domain::{EventRecord, Species};

/// Photon-conversion veto on the electron's partner-track distance and
/// Δcot(θ).
///
/// An electron is rejected when both quantities are non-negative and below
/// their thresholds. Negative values mean "no partner track found".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionVeto {
    pub max_dist: f64,
    pub max_dcot: f64,
}

impl Default for ConversionVeto {
    fn default() -> Self {
        Self {
            max_dist: 0.02,
            max_dcot: 0.02,
        }
    }
}

impl ConversionVeto {
    pub fn rejects(&self, dist: f64, dcot: f64) -> bool {
        dist >= 0.0 && dcot >= 0.0 && dist < self.max_dist && dcot < self.max_dcot
    }
}

/// Electron selection thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElectronCuts {
    pub min_pt: f64,
    pub max_abs_eta: f64,
    pub max_iso03: f64,
    pub max_miss_hits: u32,
    /// Disabled when `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversion: Option<ConversionVeto>,
}

impl Default for ElectronCuts {
    fn default() -> Self {
        Self {
            min_pt: 20.0,
            max_abs_eta: 2.4,
            max_iso03: 0.17,
            max_miss_hits: 0,
            conversion: None,
        }
    }
}

impl ElectronCuts {
    /// Default cuts with the conversion veto switched on.
    pub fn with_conversion_veto(veto: ConversionVeto) -> Self {
        Self {
            conversion: Some(veto),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_non_negative("electron.min_pt", self.min_pt)?;
        check_non_negative("electron.max_abs_eta", self.max_abs_eta)?;
        check_non_negative("electron.max_iso03", self.max_iso03)?;
        if let Some(veto) = &self.conversion {
            check_non_negative("electron.conversion.max_dist", veto.max_dist)?;
            check_non_negative("electron.conversion.max_dcot", veto.max_dcot)?;
        }
        Ok(())
    }
}

impl LeptonQuality for ElectronCuts {
    fn name(&self) -> &str {
        "electron_cuts"
    }

    fn species(&self) -> Species {
        Species::Electron
    }

    fn evaluate(&self, event: &EventRecord, index: usize) -> LeptonVerdict {
        let el = &event.electrons;
        if el.pt[index].abs() < self.min_pt {
            return LeptonVerdict::FailedPt;
        }
        if el.eta[index].abs() > self.max_abs_eta {
            return LeptonVerdict::FailedEta;
        }
        if el.iso03[index] > self.max_iso03 {
            return LeptonVerdict::FailedIsolation;
        }
        if el.miss_hits[index] > self.max_miss_hits {
            return LeptonVerdict::FailedMissingHits;
        }
        if let (Some(veto), Some((dist, dcot))) = (&self.conversion, el.conversion(index)) {
            if veto.rejects(dist, dcot) {
                return LeptonVerdict::FailedConversion;
            }
        }
        LeptonVerdict::Passed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ElectronFields;

    fn good() -> ElectronFields {
        ElectronFields {
            pt: 35.0,
            eta: 0.3,
            phi: 0.0,
            iso03: 0.05,
            miss_hits: 0,
            conversion: None,
        }
    }

    fn verdict(fields: ElectronFields) -> LeptonVerdict {
        let mut ev = EventRecord::new();
        ev.push_electron(fields);
        ElectronCuts::default().evaluate(&ev, 0)
    }

    #[test]
    fn good_electron_passes() {
        assert_eq!(verdict(good()), LeptonVerdict::Passed);
    }

    #[test]
    fn pt_boundary() {
        assert!(verdict(ElectronFields { pt: 20.0, ..good() }).is_passed());
        assert!(verdict(ElectronFields { pt: -20.0, ..good() }).is_passed());
        assert_eq!(
            verdict(ElectronFields { pt: 19.999, ..good() }),
            LeptonVerdict::FailedPt
        );
        assert_eq!(
            verdict(ElectronFields { pt: -19.999, ..good() }),
            LeptonVerdict::FailedPt
        );
    }

    #[test]
    fn eta_boundary_keeps_central() {
        assert!(verdict(ElectronFields { eta: 2.4, ..good() }).is_passed());
        assert!(verdict(ElectronFields { eta: -2.4, ..good() }).is_passed());
        assert_eq!(
            verdict(ElectronFields { eta: 2.41, ..good() }),
            LeptonVerdict::FailedEta
        );
        assert_eq!(
            verdict(ElectronFields { eta: -3.0, ..good() }),
            LeptonVerdict::FailedEta
        );
    }

    #[test]
    fn isolation_boundary() {
        assert!(verdict(ElectronFields { iso03: 0.17, ..good() }).is_passed());
        assert_eq!(
            verdict(ElectronFields { iso03: 0.1701, ..good() }),
            LeptonVerdict::FailedIsolation
        );
    }

    #[test]
    fn any_missing_hit_fails() {
        assert_eq!(
            verdict(ElectronFields { miss_hits: 1, ..good() }),
            LeptonVerdict::FailedMissingHits
        );
    }

    #[test]
    fn first_failure_reported() {
        let bad = ElectronFields {
            pt: 5.0,
            eta: 3.0,
            iso03: 1.0,
            miss_hits: 2,
            ..good()
        };
        assert_eq!(verdict(bad), LeptonVerdict::FailedPt);
    }

    #[test]
    fn conversion_veto_off_by_default() {
        let conv = ElectronFields {
            conversion: Some((0.001, 0.001)),
            ..good()
        };
        assert!(verdict(conv).is_passed());
    }

    #[test]
    fn conversion_veto_when_enabled() {
        let cuts = ElectronCuts::with_conversion_veto(ConversionVeto::default());
        let mut ev = EventRecord::new();
        ev.push_electron(ElectronFields { conversion: Some((0.01, 0.01)), ..good() })
            .push_electron(ElectronFields { conversion: Some((0.03, 0.01)), ..good() })
            .push_electron(ElectronFields { conversion: Some((-1.0, 0.01)), ..good() })
            .push_electron(ElectronFields { conversion: Some((0.01, 0.02)), ..good() });
        assert_eq!(cuts.evaluate(&ev, 0), LeptonVerdict::FailedConversion);
        assert!(cuts.passes(&ev, 1));
        assert!(cuts.passes(&ev, 2));
        assert!(cuts.passes(&ev, 3));
    }

    #[test]
    fn conversion_veto_ignores_records_without_arrays() {
        let cuts = ElectronCuts::with_conversion_veto(ConversionVeto::default());
        let mut ev = EventRecord::new();
        ev.push_electron(good());
        assert!(cuts.passes(&ev, 0));
    }

    #[test]
    fn negative_threshold_rejected() {
        let cuts = ElectronCuts {
            max_iso03: -0.1,
            ..ElectronCuts::default()
        };
        assert!(cuts.validate().is_err());
        assert!(ElectronCuts::default().validate().is_ok());
    }

    #[test]
    fn name_and_species() {
        let cuts = ElectronCuts::default();
        assert_eq!(cuts.name(), "electron_cuts");
        assert_eq!(cuts.species(), Species::Electron);
    }
}
