//! Muon quality cuts.
//!
//! Impact-parameter thresholds apply to the stored fields as-is; no unit
//! conversion happens here.

use serde::{Deserialize, Serialize};

use super::config::{check_non_negative, ConfigError};
use super::{LeptonQuality, LeptonVerdict};
use crate::domain::{EventRecord, Species};

/// Muon selection thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MuonCuts {
    pub min_pt: f64,
    pub max_abs_eta: f64,
    pub max_iso03: f64,
    pub min_hits_valid: u32,
    pub min_hits_pixel: u32,
    pub max_dist_pv0: f64,
    pub max_dist_pvz: f64,
    pub max_track_chi2_ndof: f64,
}

impl Default for MuonCuts {
    fn default() -> Self {
        Self {
            min_pt: 20.0,
            max_abs_eta: 2.4,
            max_iso03: 0.20,
            min_hits_valid: 12,
            min_hits_pixel: 2,
            max_dist_pv0: 0.02,
            max_dist_pvz: 0.5,
            max_track_chi2_ndof: 10.0,
        }
    }
}

impl MuonCuts {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_non_negative("muon.min_pt", self.min_pt)?;
        check_non_negative("muon.max_abs_eta", self.max_abs_eta)?;
        check_non_negative("muon.max_iso03", self.max_iso03)?;
        check_non_negative("muon.max_dist_pv0", self.max_dist_pv0)?;
        check_non_negative("muon.max_dist_pvz", self.max_dist_pvz)?;
        check_non_negative("muon.max_track_chi2_ndof", self.max_track_chi2_ndof)?;
        Ok(())
    }
}

impl LeptonQuality for MuonCuts {
    fn name(&self) -> &str {
        "muon_cuts"
    }

    fn species(&self) -> Species {
        Species::Muon
    }

    fn evaluate(&self, event: &EventRecord, index: usize) -> LeptonVerdict {
        let mu = &event.muons;
        if mu.pt[index].abs() < self.min_pt {
            return LeptonVerdict::FailedPt;
        }
        if mu.eta[index].abs() > self.max_abs_eta {
            return LeptonVerdict::FailedEta;
        }
        if mu.iso03[index] > self.max_iso03 {
            return LeptonVerdict::FailedIsolation;
        }
        if mu.hits_valid[index] < self.min_hits_valid || mu.hits_pixel[index] < self.min_hits_pixel
        {
            return LeptonVerdict::FailedTrackerHits;
        }
        if mu.dist_pv0[index] > self.max_dist_pv0 || mu.dist_pvz[index] > self.max_dist_pvz {
            return LeptonVerdict::FailedImpactParameter;
        }
        if mu.track_chi2_ndof[index] > self.max_track_chi2_ndof {
            return LeptonVerdict::FailedTrackChi2;
        }
        LeptonVerdict::Passed
    }
}
