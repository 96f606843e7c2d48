//! Lepton species, charge, and candidate references.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Electron rest mass in GeV.
pub const ELECTRON_MASS: f64 = 0.000511;

/// Muon rest mass in GeV.
pub const MUON_MASS: f64 = 0.105658;

/// Lepton flavor of a reconstructed candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Electron,
    Muon,
}

impl Species {
    /// Rest mass used when building the candidate's four-momentum.
    pub fn mass(self) -> f64 {
        match self {
            Self::Electron => ELECTRON_MASS,
            Self::Muon => MUON_MASS,
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Electron => write!(f, "electron"),
            Self::Muon => write!(f, "muon"),
        }
    }
}

/// Electric charge sign, read off the signed transverse momentum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Charge {
    Minus,
    Plus,
}

impl Charge {
    /// Negative pT means a negatively charged lepton; everything else is `Plus`.
    pub fn from_signed_pt(signed_pt: f64) -> Self {
        if signed_pt < 0.0 {
            Self::Minus
        } else {
            Self::Plus
        }
    }
}

/// Logical handle on one candidate inside an [`EventRecord`](super::EventRecord).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeptonRef {
    pub species: Species,
    pub index: usize,
}

impl LeptonRef {
    pub fn electron(index: usize) -> Self {
        Self { species: Species::Electron, index }
    }

    pub fn muon(index: usize) -> Self {
        Self { species: Species::Muon, index }
    }
}

impl fmt::Display for LeptonRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.species, self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn species_masses() {
        assert_eq!(Species::Electron.mass(), 0.000511);
        assert_eq!(Species::Muon.mass(), 0.105658);
    }

    #[test]
    fn charge_from_sign() {
        assert_eq!(Charge::from_signed_pt(-25.0), Charge::Minus);
        assert_eq!(Charge::from_signed_pt(25.0), Charge::Plus);
    }

    #[test]
    fn lepton_ref_display() {
        assert_eq!(LeptonRef::muon(3).to_string(), "muon[3]");
        assert_eq!(LeptonRef::electron(0).to_string(), "electron[0]");
    }

    #[test]
    fn species_serializes_lowercase() {
        let json = serde_json::to_string(&Species::Muon).unwrap();
        assert_eq!(json, "\"muon\"");
    }
}
