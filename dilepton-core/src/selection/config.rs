//! Selection configuration — every threshold the selectors apply.
//!
//! `SelectionConfig::default()` is the standard di-lepton analysis cut set. A
//! config can be loaded from TOML with any subset of fields given; missing
//! fields keep their default values.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::electron::ElectronCuts;
use super::muon::MuonCuts;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("serialize config TOML: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("fingerprint serialization failed: {0}")]
    Fingerprint(#[from] serde_json::Error),

    #[error("threshold `{field}` must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("threshold `{field}` must be >= 0, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("mass window [{low}, {high}] is inverted")]
    InvertedWindow { low: f64, high: f64 },
}

pub(crate) fn check_non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFinite { field, value });
    }
    if value < 0.0 {
        return Err(ConfigError::Negative { field, value });
    }
    Ok(())
}

/// Open invariant-mass interval `(low, high)` in GeV.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MassWindow {
    pub low: f64,
    pub high: f64,
}

impl MassWindow {
    /// True when `mass` lies strictly inside the window; the edges are outside.
    pub fn contains(&self, mass: f64) -> bool {
        mass > self.low && mass < self.high
    }
}

/// Cuts applied to a candidate pair after both legs pass quality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PairCuts {
    /// The pair mass must exceed this value.
    pub min_mass: f64,
    /// Z-resonance veto window for same-flavor channels.
    pub z_window: MassWindow,
}

impl Default for PairCuts {
    fn default() -> Self {
        Self {
            min_mass: 12.0,
            z_window: MassWindow {
                low: 76.0,
                high: 106.0,
            },
        }
    }
}

impl PairCuts {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_non_negative("pair.min_mass", self.min_mass)?;
        check_non_negative("pair.z_window.low", self.z_window.low)?;
        check_non_negative("pair.z_window.high", self.z_window.high)?;
        if self.z_window.low > self.z_window.high {
            return Err(ConfigError::InvertedWindow {
                low: self.z_window.low,
                high: self.z_window.high,
            });
        }
        Ok(())
    }
}

/// Complete cut set for all three channels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    pub electron: ElectronCuts,
    pub muon: MuonCuts,
    pub pair: PairCuts,
}

impl SelectionConfig {
    /// Load a config from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse a config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.electron.validate()?;
        self.muon.validate()?;
        self.pair.validate()
    }

    /// BLAKE3 hash of the canonical JSON form of the cut set.
    ///
    /// Identical cuts give identical fingerprints across builds and platforms,
    /// so stored selections can be traced to the cuts that produced them.
    pub fn fingerprint(&self) -> Result<String, ConfigError> {
        let canonical = serde_json::to_string(self)?;
        Ok(blake3::hash(canonical.as_bytes()).to_hex().to_string())
    }
}
