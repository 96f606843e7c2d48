//! The three di-lepton channels as fixed `PairSelector` configurations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::config::SelectionConfig;
use super::pair::{LeptonLeg, PairSelector, SelectionResult};
use crate::domain::EventRecord;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown channel `{0}` (expected ee, mumu or emu)")]
pub struct ParseChannelError(pub String);

/// Di-lepton final state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Electron + muon, no Z veto.
    EMu,
    /// Electron pair, Z veto.
    Ee,
    /// Muon pair, Z veto.
    MuMu,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::EMu, Channel::Ee, Channel::MuMu];

    pub fn name(self) -> &'static str {
        match self {
            Self::EMu => "emu",
            Self::Ee => "ee",
            Self::MuMu => "mumu",
        }
    }

    /// The selector for this channel under `config`'s cuts.
    pub fn selector(self, config: &SelectionConfig) -> PairSelector<'_> {
        let electron = LeptonLeg::new(&config.electron);
        let muon = LeptonLeg::new(&config.muon);
        match self {
            Self::EMu => PairSelector::mixed_flavor(electron, muon, &config.pair),
            Self::Ee => PairSelector::same_flavor(electron, &config.pair),
            Self::MuMu => PairSelector::same_flavor(muon, &config.pair),
        }
    }

    pub fn select(self, event: &EventRecord, config: &SelectionConfig) -> Option<SelectionResult> {
        self.selector(config).select(event)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Channel {
    type Err = ParseChannelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "emu" | "mue" => Ok(Self::EMu),
            "ee" => Ok(Self::Ee),
            "mumu" => Ok(Self::MuMu),
            _ => Err(ParseChannelError(s.to_string())),
        }
    }
}

/// Best opposite-charge electron pair outside the Z window.
pub fn select_ee(event: &EventRecord, config: &SelectionConfig) -> Option<SelectionResult> {
    Channel::Ee.select(event, config)
}

/// Best opposite-charge muon pair outside the Z window.
pub fn select_mumu(event: &EventRecord, config: &SelectionConfig) -> Option<SelectionResult> {
    Channel::MuMu.select(event, config)
}

/// Best opposite-charge electron-muon pair.
pub fn select_emu(event: &EventRecord, config: &SelectionConfig) -> Option<SelectionResult> {
    Channel::EMu.select(event, config)
}
