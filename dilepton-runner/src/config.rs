//! Serializable run configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use dilepton_core::selection::{Channel, ConfigError as CutsError, SelectionConfig};

#[derive(Debug, Error)]
pub enum RunConfigError {
    #[error("read run config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse run config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("serialize run config TOML: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid cuts: {0}")]
    Cuts(#[from] CutsError),

    #[error("no channels enabled")]
    NoChannels,

    #[error("channel `{0}` listed more than once")]
    DuplicateChannel(Channel),
}

/// Everything needed to reproduce one selection pass over a batch of events.
///
/// Missing TOML fields fall back to the default cuts, all three channels,
/// parallel execution, and record validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Channels to evaluate for each event.
    pub channels: Vec<Channel>,

    /// Fan events out across the rayon thread pool.
    pub parallel: bool,

    /// Check array lengths of every record before selecting.
    pub validate_records: bool,

    /// Cut thresholds.
    pub selection: SelectionConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            channels: Channel::ALL.to_vec(),
            parallel: true,
            validate_records: true,
            selection: SelectionConfig::default(),
        }
    }
}

impl RunConfig {
    pub fn from_file(path: &Path) -> Result<Self, RunConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| RunConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, RunConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String, RunConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), RunConfigError> {
        if self.channels.is_empty() {
            return Err(RunConfigError::NoChannels);
        }
        for (i, ch) in self.channels.iter().enumerate() {
            if self.channels[..i].contains(ch) {
                return Err(RunConfigError::DuplicateChannel(*ch));
            }
        }
        self.selection.validate()?;
        Ok(())
    }

    /// Restrict the run to the given channels.
    pub fn with_channels(mut self, channels: Vec<Channel>) -> Self {
        self.channels = channels;
        self
    }

    pub fn with_parallelism(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn is_enabled(&self, channel: Channel) -> bool {
        self.channels.contains(&channel)
    }
}
