//! Batch driver — runs the enabled channels over every event of a batch.
//!
//! Events are independent: each gets its own `EventSelection`, nothing is
//! accumulated across events. Output order always matches input order, with
//! or without the thread pool.

use log::{debug, info};
use rayon::prelude::*;
use thiserror::Error;

use dilepton_core::domain::{EventRecord, RecordError};

use crate::config::{RunConfig, RunConfigError};
use crate::result::EventSelection;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("invalid run config: {0}")]
    Config(#[from] RunConfigError),

    #[error("event {event}: {source}")]
    InvalidRecord {
        event: usize,
        #[source]
        source: RecordError,
    },
}

/// Select pairs in one event for the configured channels.
pub fn select_event(event: usize, record: &EventRecord, config: &RunConfig) -> EventSelection {
    let mut selection = EventSelection::new(event);
    for &ch in &config.channels {
        let result = ch.select(record, &config.selection);
        if let Some(r) = &result {
            debug!(
                "event {event} {ch}: {} + {} (sum pT {:.2}, mass {:.2})",
                r.minus, r.plus, r.sum_pt, r.mass
            );
        }
        selection.set(ch, result);
    }
    selection
}

/// Run selection over a batch of events.
///
/// The config is validated first; records are validated when
/// `validate_records` is set, and the first bad record aborts the run.
pub fn run_events(
    records: &[EventRecord],
    config: &RunConfig,
) -> Result<Vec<EventSelection>, RunError> {
    config.validate()?;

    if config.validate_records {
        for (event, record) in records.iter().enumerate() {
            record
                .validate()
                .map_err(|source| RunError::InvalidRecord { event, source })?;
        }
    }

    info!(
        "selecting {} events over channels [{}] ({})",
        records.len(),
        config
            .channels
            .iter()
            .map(|ch| ch.name())
            .collect::<Vec<_>>()
            .join(", "),
        if config.parallel { "parallel" } else { "serial" }
    );

    let selections: Vec<EventSelection> = if config.parallel {
        records
            .par_iter()
            .enumerate()
            .map(|(event, record)| select_event(event, record, config))
            .collect()
    } else {
        records
            .iter()
            .enumerate()
            .map(|(event, record)| select_event(event, record, config))
            .collect()
    };

    let selected = selections.iter().filter(|s| !s.is_empty()).count();
    info!("{selected} of {} events have at least one selected pair", records.len());

    Ok(selections)
}
