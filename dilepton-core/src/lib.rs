//! Dilepton Core — per-event lepton pair selection for di-lepton top-pair analyses.
//!
//! This crate contains the selection stage:
//! - Domain types (event records, lepton references, four-momenta)
//! - Electron and muon quality predicates with configurable thresholds
//! - One generic best-pair selector (charge, mass and Z-window cuts, sum-pT ranking)
//! - The ee, μμ and eμ channel wirings
//!
//! Selection is pure: it reads an `EventRecord` and returns an
//! `Option<SelectionResult>` per channel. Looping over events, storage, and
//! aggregation belong to the caller.

pub mod domain;
pub mod selection;

pub use domain::{EventRecord, FourMomentum, LeptonRef, Species};
pub use selection::{select_ee, select_emu, select_mumu, Channel, SelectionConfig, SelectionResult};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: types shared with worker threads are Send + Sync.
    ///
    /// The runner fans events out over a thread pool with one shared config.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<domain::EventRecord>();
        require_sync::<domain::EventRecord>();
        require_send::<domain::FourMomentum>();
        require_sync::<domain::FourMomentum>();
        require_send::<domain::LeptonRef>();
        require_sync::<domain::LeptonRef>();

        require_send::<selection::SelectionConfig>();
        require_sync::<selection::SelectionConfig>();
        require_send::<selection::SelectionResult>();
        require_sync::<selection::SelectionResult>();
        require_send::<selection::PairSelector<'static>>();
        require_sync::<selection::PairSelector<'static>>();
        require_send::<selection::Channel>();
        require_sync::<selection::Channel>();
    }

    /// Compile-time check: quality predicates are object safe and see the
    /// event read-only.
    #[allow(dead_code)]
    fn lepton_quality_takes_shared_event() {
        fn _check(q: &dyn selection::LeptonQuality, ev: &domain::EventRecord) -> bool {
            q.passes(ev, 0)
        }
    }
}
