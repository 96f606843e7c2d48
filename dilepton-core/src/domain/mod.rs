//! Domain types: event records, leptons, four-momenta.

pub mod event;
pub mod four_momentum;
pub mod lepton;

pub use event::{
    ElectronFields, Electrons, EventRecord, MuonFields, Muons, RecordError, NO_CONVERSION_PARTNER,
};
pub use four_momentum::FourMomentum;
pub use lepton::{Charge, LeptonRef, Species, ELECTRON_MASS, MUON_MASS};
