//! Event record — the per-event lepton candidate arrays handed to selection.
//!
//! Candidates are stored as parallel arrays, one block per species, with an
//! explicit count bounding the valid index range. Selection trusts the record:
//! arrays at least as long as the count are the producer's responsibility,
//! checked on request by [`EventRecord::validate`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::lepton::Species;

/// Conversion distance / dcot stored for an electron with no partner track.
/// Negative, so the conversion veto never fires on it.
pub const NO_CONVERSION_PARTNER: f64 = -1.0;

/// Structural problems in an event record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("{species} array `{field}` has {len} entries but count is {count}")]
    ShortArray {
        species: Species,
        field: &'static str,
        len: usize,
        count: usize,
    },

    #[error("electron conversion arrays must be given together (conv_dist: {dist}, conv_dcot: {dcot})")]
    UnpairedConversion { dist: usize, dcot: usize },
}

/// Electron candidates of one event.
///
/// `conv_dist` / `conv_dcot` are optional: left empty, the record carries no
/// conversion information and the conversion veto never fires.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Electrons {
    pub count: usize,
    /// Transverse momentum, signed by charge.
    pub pt: Vec<f64>,
    pub eta: Vec<f64>,
    pub phi: Vec<f64>,
    /// Relative isolation in a ΔR = 0.3 cone.
    pub iso03: Vec<f64>,
    pub miss_hits: Vec<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conv_dist: Vec<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conv_dcot: Vec<f64>,
}

/// Muon candidates of one event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Muons {
    pub count: usize,
    /// Transverse momentum, signed by charge.
    pub pt: Vec<f64>,
    pub eta: Vec<f64>,
    pub phi: Vec<f64>,
    /// Relative isolation in a ΔR = 0.3 cone.
    pub iso03: Vec<f64>,
    /// Valid tracker hits.
    pub hits_valid: Vec<u32>,
    pub hits_pixel: Vec<u32>,
    /// Transverse impact parameter w.r.t. the primary vertex, in the stored unit.
    pub dist_pv0: Vec<f64>,
    /// Longitudinal impact parameter w.r.t. the primary vertex, in the stored unit.
    pub dist_pvz: Vec<f64>,
    pub track_chi2_ndof: Vec<f64>,
}

/// One electron's fields, used to append to an [`EventRecord`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElectronFields {
    pub pt: f64,
    pub eta: f64,
    pub phi: f64,
    pub iso03: f64,
    pub miss_hits: u32,
    /// `(conv_dist, conv_dcot)`, if the producer has them.
    pub conversion: Option<(f64, f64)>,
}

/// One muon's fields, used to append to an [`EventRecord`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MuonFields {
    pub pt: f64,
    pub eta: f64,
    pub phi: f64,
    pub iso03: f64,
    pub hits_valid: u32,
    pub hits_pixel: u32,
    pub dist_pv0: f64,
    pub dist_pvz: f64,
    pub track_chi2_ndof: f64,
}

/// Read-only per-event view consumed by the selectors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(default)]
    pub electrons: Electrons,
    #[serde(default)]
    pub muons: Muons,
}

impl EventRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn electron_count(&self) -> usize {
        self.electrons.count
    }

    pub fn muon_count(&self) -> usize {
        self.muons.count
    }

    pub fn count(&self, species: Species) -> usize {
        match species {
            Species::Electron => self.electrons.count,
            Species::Muon => self.muons.count,
        }
    }

    /// Charge-signed transverse momentum. Panics if `index` is outside the arrays.
    pub fn signed_pt(&self, species: Species, index: usize) -> f64 {
        match species {
            Species::Electron => self.electrons.pt[index],
            Species::Muon => self.muons.pt[index],
        }
    }

    pub fn eta(&self, species: Species, index: usize) -> f64 {
        match species {
            Species::Electron => self.electrons.eta[index],
            Species::Muon => self.muons.eta[index],
        }
    }

    pub fn phi(&self, species: Species, index: usize) -> f64 {
        match species {
            Species::Electron => self.electrons.phi[index],
            Species::Muon => self.muons.phi[index],
        }
    }

    /// Append an electron, keeping arrays and count in step.
    ///
    /// Conversion arrays stay empty until the first electron that carries
    /// conversion data. From then on they are index-aligned: earlier and later
    /// electrons without data get [`NO_CONVERSION_PARTNER`].
    pub fn push_electron(&mut self, fields: ElectronFields) -> &mut Self {
        let el = &mut self.electrons;
        match fields.conversion {
            Some((dist, dcot)) => {
                el.conv_dist.resize(el.count, NO_CONVERSION_PARTNER);
                el.conv_dcot.resize(el.count, NO_CONVERSION_PARTNER);
                el.conv_dist.push(dist);
                el.conv_dcot.push(dcot);
            }
            None if !el.conv_dist.is_empty() => {
                el.conv_dist.resize(el.count + 1, NO_CONVERSION_PARTNER);
                el.conv_dcot.resize(el.count + 1, NO_CONVERSION_PARTNER);
            }
            None => {}
        }
        el.pt.push(fields.pt);
        el.eta.push(fields.eta);
        el.phi.push(fields.phi);
        el.iso03.push(fields.iso03);
        el.miss_hits.push(fields.miss_hits);
        el.count += 1;
        self
    }

    /// Append a muon, keeping arrays and count in step.
    pub fn push_muon(&mut self, fields: MuonFields) -> &mut Self {
        let mu = &mut self.muons;
        mu.pt.push(fields.pt);
        mu.eta.push(fields.eta);
        mu.phi.push(fields.phi);
        mu.iso03.push(fields.iso03);
        mu.hits_valid.push(fields.hits_valid);
        mu.hits_pixel.push(fields.hits_pixel);
        mu.dist_pv0.push(fields.dist_pv0);
        mu.dist_pvz.push(fields.dist_pvz);
        mu.track_chi2_ndof.push(fields.track_chi2_ndof);
        mu.count += 1;
        self
    }

    /// Check that every array covers its block's count.
    ///
    /// Selection never calls this; it is for producers and drivers that
    /// accept records from outside.
    pub fn validate(&self) -> Result<(), RecordError> {
        let el = &self.electrons;
        check_len(Species::Electron, "pt", el.pt.len(), el.count)?;
        check_len(Species::Electron, "eta", el.eta.len(), el.count)?;
        check_len(Species::Electron, "phi", el.phi.len(), el.count)?;
        check_len(Species::Electron, "iso03", el.iso03.len(), el.count)?;
        check_len(Species::Electron, "miss_hits", el.miss_hits.len(), el.count)?;
        if el.conv_dist.len() != el.conv_dcot.len() {
            return Err(RecordError::UnpairedConversion {
                dist: el.conv_dist.len(),
                dcot: el.conv_dcot.len(),
            });
        }
        if !el.conv_dist.is_empty() {
            check_len(Species::Electron, "conv_dist", el.conv_dist.len(), el.count)?;
        }

        let mu = &self.muons;
        check_len(Species::Muon, "pt", mu.pt.len(), mu.count)?;
        check_len(Species::Muon, "eta", mu.eta.len(), mu.count)?;
        check_len(Species::Muon, "phi", mu.phi.len(), mu.count)?;
        check_len(Species::Muon, "iso03", mu.iso03.len(), mu.count)?;
        check_len(Species::Muon, "hits_valid", mu.hits_valid.len(), mu.count)?;
        check_len(Species::Muon, "hits_pixel", mu.hits_pixel.len(), mu.count)?;
        check_len(Species::Muon, "dist_pv0", mu.dist_pv0.len(), mu.count)?;
        check_len(Species::Muon, "dist_pvz", mu.dist_pvz.len(), mu.count)?;
        check_len(
            Species::Muon,
            "track_chi2_ndof",
            mu.track_chi2_ndof.len(),
            mu.count,
        )?;
        Ok(())
    }
}

impl Electrons {
    /// `(conv_dist, conv_dcot)` for one electron, when the record carries them.
    pub fn conversion(&self, index: usize) -> Option<(f64, f64)> {
        self.conv_dist.get(index).copied().zip(self.conv_dcot.get(index).copied())
    }
}

fn check_len(
    species: Species,
    field: &'static str,
    len: usize,
    count: usize,
) -> Result<(), RecordError> {
    if len < count {
        Err(RecordError::ShortArray { species, field, len, count })
    } else {
        Ok(())
    }
}
