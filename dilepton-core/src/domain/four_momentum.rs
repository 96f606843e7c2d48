//! Four-momentum — Cartesian (px, py, pz, E) vector in GeV.

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::Add;

/// Relativistic four-momentum.
///
/// Built once from collider coordinates and never mutated; pair momenta are
/// formed with `+`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FourMomentum {
    pub px: f64,
    pub py: f64,
    pub pz: f64,
    pub e: f64,
}

impl FourMomentum {
    pub fn new(px: f64, py: f64, pz: f64, e: f64) -> Self {
        Self { px, py, pz, e }
    }

    /// Build an on-shell vector from transverse momentum, pseudorapidity,
    /// azimuthal angle and rest mass.
    ///
    /// `pt` is taken as a magnitude; callers holding a charge-signed pT pass
    /// its absolute value. Energy satisfies `E² = |p|² + m²`.
    pub fn from_pt_eta_phi_m(pt: f64, eta: f64, phi: f64, mass: f64) -> Self {
        let px = pt * phi.cos();
        let py = pt * phi.sin();
        let pz = pt * eta.sinh();
        let e = (px * px + py * py + pz * pz + mass * mass).sqrt();
        Self { px, py, pz, e }
    }

    /// Transverse momentum magnitude.
    pub fn pt(&self) -> f64 {
        self.px.hypot(self.py)
    }

    /// Three-momentum magnitude.
    pub fn p(&self) -> f64 {
        (self.px * self.px + self.py * self.py + self.pz * self.pz).sqrt()
    }

    /// Azimuthal angle in (-π, π].
    pub fn phi(&self) -> f64 {
        if self.px == 0.0 && self.py == 0.0 {
            0.0
        } else {
            self.py.atan2(self.px)
        }
    }

    /// Pseudorapidity. Zero for a vector with no transverse component.
    pub fn eta(&self) -> f64 {
        let pt = self.pt();
        if pt == 0.0 {
            return 0.0;
        }
        (self.pz / pt).asinh()
    }

    /// Invariant mass squared, `E² - |p|²`.
    pub fn mass_squared(&self) -> f64 {
        self.e * self.e - (self.px * self.px + self.py * self.py + self.pz * self.pz)
    }

    /// Invariant mass.
    ///
    /// A space-like vector (negative mass squared, only reachable through
    /// rounding for physical inputs) reports `-sqrt(-m²)`.
    pub fn mass(&self) -> f64 {
        let m2 = self.mass_squared();
        if m2 < 0.0 {
            -(-m2).sqrt()
        } else {
            m2.sqrt()
        }
    }
}

impl Add for FourMomentum {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            px: self.px + rhs.px,
            py: self.py + rhs.py,
            pz: self.pz + rhs.pz,
            e: self.e + rhs.e,
        }
    }
}

impl Sum for FourMomentum {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, p| acc + p)
    }
}
