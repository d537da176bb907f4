//! # Unit Types
//!
//! Lightweight SI newtype wrappers. Every quantity in slab_core is stored
//! as plain `f64` in base SI units (m, N, Pa, kg); these wrappers exist for
//! the places where a value changes units on its way out, such as stresses
//! reported in megapascals.
//!
//! ## Example
//!
//! ```rust
//! use slab_core::units::{Megapascals, Pascals};
//!
//! let stress = Pascals(1.28e6);
//! let stress_mpa: Megapascals = stress.into();
//! assert!((stress_mpa.0 - 1.28).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Div, Mul};

// ============================================================================
// Length Units
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

// ============================================================================
// Force and Moment Units
// ============================================================================

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

/// Moment in newton-meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewtonMeters(pub f64);

/// Force times lever arm
impl Mul<Meters> for Newtons {
    type Output = NewtonMeters;
    fn mul(self, rhs: Meters) -> NewtonMeters {
        NewtonMeters(self.0 * rhs.0)
    }
}

// ============================================================================
// Stress Units
// ============================================================================

/// Stress in pascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pascals(pub f64);

/// Stress in megapascals (1 MPa = 1e6 Pa)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Megapascals(pub f64);

impl From<Pascals> for Megapascals {
    fn from(pa: Pascals) -> Self {
        Megapascals(pa.0 / 1e6)
    }
}

impl From<Megapascals> for Pascals {
    fn from(mpa: Megapascals) -> Self {
        Pascals(mpa.0 * 1e6)
    }
}

/// Ratio of two stresses (dimensionless), e.g. yield over peak
impl Div for Pascals {
    type Output = f64;
    fn div(self, rhs: Pascals) -> f64 {
        self.0 / rhs.0
    }
}

// ============================================================================
// Mass Units
// ============================================================================

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

/// Density in kilograms per cubic meter
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgPerM3(pub f64);

impl KgPerM3 {
    /// Mass of a volume (m³) of this material
    pub fn mass_of(self, volume_m3: f64) -> Kilograms {
        Kilograms(self.0 * volume_m3)
    }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for Megapascals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*} MPa", p, self.0),
            None => write!(f, "{} MPa", self.0),
        }
    }
}

impl fmt::Display for Kilograms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*} kg", p, self.0),
            None => write!(f, "{} kg", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stress_conversions() {
        let pa = Pascals(30e6);
        let mpa: Megapascals = pa.into();
        assert_eq!(mpa.0, 30.0);

        let back: Pascals = mpa.into();
        assert_eq!(back.0, 30e6);
    }

    #[test]
    fn test_moment_from_force_and_arm() {
        let m = Newtons(2.0) * Meters(0.25);
        assert_eq!(m, NewtonMeters(0.5));
    }

    #[test]
    fn test_stress_ratio() {
        assert_eq!(Pascals(30e6) / Pascals(15e6), 2.0);
    }

    #[test]
    fn test_density_mass() {
        let mass = KgPerM3(1000.0).mass_of(1.03125e-4);
        assert!((mass.0 - 0.103125).abs() < 1e-12);
    }

    #[test]
    fn test_display_precision() {
        assert_eq!(format!("{:.2}", Megapascals(1.28)), "1.28 MPa");
        assert_eq!(format!("{:.3}", Kilograms(0.108552)), "0.109 kg");
    }

    #[test]
    fn test_serialization_transparent() {
        let mpa = Megapascals(1.5);
        let json = serde_json::to_string(&mpa).unwrap();
        assert_eq!(json, "1.5");
    }
}
