//! # Slab Profile
//!
//! Closed-form cross-section properties of a tapered rectangular slab.
//!
//! The slab is clamped at `x = L` and loaded at its free end `x = 0`. Height
//! varies linearly along the span and is smallest at the free end:
//!
//! ```text
//! h(x) = h0 - k (L - x)
//! b(x) = b0
//! A(x) = b h
//! I(x) = b h³ / 12
//! ```
//!
//! ## Example
//!
//! ```rust
//! use slab_core::geometry::SlabGeometry;
//!
//! let geometry = SlabGeometry::default();
//! assert!((geometry.height(0.0) - 0.0125).abs() < 1e-12);
//! assert!((geometry.height(geometry.length_m) - 0.015).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Geometry of the tapered slab.
///
/// All values in meters. Positions passed to the profile functions are
/// measured from the free (loaded) end.
///
/// ## JSON Example
///
/// ```json
/// {
///   "length_m": 0.5,
///   "fixed_end_height_m": 0.015,
///   "taper_per_m": 0.005,
///   "width_m": 0.015
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlabGeometry {
    /// Length of the slab from free end to clamp
    pub length_m: f64,

    /// Height at the clamped end, `h0`
    pub fixed_end_height_m: f64,

    /// Height lost per meter moving toward the free end, `k`
    pub taper_per_m: f64,

    /// Constant slab width, `b0`
    pub width_m: f64,
}

impl Default for SlabGeometry {
    fn default() -> Self {
        SlabGeometry {
            length_m: 0.5,
            fixed_end_height_m: 0.015,
            taper_per_m: 0.005,
            width_m: 0.015,
        }
    }
}

impl SlabGeometry {
    /// Section height h(x)
    pub fn height(&self, x_m: f64) -> f64 {
        self.fixed_end_height_m - self.taper_per_m * (self.length_m - x_m)
    }

    /// Section width b(x); constant along the span
    pub fn width(&self, _x_m: f64) -> f64 {
        self.width_m
    }

    /// Cross-sectional area A = b h (m²)
    pub fn area(&self, x_m: f64) -> f64 {
        self.width(x_m) * self.height(x_m)
    }

    /// Second moment of area about the bending axis, I = b h³ / 12 (m⁴)
    pub fn area_moment(&self, x_m: f64) -> f64 {
        self.width(x_m) * self.height(x_m).powi(3) / 12.0
    }

    /// Height at the free end (x = 0)
    pub fn free_end_height_m(&self) -> f64 {
        self.height(0.0)
    }

    /// Exact volume ∫₀ᴸ A(x) dx for the linear taper (m³)
    pub fn closed_form_volume_m3(&self) -> f64 {
        let l = self.length_m;
        self.width_m * (self.fixed_end_height_m * l - self.taper_per_m * l * l / 2.0)
    }

    /// Validate that the profile is physically meaningful over [0, L].
    ///
    /// Height is linear in x, so checking both ends bounds it everywhere.
    /// Zero height or width passes here and surfaces later as a numeric
    /// fault at the station where the section vanishes.
    pub fn validate(&self) -> CalcResult<()> {
        let fields = [
            ("geometry.length_m", self.length_m),
            ("geometry.fixed_end_height_m", self.fixed_end_height_m),
            ("geometry.taper_per_m", self.taper_per_m),
            ("geometry.width_m", self.width_m),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(CalcError::invalid_input(field, value.to_string(), "Value must be finite"));
            }
        }

        if self.length_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "geometry.length_m",
                self.length_m.to_string(),
                "Length must be positive",
            ));
        }
        if self.width_m < 0.0 {
            return Err(CalcError::invalid_input(
                "geometry.width_m",
                self.width_m.to_string(),
                "Width must not be negative",
            ));
        }
        if self.fixed_end_height_m < 0.0 {
            return Err(CalcError::invalid_input(
                "geometry.fixed_end_height_m",
                self.fixed_end_height_m.to_string(),
                "Height at the clamped end must not be negative",
            ));
        }
        let free_end = self.free_end_height_m();
        if free_end < 0.0 {
            return Err(CalcError::invalid_input(
                "geometry.taper_per_m",
                self.taper_per_m.to_string(),
                format!("Taper gives a negative free-end height ({:.6} m)", free_end),
            ));
        }
        Ok(())
    }
}
