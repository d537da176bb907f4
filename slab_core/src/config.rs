//! # Slab Configuration
//!
//! `SlabConfig` is the single input to the calculation pipeline. It replaces
//! loose module-level constants: every profile and load function receives
//! the values it needs from here.
//!
//! Every field has a default from the reference configuration, so a config
//! file only needs to name the values it changes.
//!
//! ## Example
//!
//! ```rust
//! use slab_core::config::SlabConfig;
//!
//! let config: SlabConfig = serde_json::from_str(r#"{ "thrust_n": 4.0 }"#).unwrap();
//! assert_eq!(config.thrust_n, 4.0);
//! assert_eq!(config.stations, 20);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::geometry::SlabGeometry;

/// Current schema version for config files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Smallest station count that still defines a spacing
pub const MIN_STATIONS: usize = 2;

/// Largest accepted station count; the station arrays are allocated up front
pub const MAX_STATIONS: usize = 1_000_000;

/// Input parameters for a slab run.
///
/// ## JSON Example
///
/// ```json
/// {
///   "version": "0.1.0",
///   "label": "Reference slab",
///   "thrust_n": 1.0,
///   "density_kg_m3": 1000.0,
///   "yield_stress_pa": 30000000.0,
///   "stations": 20,
///   "geometry": {
///     "length_m": 0.5,
///     "fixed_end_height_m": 0.015,
///     "taper_per_m": 0.005,
///     "width_m": 0.015
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlabConfig {
    /// Schema version of the file this config was read from
    pub version: String,

    /// User label for this run
    pub label: String,

    /// Thrust applied at the free end (N)
    pub thrust_n: f64,

    /// Material density (kg/m³)
    pub density_kg_m3: f64,

    /// Material yield strength (Pa)
    pub yield_stress_pa: f64,

    /// Number of evenly spaced stations over [0, L], both ends included
    pub stations: usize,

    /// Slab profile
    pub geometry: SlabGeometry,
}

impl Default for SlabConfig {
    fn default() -> Self {
        SlabConfig {
            version: SCHEMA_VERSION.to_string(),
            label: "Reference slab".to_string(),
            thrust_n: 1.0,
            density_kg_m3: 1000.0,
            yield_stress_pa: 30e6,
            stations: 20,
            geometry: SlabGeometry::default(),
        }
    }
}

impl SlabConfig {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.stations < MIN_STATIONS {
            return Err(CalcError::invalid_input(
                "stations",
                self.stations.to_string(),
                format!("At least {} stations are required", MIN_STATIONS),
            ));
        }
        if self.stations > MAX_STATIONS {
            return Err(CalcError::invalid_input(
                "stations",
                self.stations.to_string(),
                format!("At most {} stations are supported", MAX_STATIONS),
            ));
        }
        if !self.thrust_n.is_finite() {
            return Err(CalcError::invalid_input(
                "thrust_n",
                self.thrust_n.to_string(),
                "Thrust must be finite",
            ));
        }
        if !self.density_kg_m3.is_finite() || self.density_kg_m3 < 0.0 {
            return Err(CalcError::invalid_input(
                "density_kg_m3",
                self.density_kg_m3.to_string(),
                "Density must be finite and not negative",
            ));
        }
        if !self.yield_stress_pa.is_finite() || self.yield_stress_pa <= 0.0 {
            return Err(CalcError::invalid_input(
                "yield_stress_pa",
                self.yield_stress_pa.to_string(),
                "Yield stress must be finite and positive",
            ));
        }
        self.geometry.validate()
    }

    /// Station spacing dx = L / (N - 1).
    ///
    /// Only meaningful once `validate()` has accepted the station count.
    pub fn spacing_m(&self) -> f64 {
        self.geometry.length_m / self.stations.saturating_sub(1) as f64
    }
}
