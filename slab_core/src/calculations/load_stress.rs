//! # Moment, Stress and Mass Along the Slab
//!
//! Discretizes the slab into N evenly spaced stations and evaluates, per
//! station:
//!
//! ```text
//! M(x) = T (L - x)                 cantilever with tip thrust at x = 0
//! σ(x) = -M(x) c / I(x),  c = h/2  extreme-fiber bending stress
//! m   += ρ dx A(x)                 uniform-dx sum over every station
//! ```
//!
//! The mass sum uses `dx = L/(N-1)` at every station including both ends, so
//! it is not the trapezoidal rule; it overshoots the exact integral by roughly
//! one half-interval at each end. `closed_form_mass_kg` is reported next to it.
//!
//! ## Example
//!
//! ```rust
//! use slab_core::calculations::load_stress::calculate;
//! use slab_core::config::SlabConfig;
//!
//! let result = calculate(&SlabConfig::default()).unwrap();
//! assert_eq!(result.positions_m.len(), 20);
//! assert_eq!(result.max_stress_station, 0);
//! assert!((result.max_stress_pa - 1.28e6).abs() < 1.0);
//! ```

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::config::SlabConfig;
use crate::errors::{CalcError, CalcResult};
use crate::geometry::SlabGeometry;
use crate::units::{KgPerM3, Meters, Newtons};

/// Section and load values at one station
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Station index, 0 at the free end
    pub index: usize,
    /// Distance from the free end (m)
    pub position_m: f64,
    /// Section height (m)
    pub height_m: f64,
    /// Cross-sectional area (m²)
    pub area_m2: f64,
    /// Second moment of area (m⁴)
    pub area_moment_m4: f64,
    /// Bending moment (N·m)
    pub moment_nm: f64,
    /// Extreme-fiber bending stress (Pa), negative for the compressed face
    pub stress_pa: f64,
}

/// Results of the station loop.
///
/// `positions_m`, `moments_nm`, `stresses_pa` and `stations` share indices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadStressResult {
    /// Station positions, `positions_m[0] == 0` and last == L
    pub positions_m: Vec<f64>,
    /// Bending moment per station (N·m)
    pub moments_nm: Vec<f64>,
    /// Bending stress per station (Pa)
    pub stresses_pa: Vec<f64>,
    /// Full per-station records
    pub stations: Vec<Station>,
    /// Station spacing used for the mass sum (m)
    pub spacing_m: f64,
    /// Mass from the uniform-dx station sum (kg)
    pub mass_kg: f64,
    /// Mass from the exact integral of the linear taper (kg)
    pub closed_form_mass_kg: f64,
    /// Largest |stress| over all stations (Pa)
    pub max_stress_pa: f64,
    /// Index of the first station where `max_stress_pa` is attained
    pub max_stress_station: usize,
}

impl LoadStressResult {
    /// Position of the peak-stress station (m)
    pub fn max_stress_position_m(&self) -> f64 {
        self.positions_m[self.max_stress_station]
    }

    /// Relative error of the station-sum mass against the exact integral
    pub fn mass_quadrature_error(&self) -> f64 {
        if self.closed_form_mass_kg == 0.0 {
            0.0
        } else {
            (self.mass_kg - self.closed_form_mass_kg) / self.closed_form_mass_kg
        }
    }
}

/// N evenly spaced positions over [0, L], ends exact.
pub fn station_positions(length_m: f64, stations: usize) -> Vec<f64> {
    let last = stations.saturating_sub(1);
    (0..stations)
        .map(|i| {
            // L * i / (N-1) can round away from L at i = N-1
            if i == last {
                length_m
            } else {
                length_m * i as f64 / last as f64
            }
        })
        .collect()
}

/// Bending moment from the tip thrust, M = T (L - x)
pub fn moment_at(thrust_n: f64, geometry: &SlabGeometry, x_m: f64) -> f64 {
    (Newtons(thrust_n) * Meters(geometry.length_m - x_m)).0
}

/// Evaluate one station. Fails if the section has no bending stiffness.
fn evaluate_station(config: &SlabConfig, index: usize, x_m: f64) -> CalcResult<Station> {
    let geometry = &config.geometry;
    let height_m = geometry.height(x_m);
    let area_moment_m4 = geometry.area_moment(x_m);
    let moment_nm = moment_at(config.thrust_n, geometry, x_m);

    if area_moment_m4 == 0.0 {
        return Err(CalcError::numeric_fault(
            "bending stress",
            Some(index),
            format!(
                "second moment of area is zero at x = {} m (height {} m, width {} m)",
                x_m,
                height_m,
                geometry.width(x_m)
            ),
        ));
    }

    if !area_moment_m4.is_finite() {
        return Err(CalcError::numeric_fault(
            "bending stress",
            Some(index),
            format!(
                "second moment of area overflows at x = {} m (height {} m)",
                x_m, height_m
            ),
        ));
    }

    let stress_pa = -moment_nm * (height_m / 2.0) / area_moment_m4;

    // Subnormal I or huge thrust can push M c / I past f64::MAX
    if !stress_pa.is_finite() {
        return Err(CalcError::numeric_fault(
            "bending stress",
            Some(index),
            format!(
                "stress overflows at x = {} m (moment {} N*m, I = {:e} m^4)",
                x_m, moment_nm, area_moment_m4
            ),
        ));
    }

    Ok(Station {
        index,
        position_m: x_m,
        height_m,
        area_m2: geometry.area(x_m),
        area_moment_m4,
        moment_nm,
        stress_pa,
    })
}

/// Compute moment, stress and mass at every station.
///
/// # Returns
///
/// * `Ok(LoadStressResult)` - Per-station sequences and aggregates
/// * `Err(CalcError::InvalidInput)` - Config failed validation
/// * `Err(CalcError::NumericFault)` - Zero second moment of area at a station
pub fn calculate(config: &SlabConfig) -> CalcResult<LoadStressResult> {
    config.validate()?;

    let positions_m = station_positions(config.geometry.length_m, config.stations);
    let spacing_m = config.spacing_m();
    debug!(
        "Evaluating {} stations over {} m (dx = {:.6e} m)",
        config.stations, config.geometry.length_m, spacing_m
    );

    let mut stations = Vec::with_capacity(positions_m.len());
    let mut mass_kg = 0.0;
    for (index, &x_m) in positions_m.iter().enumerate() {
        let station = evaluate_station(config, index, x_m)?;
        mass_kg += config.density_kg_m3 * spacing_m * station.area_m2;
        stations.push(station);
    }

    // First occurrence wins on ties
    let mut max_stress_pa = 0.0f64;
    let mut max_stress_station = 0;
    for station in &stations {
        if station.stress_pa.abs() > max_stress_pa {
            max_stress_pa = station.stress_pa.abs();
            max_stress_station = station.index;
        }
    }

    let closed_form_mass_kg = KgPerM3(config.density_kg_m3)
        .mass_of(config.geometry.closed_form_volume_m3())
        .0;

    info!(
        "'{}': mass {:.4} kg, peak |stress| {:.4e} Pa at station {}",
        config.label, mass_kg, max_stress_pa, max_stress_station
    );

    Ok(LoadStressResult {
        moments_nm: stations.iter().map(|s| s.moment_nm).collect(),
        stresses_pa: stations.iter().map(|s| s.stress_pa).collect(),
        positions_m,
        stations,
        spacing_m,
        mass_kg,
        closed_form_mass_kg,
        max_stress_pa,
        max_stress_station,
    })
}
