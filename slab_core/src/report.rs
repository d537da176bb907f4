//! # Console Report
//!
//! Text rendering of a [`SlabResult`]. [`render_summary`] prints the three
//! headline numbers and the verdict; [`render_detailed`] adds the inputs and a
//! per-station table.

use crate::calculations::SlabResult;
use crate::units::{Kilograms, Megapascals, Pascals};

/// Headline numbers and verdict, one per line.
///
/// ```text
/// Mass = 0.109 kg
/// Maximum stress = 1.28 MPa
/// Factor of safety = 23.438
/// Good! Your factor of safety is greater or equal to 2.
/// ```
pub fn render_summary(result: &SlabResult) -> String {
    let mass = Kilograms(result.load_stress.mass_kg);
    let max_stress = Megapascals::from(Pascals(result.load_stress.max_stress_pa));

    let mut output = String::new();
    output.push_str(&format!("Mass = {:.3}\n", mass));
    output.push_str(&format!("Maximum stress = {:.2}\n", max_stress));
    output.push_str(&format!("Factor of safety = {:.3}\n", result.safety.factor_of_safety));
    output.push_str(result.safety.verdict.message());
    output.push('\n');
    output
}

/// Inputs, per-station table, then the summary.
pub fn render_detailed(result: &SlabResult) -> String {
    let config = &result.config;
    let geometry = &config.geometry;
    let load_stress = &result.load_stress;

    let mut output = String::new();
    output.push_str(&format!("Slab: {}\n", config.label));
    output.push_str(&format!(
        "  Length {} m, width {} m, height {:.4} m (free end) to {:.4} m (clamp)\n",
        geometry.length_m,
        geometry.width_m,
        geometry.free_end_height_m(),
        geometry.fixed_end_height_m
    ));
    output.push_str(&format!(
        "  Thrust {} N, density {} kg/m^3, yield {:.2}\n",
        config.thrust_n,
        config.density_kg_m3,
        Megapascals::from(Pascals(config.yield_stress_pa))
    ));
    output.push_str(&format!(
        "  {} stations, dx = {:.6} m\n\n",
        config.stations, load_stress.spacing_m
    ));

    output.push_str(&format!(
        "{:>5} {:>10} {:>10} {:>12} {:>14}\n",
        "i", "x (m)", "h (m)", "M (N*m)", "stress (MPa)"
    ));
    for station in &load_stress.stations {
        output.push_str(&format!(
            "{:>5} {:>10.5} {:>10.5} {:>12.5} {:>14.4}\n",
            station.index,
            station.position_m,
            station.height_m,
            station.moment_nm,
            Megapascals::from(Pascals(station.stress_pa)).0
        ));
    }
    output.push('\n');

    output.push_str(&format!(
        "Peak stress at station {} (x = {} m)\n",
        load_stress.max_stress_station,
        load_stress.max_stress_position_m()
    ));
    output.push_str(&format!(
        "Closed-form mass = {:.3} (station sum differs by {:+.2}%)\n",
        Kilograms(load_stress.closed_form_mass_kg),
        load_stress.mass_quadrature_error() * 100.0
    ));
    output.push_str(&render_summary(result));
    output
}
