//! # Slab Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(...)` / `evaluate(...)` - Pure function returning `CalcResult`
//!
//! [`analyze`] runs the whole pipeline in order: profile and station loop,
//! then the safety check, then the diagram series.
//!
//! ## Available Calculations
//!
//! - [`load_stress`] - Moment, bending stress and mass per station
//! - [`safety`] - Factor of safety against yield and verdict

pub mod load_stress;
pub mod safety;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::SlabConfig;
use crate::diagrams::{moment_diagram, stress_diagram, Diagram};
use crate::errors::CalcResult;

// Re-export commonly used types
pub use load_stress::{LoadStressResult, Station};
pub use safety::{SafetyResult, Verdict};

/// Everything produced by one run.
///
/// ## JSON Example (abridged)
///
/// ```json
/// {
///   "config": { "label": "Reference slab", "thrust_n": 1.0, "...": "..." },
///   "load_stress": { "mass_kg": 0.10855, "max_stress_pa": 1280000.0, "...": "..." },
///   "safety": { "factor_of_safety": 23.4375, "verdict": "Safe", "...": "..." },
///   "moment_diagram": { "title": "Moment along the beam", "points": [[0.0, 0.5], "..."] },
///   "stress_diagram": { "title": "Bending stress along the beam", "points": [[0.0, -1.28], "..."] }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlabResult {
    /// Configuration the run used
    pub config: SlabConfig,
    /// Station loop output
    pub load_stress: LoadStressResult,
    /// Safety check output
    pub safety: SafetyResult,
    /// Moment vs. position
    pub moment_diagram: Diagram,
    /// Stress (MPa) vs. position
    pub stress_diagram: Diagram,
}

impl SlabResult {
    /// Check if the slab passes the safety check
    pub fn passes(&self) -> bool {
        self.safety.verdict.passes()
    }
}

/// Run the full slab check.
///
/// # Example
///
/// ```rust
/// use slab_core::calculations::analyze;
/// use slab_core::config::SlabConfig;
///
/// let result = analyze(&SlabConfig::default()).expect("reference slab is valid");
/// assert!(result.passes());
/// ```
pub fn analyze(config: &SlabConfig) -> CalcResult<SlabResult> {
    debug!("Analyzing '{}'", config.label);

    let load_stress = load_stress::calculate(config)?;
    let safety = safety::evaluate(load_stress.max_stress_pa, config.yield_stress_pa)?;

    Ok(SlabResult {
        config: config.clone(),
        moment_diagram: moment_diagram(&load_stress),
        stress_diagram: stress_diagram(&load_stress),
        load_stress,
        safety,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_run_is_safe() {
        let result = analyze(&SlabConfig::default()).unwrap();
        assert!((result.safety.factor_of_safety - 23.4375).abs() < 1e-6);
        assert_eq!(result.safety.verdict, Verdict::Safe);
        assert!(result.passes());
    }

    #[test]
    fn test_heavy_thrust_needs_redesign() {
        // Peak stress scales with T: 1.28e6 * 20 = 25.6e6 Pa -> FoS ≈ 1.17
        let config = SlabConfig { thrust_n: 20.0, ..SlabConfig::default() };
        let result = analyze(&config).unwrap();
        assert_eq!(result.safety.verdict, Verdict::Redesign);
        assert!(!result.passes());
    }

    #[test]
    fn test_zero_thrust_faults_in_safety_stage() {
        let config = SlabConfig { thrust_n: 0.0, ..SlabConfig::default() };
        let err = analyze(&config).unwrap_err();
        assert_eq!(err.error_code(), "NUMERIC_FAULT");
        assert!(err.to_string().contains("factor of safety"));
    }

    #[test]
    fn test_result_serialization() {
        let result = analyze(&SlabConfig::default()).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();

        assert!(json.contains("max_stress_pa"));
        assert!(json.contains("factor_of_safety"));
        assert!(json.contains("Bending stress along the beam"));

        let roundtrip: SlabResult = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.safety.verdict, result.safety.verdict);
        assert!((roundtrip.load_stress.mass_kg - result.load_stress.mass_kg).abs() < 1e-12);
    }
}
