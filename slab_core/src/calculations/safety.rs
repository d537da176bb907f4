//! # Factor of Safety
//!
//! Compares the peak bending stress against the yield strength. A factor of
//! safety below [`REQUIRED_FACTOR_OF_SAFETY`] calls for a redesign; exactly
//! the required value passes.
//!
//! ## Example
//!
//! ```rust
//! use slab_core::calculations::safety::{evaluate, Verdict};
//!
//! let result = evaluate(1.28e6, 30e6).unwrap();
//! assert!((result.factor_of_safety - 23.4375).abs() < 1e-9);
//! assert_eq!(result.verdict, Verdict::Safe);
//! ```

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::Pascals;

/// Minimum acceptable yield-to-peak stress ratio
pub const REQUIRED_FACTOR_OF_SAFETY: f64 = 2.0;

/// Pass/fail outcome of the safety check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Factor of safety is at least the required value
    Safe,
    /// Factor of safety is below the required value
    Redesign,
}

impl Verdict {
    /// Classify a factor of safety
    pub fn from_factor(factor_of_safety: f64) -> Self {
        if factor_of_safety < REQUIRED_FACTOR_OF_SAFETY {
            Verdict::Redesign
        } else {
            Verdict::Safe
        }
    }

    /// Message printed under the numeric results
    pub fn message(&self) -> &'static str {
        match self {
            Verdict::Safe => "Good! Your factor of safety is greater or equal to 2.",
            Verdict::Redesign => "Your factor of safety is less than 2! Redesign and try again.",
        }
    }

    /// Check if the design passes
    pub fn passes(&self) -> bool {
        matches!(self, Verdict::Safe)
    }
}

/// Results from the safety check
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SafetyResult {
    /// Yield strength used (Pa)
    pub yield_stress_pa: f64,
    /// Peak absolute bending stress (Pa)
    pub max_stress_pa: f64,
    /// yield / peak
    pub factor_of_safety: f64,
    /// Threshold the factor was checked against
    pub required_factor_of_safety: f64,
    /// Outcome
    pub verdict: Verdict,
}

/// Compute the factor of safety and verdict.
///
/// # Returns
///
/// * `Ok(SafetyResult)` - Factor of safety and verdict
/// * `Err(CalcError::NumericFault)` - Peak stress is zero, so the factor is undefined
pub fn evaluate(max_stress_pa: f64, yield_stress_pa: f64) -> CalcResult<SafetyResult> {
    if max_stress_pa == 0.0 {
        return Err(CalcError::numeric_fault(
            "factor of safety",
            None,
            "peak bending stress is zero (no thrust applied?)",
        ));
    }

    let factor_of_safety = Pascals(yield_stress_pa) / Pascals(max_stress_pa);
    let verdict = Verdict::from_factor(factor_of_safety);

    match verdict {
        Verdict::Safe => info!("Factor of safety {:.3} meets {}", factor_of_safety, REQUIRED_FACTOR_OF_SAFETY),
        Verdict::Redesign => warn!(
            "Factor of safety {:.3} is below {}",
            factor_of_safety, REQUIRED_FACTOR_OF_SAFETY
        ),
    }

    Ok(SafetyResult {
        yield_stress_pa,
        max_stress_pa,
        factor_of_safety,
        required_factor_of_safety: REQUIRED_FACTOR_OF_SAFETY,
        verdict,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_is_yield_over_peak() {
        let result = evaluate(1.28e6, 30e6).unwrap();
        assert!((result.factor_of_safety - 30e6 / 1.28e6).abs() < 1e-12);
        assert_eq!(result.required_factor_of_safety, 2.0);
    }

    #[test]
    fn test_exactly_two_is_safe() {
        let result = evaluate(15e6, 30e6).unwrap();
        assert_eq!(result.factor_of_safety, 2.0);
        assert_eq!(result.verdict, Verdict::Safe);
    }

    #[test]
    fn test_below_two_needs_redesign() {
        let result = evaluate(20e6, 30e6).unwrap();
        assert_eq!(result.verdict, Verdict::Redesign);
        assert!(!result.verdict.passes());
    }

    #[test]
    fn test_just_below_two() {
        assert_eq!(Verdict::from_factor(1.999_999), Verdict::Redesign);
        assert_eq!(Verdict::from_factor(2.0), Verdict::Safe);
        assert_eq!(Verdict::from_factor(2.000_001), Verdict::Safe);
    }

    #[test]
    fn test_zero_peak_stress_is_numeric_fault() {
        let err = evaluate(0.0, 30e6).unwrap_err();
        assert_eq!(err.error_code(), "NUMERIC_FAULT");
        assert_eq!(err.station(), None);
    }

    #[test]
    fn test_messages() {
        assert!(Verdict::Safe.message().starts_with("Good!"));
        assert!(Verdict::Redesign.message().contains("Redesign"));
    }

    #[test]
    fn test_verdict_serialization() {
        let json = serde_json::to_string(&Verdict::Redesign).unwrap();
        assert_eq!(json, "\"Redesign\"");
    }
}
