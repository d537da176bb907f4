//! # Diagram Series
//!
//! The two along-the-span views of a run, as plain data: moment vs. position
//! and stress (MPa) vs. position. Rendering is left to whatever consumes the
//! JSON; these are derived from the station loop and never recomputed.

use serde::{Deserialize, Serialize};

use crate::calculations::load_stress::LoadStressResult;
use crate::units::{Megapascals, Pascals};

/// A sampled curve with its labels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagram {
    /// Plot title
    pub title: String,
    /// Horizontal axis label, with units
    pub x_label: String,
    /// Vertical axis label, with units
    pub y_label: String,
    /// (x, y) pairs in station order
    pub points: Vec<(f64, f64)>,
}

impl Diagram {
    /// Smallest and largest y value, or None for an empty diagram
    pub fn y_range(&self) -> Option<(f64, f64)> {
        let mut points = self.points.iter();
        let &(_, first) = points.next()?;
        Some(points.fold((first, first), |(lo, hi), &(_, y)| (lo.min(y), hi.max(y))))
    }
}

/// Moment [N·m] against position [m]
pub fn moment_diagram(result: &LoadStressResult) -> Diagram {
    Diagram {
        title: "Moment along the beam".to_string(),
        x_label: "position x (m)".to_string(),
        y_label: "moment (Nm)".to_string(),
        points: result
            .positions_m
            .iter()
            .copied()
            .zip(result.moments_nm.iter().copied())
            .collect(),
    }
}

/// Bending stress [MPa] against position [m]
pub fn stress_diagram(result: &LoadStressResult) -> Diagram {
    Diagram {
        title: "Bending stress along the beam".to_string(),
        x_label: "position x (m)".to_string(),
        y_label: "stress (MPa)".to_string(),
        points: result
            .positions_m
            .iter()
            .zip(&result.stresses_pa)
            .map(|(&x, &stress)| (x, Megapascals::from(Pascals(stress)).0))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::load_stress::calculate;
    use crate::config::SlabConfig;

    #[test]
    fn test_moment_diagram_matches_stations() {
        let result = calculate(&SlabConfig::default()).unwrap();
        let diagram = moment_diagram(&result);

        assert_eq!(diagram.title, "Moment along the beam");
        assert_eq!(diagram.points.len(), 20);
        assert_eq!(diagram.points[0], (0.0, result.moments_nm[0]));
        assert_eq!(diagram.points[19].0, 0.5);
    }

    #[test]
    fn test_stress_diagram_in_mpa() {
        let result = calculate(&SlabConfig::default()).unwrap();
        let diagram = stress_diagram(&result);

        assert_eq!(diagram.title, "Bending stress along the beam");
        assert_eq!(diagram.y_label, "stress (MPa)");
        assert!((diagram.points[0].1 - result.stresses_pa[0] / 1e6).abs() < 1e-12);
    }

    #[test]
    fn test_y_range() {
        let result = calculate(&SlabConfig::default()).unwrap();
        let (lo, hi) = moment_diagram(&result).y_range().unwrap();
        assert_eq!(lo, 0.0);
        assert!((hi - 0.5).abs() < 1e-12);

        let empty = Diagram {
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            points: Vec::new(),
        };
        assert!(empty.y_range().is_none());
    }
}
