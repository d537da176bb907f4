//! # slab_core - Tapered Cantilever Slab Calculator
//!
//! `slab_core` checks a cantilevered slab of linearly tapering height under a
//! thrust at its free end: bending moment and stress at N stations, total
//! mass, and a factor of safety against yield.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions over an explicit [`SlabConfig`]
//! - **JSON-First**: Inputs, results and errors implement Serialize/Deserialize
//! - **Fail fast**: Invalid configurations and divisions by zero are errors,
//!   never infinities or NaNs in the output
//!
//! ## Quick Start
//!
//! ```rust
//! use slab_core::{analyze, SlabConfig};
//!
//! let result = analyze(&SlabConfig::default()).unwrap();
//! println!("{}", slab_core::report::render_summary(&result));
//! assert!(result.passes());
//! ```
//!
//! ## Modules
//!
//! - [`geometry`] - Slab profile: height, width, area, second moment of area
//! - [`calculations`] - Station loop and safety check
//! - [`diagrams`] - Moment and stress series along the span
//! - [`report`] - Console text rendering
//! - [`config`] - Run configuration and validation
//! - [`file_io`] - JSON config files
//! - [`units`] - SI unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod config;
pub mod diagrams;
pub mod errors;
pub mod file_io;
pub mod geometry;
pub mod report;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{analyze, SlabResult, Verdict};
pub use config::SlabConfig;
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_config, save_config};
pub use geometry::SlabGeometry;
