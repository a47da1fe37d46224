//! # Sagtension Core
//!
//! Sag-tension analysis for overhead power-line conductors.
//!
//! This library provides:
//! - A Newton-Raphson root finder for scalar equations
//! - The catenary change-of-state equation between thermal/loading conditions
//! - Ice and wind loading by climatic zone, design tension states and ruling span
//! - Selection of the controlling design hypothesis across spans
//! - A text catalog format for conductor properties
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`solver`] - Newton-Raphson iteration
//! - [`catenary`] - Mechanical states, apparent loads and the change-of-state model
//! - [`conductor`] - Conductor records and lookup
//! - [`catalog`] - Parser for the conductor catalog format
//! - [`mech`] - Zone loading, design states and the sag-tension analyzer
//! - [`report`] - Text tables (CLI only)
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! sagtension conductors.cat --legacy "LA 380" --zone B \
//!     --hypothesis 15:0.15 --hypothesis -15:0.33:ice --span 120 --span 250
//! ```
//!
//! ### Library
//!
//! ```
//! use sagtension_core::{Conductor, MechAnalysis, MechAnalysisHypothesis, MechAnalysisZone, SagTensionAnalyzer};
//!
//! let conductor = Conductor::new("LA 380")
//!     .with_areas(337.3, 43.7, 381.0)
//!     .with_diameters(8.46, 25.38)
//!     .with_mass(932.0)
//!     .with_rated_strength(10_718.0)
//!     .with_elastic_modulus(6900.0)
//!     .with_thermal_exp_factor(1.93e-5);
//!
//! let mech = MechAnalysis::new(&conductor, MechAnalysisZone::A);
//! let analyzer = SagTensionAnalyzer::new(
//!     mech,
//!     vec![MechAnalysisHypothesis::new(15.0, 0.15), MechAnalysisHypothesis::new(-5.0, 0.18)],
//! )?;
//! let controlling = analyzer.find_controlling_state(50.0)?;
//! assert_eq!(controlling.temperature, -5.0);
//! # Ok::<(), sagtension_core::SagTensionError>(())
//! ```
//!
//! ## Units
//!
//! Spans in m, diameters in mm, areas in mm², tensions in daN, unit weights
//! in daN/m, elastic modulus in daN/mm², temperatures in °C.

pub mod catalog;
pub mod catenary;
pub mod conductor;
pub mod error;
pub mod mech;
pub mod solver;

#[cfg(feature = "cli")]
pub mod report;

// Re-export main types for convenience
pub use catenary::{CatenaryApparentLoad, CatenaryModel, CatenaryState};
pub use conductor::{Conductor, ConductorCatalog, ConductorLookup, ConductorQuery};
pub use error::{Result, SagTensionError};
pub use mech::{
    Loading, MechAnalysis, MechAnalysisHypothesis, MechAnalysisZone, SagTensionAnalyzer,
    SpanResults,
};
pub use solver::{find_root, NewtonRaphson};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmSagTension;

/// Standard gravitational acceleration, m/s².
pub const GRAVITY: f64 = 9.80665;
