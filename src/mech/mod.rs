//! Mechanical analysis: loading by climatic zone, design states and the
//! controlling-hypothesis analyzer.
//!
//! ## Loading
//!
//! | Zone | Ice sleeve (daN/m, d in mm) |
//! |------|-----------------------------|
//! | A | none |
//! | B | 0.18·√d |
//! | C | 0.36·√d |
//!
//! Wind acts on the projected diameter at the regulatory 120 km/h pressure
//! (60 daN/m² up to 16 mm, 50 daN/m² above).
//!
//! ## Design states
//!
//! - EDS: 15 % of RTS at 15 °C (22 % with vibration dampers), bare conductor.
//! - CHS: caller-chosen temperature and fraction of RTS, bare conductor.

mod analysis;
mod sag_tension;
mod zone;

pub use analysis::*;
pub use sag_tension::{HypothesisResult, SagTensionAnalyzer, SpanResults};
pub use zone::{Loading, MechAnalysisHypothesis, MechAnalysisZone};
