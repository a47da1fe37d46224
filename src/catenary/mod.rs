//! Catenary states, apparent loads and the change-of-state model.

mod model;
mod types;

pub use model::CatenaryModel;
pub use types::{CatenaryApparentLoad, CatenaryState};
