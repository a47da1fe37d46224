//! Conductor records and their lookup.
//!
//! The engine consumes a fully populated [`Conductor`]; where it comes from
//! is behind the [`ConductorLookup`] trait. [`ConductorCatalog`] is the
//! in-memory implementation backed by the catalog text format.

mod repository;
mod types;

pub use repository::{ConductorCatalog, ConductorLookup, ConductorQuery};
pub use types::Conductor;
