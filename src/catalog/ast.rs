//! Syntax tree for the conductor catalog.

use std::collections::HashMap;

/// Parameter names accepted inside a `.conductor` block.
pub const CONDUCTOR_PARAMS: &[&str] = &[
    "al_area",
    "steel_area",
    "total_area",
    "al_strands",
    "steel_strands",
    "core_diameter",
    "overall_diameter",
    "mass",
    "rated_strength",
    "resistance_dc",
    "elastic_modulus",
    "thermal_exp",
];

/// A parsed catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogAst {
    /// Conductor entries in file order
    pub conductors: Vec<ConductorDef>,
}

impl CatalogAst {
    /// Create a new empty catalog AST.
    pub fn new() -> Self {
        Self::default()
    }
}

/// One `.conductor` entry.
#[derive(Debug, Clone)]
pub struct ConductorDef {
    /// Official designation
    pub designation: String,
    /// Legacy code, if given
    pub legacy_code: Option<String>,
    /// Numeric parameters in catalog units
    pub params: HashMap<String, f64>,
    /// Source line number for error reporting
    pub line: usize,
}
