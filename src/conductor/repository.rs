//! Conductor lookup by designation or legacy code.

use tracing::debug;

use super::Conductor;
use crate::catalog::{self, CatalogAst, ConductorDef};
use crate::error::{Result, SagTensionError};

/// Catalog rated strengths are in kN; the engine works in daN.
const KN_TO_DAN: f64 = 100.0;

/// A conductor lookup request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConductorQuery {
    /// Official designation
    pub designation: Option<String>,
    /// Legacy code
    pub legacy_code: Option<String>,
}

impl ConductorQuery {
    /// Query by official designation.
    pub fn by_designation(designation: impl Into<String>) -> Self {
        Self {
            designation: Some(designation.into()),
            legacy_code: None,
        }
    }

    /// Query by legacy code.
    pub fn by_legacy_code(legacy_code: impl Into<String>) -> Self {
        Self {
            designation: None,
            legacy_code: Some(legacy_code.into()),
        }
    }

    fn designation(&self) -> Option<&str> {
        self.designation.as_deref().filter(|s| !s.is_empty())
    }

    fn legacy_code(&self) -> Option<&str> {
        self.legacy_code.as_deref().filter(|s| !s.is_empty())
    }

    /// True when at least one non-empty identifier is present.
    pub fn is_valid(&self) -> bool {
        self.designation().is_some() || self.legacy_code().is_some()
    }

    fn matches(&self, conductor: &Conductor) -> bool {
        self.designation() == Some(conductor.designation.as_str())
            || (self.legacy_code().is_some()
                && self.legacy_code() == conductor.legacy_code.as_deref())
    }
}

/// Source of conductor records.
pub trait ConductorLookup {
    /// Fetch the first conductor matching the designation or the legacy code.
    ///
    /// # Errors
    ///
    /// - [`SagTensionError::InvalidIdentifierQuery`] if the query names
    ///   neither identifier.
    /// - [`SagTensionError::ConductorNotFound`] if nothing matches.
    fn get(&self, query: &ConductorQuery) -> Result<Conductor>;
}

/// In-memory conductor catalog.
#[derive(Debug, Clone, Default)]
pub struct ConductorCatalog {
    conductors: Vec<Conductor>,
}

impl ConductorCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from parsed entries, converting to engine units.
    pub fn from_ast(ast: CatalogAst) -> Result<Self> {
        let mut catalog = Self::new();
        for def in &ast.conductors {
            catalog.insert(conductor_from_def(def)?)?;
        }
        debug!(count = catalog.len(), "conductor catalog loaded");
        Ok(catalog)
    }

    /// Parse catalog text into a catalog.
    pub fn parse(input: &str) -> Result<Self> {
        Self::from_ast(catalog::parse(input)?)
    }

    /// Load a catalog file.
    #[cfg(feature = "cli")]
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        Self::from_ast(catalog::parse_file(path)?)
    }

    /// Add a conductor, rejecting duplicate designations.
    pub fn insert(&mut self, conductor: Conductor) -> Result<()> {
        if self
            .conductors
            .iter()
            .any(|c| c.designation == conductor.designation)
        {
            return Err(SagTensionError::DuplicateConductor {
                designation: conductor.designation,
            });
        }
        self.conductors.push(conductor);
        Ok(())
    }

    /// Number of conductors in the catalog.
    pub fn len(&self) -> usize {
        self.conductors.len()
    }

    /// True if the catalog holds no conductors.
    pub fn is_empty(&self) -> bool {
        self.conductors.is_empty()
    }

    /// Iterate over all conductors in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Conductor> {
        self.conductors.iter()
    }
}

impl ConductorLookup for ConductorCatalog {
    fn get(&self, query: &ConductorQuery) -> Result<Conductor> {
        if !query.is_valid() {
            return Err(SagTensionError::InvalidIdentifierQuery);
        }

        self.conductors
            .iter()
            .find(|c| query.matches(c))
            .cloned()
            .ok_or_else(|| SagTensionError::ConductorNotFound {
                designation: query.designation.clone(),
                legacy_code: query.legacy_code.clone(),
            })
    }
}

fn conductor_from_def(def: &ConductorDef) -> Result<Conductor> {
    let num = |name: &str| -> Result<f64> {
        def.params.get(name).copied().ok_or_else(|| {
            SagTensionError::parse(
                def.line,
                format!("conductor '{}' is missing '{}'", def.designation, name),
            )
        })
    };
    let count = |name: &str| -> Result<u32> {
        let value = num(name)?;
        if value < 0.0 || value.fract() != 0.0 {
            return Err(SagTensionError::parse(
                def.line,
                format!("'{}' must be a whole number, got {}", name, value),
            ));
        }
        Ok(value as u32)
    };

    let mut conductor = Conductor::new(def.designation.clone())
        .with_areas(num("al_area")?, num("steel_area")?, num("total_area")?)
        .with_strands(count("al_strands")?, count("steel_strands")?)
        .with_diameters(num("core_diameter")?, num("overall_diameter")?)
        .with_mass(num("mass")?)
        .with_rated_strength(num("rated_strength")? * KN_TO_DAN)
        .with_resistance_dc(num("resistance_dc")?)
        .with_elastic_modulus(num("elastic_modulus")?)
        .with_thermal_exp_factor(num("thermal_exp")?);
    conductor.legacy_code = def.legacy_code.clone();

    Ok(conductor)
}
