//! Conductor physical properties.

use crate::GRAVITY;

/// An overhead line conductor.
///
/// Values are in catalog units: areas in mm², diameters in mm, mass in
/// kg/km, rated strength in daN, resistance in Ω/km, elastic modulus in
/// daN/mm² and thermal expansion in 1/°C.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Conductor {
    /// Official designation
    pub designation: String,
    /// Legacy or older code
    pub legacy_code: Option<String>,
    /// Aluminium cross-sectional area
    pub al_area: f64,
    /// Steel cross-sectional area
    pub steel_area: f64,
    /// Total cross-sectional area
    pub total_area: f64,
    /// Number of aluminium strands
    pub al_strands: u32,
    /// Number of steel strands
    pub steel_strands: u32,
    /// Core diameter
    pub core_diameter: f64,
    /// Overall diameter
    pub overall_diameter: f64,
    /// Mass per unit length
    pub mass: f64,
    /// Rated tensile strength (RTS)
    pub rated_strength: f64,
    /// DC resistance
    pub resistance_dc: f64,
    /// Young's modulus of the conductor as a whole
    pub elastic_modulus: f64,
    /// Linear thermal expansion coefficient
    pub thermal_exp_factor: f64,
    unit_weight_override: Option<f64>,
}

impl Conductor {
    /// Create a conductor with the given designation and all properties zeroed.
    pub fn new(designation: impl Into<String>) -> Self {
        Self {
            designation: designation.into(),
            ..Self::default()
        }
    }

    /// Set the legacy code.
    pub fn with_legacy_code(mut self, legacy_code: impl Into<String>) -> Self {
        self.legacy_code = Some(legacy_code.into());
        self
    }

    /// Set the aluminium, steel and total cross-sectional areas.
    pub fn with_areas(mut self, al_area: f64, steel_area: f64, total_area: f64) -> Self {
        self.al_area = al_area;
        self.steel_area = steel_area;
        self.total_area = total_area;
        self
    }

    /// Set the strand counts.
    pub fn with_strands(mut self, al_strands: u32, steel_strands: u32) -> Self {
        self.al_strands = al_strands;
        self.steel_strands = steel_strands;
        self
    }

    /// Set the core and overall diameters.
    pub fn with_diameters(mut self, core_diameter: f64, overall_diameter: f64) -> Self {
        self.core_diameter = core_diameter;
        self.overall_diameter = overall_diameter;
        self
    }

    /// Set the mass per unit length.
    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    /// Set the rated tensile strength.
    pub fn with_rated_strength(mut self, rated_strength: f64) -> Self {
        self.rated_strength = rated_strength;
        self
    }

    /// Set the DC resistance.
    pub fn with_resistance_dc(mut self, resistance_dc: f64) -> Self {
        self.resistance_dc = resistance_dc;
        self
    }

    /// Set the elastic modulus.
    pub fn with_elastic_modulus(mut self, elastic_modulus: f64) -> Self {
        self.elastic_modulus = elastic_modulus;
        self
    }

    /// Set the thermal expansion coefficient.
    pub fn with_thermal_exp_factor(mut self, thermal_exp_factor: f64) -> Self {
        self.thermal_exp_factor = thermal_exp_factor;
        self
    }

    /// Unit weight in daN/m.
    ///
    /// Returns the override verbatim when one is set, otherwise the mass
    /// converted from kg/km to daN/m.
    pub fn unit_weight(&self) -> f64 {
        match self.unit_weight_override {
            Some(weight) => weight,
            None => self.mass * GRAVITY * 1e-4,
        }
    }

    /// Override the unit weight, or clear the override with `None`.
    pub fn set_unit_weight(&mut self, weight: Option<f64>) {
        self.unit_weight_override = weight;
    }

    /// The current unit-weight override, if any.
    pub fn unit_weight_override(&self) -> Option<f64> {
        self.unit_weight_override
    }

    /// Axial stiffness `E·S` in daN.
    pub fn axial_stiffness(&self) -> f64 {
        self.elastic_modulus * self.total_area
    }
}
