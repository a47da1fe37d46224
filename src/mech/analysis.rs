//! Mechanical loading of a conductor in a climatic zone.

use super::{Loading, MechAnalysisHypothesis, MechAnalysisZone};
use crate::catenary::{CatenaryApparentLoad, CatenaryModel, CatenaryState};
use crate::conductor::Conductor;
use crate::error::{Result, SagTensionError};
use crate::solver::NewtonRaphson;

/// Reference every-day temperature, °C.
pub const EDS_TEMPERATURE: f64 = 15.0;

/// Every-day stress without vibration dampers, fraction of RTS.
pub const EDS_FACTOR: f64 = 0.15;

/// Every-day stress with vibration dampers, fraction of RTS.
pub const EDS_FACTOR_WITH_DAMPERS: f64 = 0.22;

/// Ice sleeve coefficient for zone B, daN/m per √mm.
pub const ICE_FACTOR_ZONE_B: f64 = 0.18;

/// Ice sleeve coefficient for zone C, daN/m per √mm.
pub const ICE_FACTOR_ZONE_C: f64 = 0.36;

/// Conductors up to this diameter (mm) take the higher wind pressure.
pub const WIND_DIAMETER_LIMIT: f64 = 16.0;

/// Wind pressure at 120 km/h on conductors up to 16 mm, daN/m².
pub const WIND_PRESSURE_SMALL: f64 = 60.0;

/// Wind pressure at 120 km/h on conductors over 16 mm, daN/m².
pub const WIND_PRESSURE_LARGE: f64 = 50.0;

/// Loading analysis for one conductor in one climatic zone.
#[derive(Debug, Clone, Copy)]
pub struct MechAnalysis<'a> {
    conductor: &'a Conductor,
    zone: MechAnalysisZone,
    solver: NewtonRaphson,
}

impl<'a> MechAnalysis<'a> {
    /// Create an analysis with the default root-finder settings.
    pub fn new(conductor: &'a Conductor, zone: MechAnalysisZone) -> Self {
        Self {
            conductor,
            zone,
            solver: NewtonRaphson::new(),
        }
    }

    /// Use a specific root-finder configuration for state changes.
    pub fn with_solver(mut self, solver: NewtonRaphson) -> Self {
        self.solver = solver;
        self
    }

    /// The analysed conductor.
    pub fn conductor(&self) -> &'a Conductor {
        self.conductor
    }

    /// The climatic zone.
    pub fn zone(&self) -> MechAnalysisZone {
        self.zone
    }

    /// Change-of-state model for the conductor, using this analysis' solver.
    pub fn model(&self) -> CatenaryModel<'a> {
        CatenaryModel::new(self.conductor).with_solver(self.solver)
    }

    /// Ice sleeve load in daN/m.
    ///
    /// # Errors
    ///
    /// [`SagTensionError::InvalidZoneHypothesis`] in zone A.
    pub fn ice_weight(&self) -> Result<f64> {
        let root_d = self.conductor.overall_diameter.sqrt();
        match self.zone {
            MechAnalysisZone::A => Err(SagTensionError::InvalidZoneHypothesis { zone: self.zone }),
            MechAnalysisZone::B => Ok(ICE_FACTOR_ZONE_B * root_d),
            MechAnalysisZone::C => Ok(ICE_FACTOR_ZONE_C * root_d),
        }
    }

    /// Every-day stress state: bare conductor at the reference temperature.
    pub fn eds(&self, with_dampers: bool) -> CatenaryState {
        let factor = if with_dampers {
            EDS_FACTOR_WITH_DAMPERS
        } else {
            EDS_FACTOR
        };
        self.chs(EDS_TEMPERATURE, factor)
    }

    /// Bare conductor at `temperature` with tension `rts_factor · RTS`.
    pub fn chs(&self, temperature: f64, rts_factor: f64) -> CatenaryState {
        CatenaryState::new(
            temperature,
            rts_factor * self.conductor.rated_strength,
            self.conductor.unit_weight(),
        )
    }

    /// Apparent load of the bare conductor: no wind, own weight only.
    pub fn overload(&self) -> CatenaryApparentLoad {
        CatenaryApparentLoad::new(0.0, self.conductor.unit_weight())
    }

    /// Apparent load with the zone's ice sleeve.
    pub fn ice_overload(&self) -> Result<CatenaryApparentLoad> {
        Ok(CatenaryApparentLoad::new(
            0.0,
            self.conductor.unit_weight() + self.ice_weight()?,
        ))
    }

    /// Regulatory wind pressure for the conductor's diameter, daN/m².
    pub fn wind_pressure(&self) -> f64 {
        if self.conductor.overall_diameter <= WIND_DIAMETER_LIMIT {
            WIND_PRESSURE_SMALL
        } else {
            WIND_PRESSURE_LARGE
        }
    }

    /// Apparent load with wind at `pressure` daN/m² on the projected diameter.
    pub fn wind_overload(&self, pressure: f64) -> CatenaryApparentLoad {
        CatenaryApparentLoad::new(
            pressure * self.conductor.overall_diameter * 1e-3,
            self.conductor.unit_weight(),
        )
    }

    /// Apparent load for a hypothesis loading.
    pub fn apparent_load(&self, loading: Loading) -> Result<CatenaryApparentLoad> {
        match loading {
            Loading::Bare => Ok(self.overload()),
            Loading::Ice => self.ice_overload(),
            Loading::Wind { pressure } => {
                Ok(self.wind_overload(pressure.unwrap_or_else(|| self.wind_pressure())))
            }
        }
    }

    /// Ratio of the apparent load to the bare unit weight.
    pub fn overload_factor(&self, load: &CatenaryApparentLoad) -> f64 {
        load.resultant() / self.conductor.unit_weight()
    }

    /// State at a hypothesis: its temperature, `rts_factor · RTS`, and the
    /// resultant of its loading as weight.
    pub fn hypothesis_state(&self, hypothesis: &MechAnalysisHypothesis) -> Result<CatenaryState> {
        hypothesis.validate()?;
        let load = self.apparent_load(hypothesis.loading)?;
        Ok(CatenaryState::new(
            hypothesis.temperature,
            hypothesis.rts_factor * self.conductor.rated_strength,
            load.resultant(),
        ))
    }

    /// Ruling span of a line section: `√(Σ Lᵢ³ / Σ Lᵢ)`.
    ///
    /// # Errors
    ///
    /// [`SagTensionError::InvalidParameter`] for an empty section or a
    /// non-positive span.
    pub fn ruling_span(&self, spans: &[f64]) -> Result<f64> {
        if spans.is_empty() {
            return Err(SagTensionError::invalid_parameter(
                "spans",
                "a line section needs at least one span",
            ));
        }
        if let Some(bad) = spans.iter().find(|l| !(l.is_finite() && **l > 0.0)) {
            return Err(SagTensionError::invalid_parameter(
                "spans",
                format!("span lengths must be positive, got {}", bad),
            ));
        }

        let cubes: f64 = spans.iter().map(|l| l.powi(3)).sum();
        let total: f64 = spans.iter().sum();
        Ok((cubes / total).sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn conductor() -> Conductor {
        Conductor::new("test")
            .with_areas(0.0, 0.0, 100.0)
            .with_diameters(0.0, 100.0)
            .with_mass(1000.0)
            .with_rated_strength(1000.0)
            .with_elastic_modulus(1.0)
    }

    #[test]
    fn test_ice_weight() {
        let c = conductor();
        let err = MechAnalysis::new(&c, MechAnalysisZone::A).ice_weight().unwrap_err();
        assert!(matches!(
            err,
            SagTensionError::InvalidZoneHypothesis {
                zone: MechAnalysisZone::A
            }
        ));

        let b = MechAnalysis::new(&c, MechAnalysisZone::B).ice_weight().unwrap();
        let zc = MechAnalysis::new(&c, MechAnalysisZone::C).ice_weight().unwrap();
        assert_relative_eq!(b, 0.18 * 100f64.sqrt());
        assert_relative_eq!(zc, 0.36 * 100f64.sqrt());
        assert_eq!(zc, 2.0 * b);
    }

    #[test]
    fn test_eds() {
        let c = conductor();
        let mech = MechAnalysis::new(&c, MechAnalysisZone::A);

        let plain = mech.eds(false);
        assert_relative_eq!(plain.tension, 0.15 * c.rated_strength);
        assert_eq!(plain.temperature, EDS_TEMPERATURE);
        assert_eq!(plain.weight, c.unit_weight());

        let damped = mech.eds(true);
        assert_relative_eq!(damped.tension, 0.22 * c.rated_strength);
        assert!(damped.tension > plain.tension);
    }

    #[test]
    fn test_chs() {
        let c = conductor();
        let mech = MechAnalysis::new(&c, MechAnalysisZone::A);
        for factor in [0.05, 0.2, 1.0] {
            let state = mech.chs(-5.0, factor);
            assert_relative_eq!(state.tension, factor * c.rated_strength);
            assert_eq!(state.temperature, -5.0);
        }
    }

    #[test]
    fn test_overload() {
        let c = conductor();
        let load = MechAnalysis::new(&c, MechAnalysisZone::A).overload();
        assert_eq!(load.wind_load, 0.0);
        assert_eq!(load.effective_load, c.unit_weight());
    }

    #[test]
    fn test_ice_and_wind_overload() {
        let c = conductor();
        let mech = MechAnalysis::new(&c, MechAnalysisZone::B);

        let iced = mech.ice_overload().unwrap();
        assert_relative_eq!(iced.effective_load, c.unit_weight() + 1.8);
        assert!(mech.overload_factor(&iced) > 1.0);

        assert_eq!(mech.wind_pressure(), WIND_PRESSURE_LARGE);
        let windy = mech.apparent_load(Loading::Wind { pressure: None }).unwrap();
        assert_relative_eq!(windy.wind_load, 50.0 * 100.0 * 1e-3);
        assert!(windy.swing_angle() > 0.0);

        assert!(MechAnalysis::new(&c, MechAnalysisZone::A)
            .apparent_load(Loading::Ice)
            .is_err());
    }

    #[test]
    fn test_overload_factor() {
        let c = conductor();
        let mech = MechAnalysis::new(&c, MechAnalysisZone::A);
        let load = CatenaryApparentLoad::new(3.0, 4.0);
        assert_relative_eq!(mech.overload_factor(&load), 5.0 / c.unit_weight());
        assert_relative_eq!(mech.overload_factor(&mech.overload()), 1.0);
    }

    #[test]
    fn test_override_flows_into_states() {
        let mut c = conductor();
        c.set_unit_weight(Some(1.0));
        let mech = MechAnalysis::new(&c, MechAnalysisZone::A);
        assert_eq!(mech.eds(false).weight, 1.0);
        assert_eq!(mech.overload().effective_load, 1.0);
    }

    #[test]
    fn test_hypothesis_state() {
        let c = conductor();
        let mech = MechAnalysis::new(&c, MechAnalysisZone::C);
        let h = MechAnalysisHypothesis::new(-15.0, 0.3).with_loading(Loading::Ice);
        let state = mech.hypothesis_state(&h).unwrap();
        assert_relative_eq!(state.tension, 300.0);
        assert_relative_eq!(state.weight, c.unit_weight() + 3.6);
        assert!(mech
            .hypothesis_state(&MechAnalysisHypothesis::new(0.0, 2.0))
            .is_err());
    }

    #[test]
    fn test_ruling_span() {
        let c = conductor();
        let mech = MechAnalysis::new(&c, MechAnalysisZone::A);
        assert_relative_eq!(
            mech.ruling_span(&[100.0, 200.0, 300.0]).unwrap(),
            ((100f64.powi(3) + 200f64.powi(3) + 300f64.powi(3)) / 600.0).sqrt()
        );
        for l in [35.0, 120.0, 480.5] {
            assert_relative_eq!(mech.ruling_span(&[l, l, l]).unwrap(), l, max_relative = 1e-12);
        }
        assert!(mech.ruling_span(&[]).is_err());
        assert!(mech.ruling_span(&[100.0, 0.0]).is_err());
    }
}
