//! Change-of-state equation for a level span.
//!
//! Between two conditions the conductor length changes by elastic stretch and
//! thermal expansion, while the span stays fixed. With the parabolic length
//! `L + w²L³ / (24T²)` this balance gives, for the unknown tension `T1`:
//!
//! ```text
//! T1²·(T1 + A) = B
//!
//! A = E·S·α·(θ1 - θ0) + E·S·L²·w0² / (24·T0²) - T0
//! B = E·S·L²·w1² / 24
//! ```
//!
//! For `B > 0` the cubic has exactly one positive root. Newton-Raphson from
//! the reference tension finds it unless the start sits left of the cubic's
//! turning point at `-2A/3`; in that case the iteration starts from `-A`,
//! where the positive branch is increasing and convex.

use tracing::debug;

use super::CatenaryState;
use crate::conductor::Conductor;
use crate::error::{Result, SagTensionError};
use crate::solver::NewtonRaphson;

/// Change-of-state solver for one conductor.
#[derive(Debug, Clone, Copy)]
pub struct CatenaryModel<'a> {
    conductor: &'a Conductor,
    solver: NewtonRaphson,
}

impl<'a> CatenaryModel<'a> {
    /// Create a model with the default root-finder settings.
    pub fn new(conductor: &'a Conductor) -> Self {
        Self {
            conductor,
            solver: NewtonRaphson::new(),
        }
    }

    /// Use a specific root-finder configuration.
    pub fn with_solver(mut self, solver: NewtonRaphson) -> Self {
        self.solver = solver;
        self
    }

    /// The conductor this model describes.
    pub fn conductor(&self) -> &'a Conductor {
        self.conductor
    }

    /// The root-finder configuration in use.
    pub fn solver(&self) -> NewtonRaphson {
        self.solver
    }

    /// Propagate `state0` to a new temperature and unit weight over `span`.
    ///
    /// # Errors
    ///
    /// - [`SagTensionError::InvalidParameter`] for a non-positive span,
    ///   tension, weight or axial stiffness.
    /// - Root-finder failures, unchanged.
    pub fn change_of_state(
        &self,
        state0: &CatenaryState,
        temperature1: f64,
        weight1: f64,
        span: f64,
    ) -> Result<CatenaryState> {
        positive("span", span)?;
        positive("tension", state0.tension)?;
        positive("weight", state0.weight)?;
        positive("weight1", weight1)?;
        if !temperature1.is_finite() || !state0.temperature.is_finite() {
            return Err(SagTensionError::invalid_parameter(
                "temperature",
                "must be finite",
            ));
        }

        let es = self.conductor.axial_stiffness();
        positive("axial stiffness", es)?;
        let alpha = self.conductor.thermal_exp_factor;

        let t0 = state0.tension;
        let span_sq = span * span;
        let a = es * alpha * (temperature1 - state0.temperature)
            + es * span_sq * state0.weight * state0.weight / (24.0 * t0 * t0)
            - t0;
        let b = es * span_sq * weight1 * weight1 / 24.0;

        let f = |t: f64| t * t * (t + a) - b;
        let df = |t: f64| t * (3.0 * t + 2.0 * a);

        let x0 = t0.max(-a);
        let t1 = self.solver.solve(f, df, x0)?;

        debug!(
            span,
            from_temperature = state0.temperature,
            to_temperature = temperature1,
            from_tension = t0,
            to_tension = t1,
            "change of state"
        );

        Ok(CatenaryState::new(temperature1, t1, weight1))
    }
}

fn positive(param: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SagTensionError::invalid_parameter(
            param,
            format!("must be finite and positive, got {}", value),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_conductor() -> Conductor {
        Conductor::new("test")
            .with_areas(0.0, 0.0, 100.0)
            .with_mass(1000.0)
            .with_elastic_modulus(1.0)
    }

    fn la_380() -> Conductor {
        Conductor::new("337-AL1/44-ST1A:LA 380")
            .with_legacy_code("LA 380")
            .with_areas(337.3, 43.7, 381.0)
            .with_strands(54, 7)
            .with_diameters(8.46, 25.38)
            .with_mass(932.0)
            .with_rated_strength(10_718.0)
            .with_elastic_modulus(6900.0)
            .with_thermal_exp_factor(1.93e-5)
    }

    /// Residual of the change-of-state length balance, relative to `L`.
    fn length_balance(c: &Conductor, s0: &CatenaryState, s1: &CatenaryState, span: f64) -> f64 {
        let sag_term = |s: &CatenaryState| s.weight * s.weight * span.powi(3) / (24.0 * s.tension * s.tension);
        let geometric = sag_term(s1) - sag_term(s0);
        let material = span * c.thermal_exp_factor * (s1.temperature - s0.temperature)
            + span * (s1.tension - s0.tension) / c.axial_stiffness();
        (geometric - material) / span
    }

    #[test]
    fn test_unchanged_condition_returns_same_tension() {
        let conductor = unit_conductor();
        let model = CatenaryModel::new(&conductor);
        let state0 = CatenaryState::new(0.0, 100.0, 1.0);
        let state1 = model.change_of_state(&state0, 0.0, 1.0, 100.0).unwrap();
        assert_eq!(state1.temperature, 0.0);
        assert_eq!(state1.weight, 1.0);
        assert_relative_eq!(state1.tension, state0.tension, max_relative = 1e-9);
    }

    #[test]
    fn test_unchanged_condition_real_conductor() {
        let conductor = la_380();
        let model = CatenaryModel::new(&conductor);
        let w = conductor.unit_weight();
        for span in [50.0, 150.0, 400.0] {
            let state0 = CatenaryState::new(15.0, 1607.7, w);
            let state1 = model.change_of_state(&state0, 15.0, w, span).unwrap();
            assert_relative_eq!(state1.tension, 1607.7, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_warming_lowers_tension() {
        let conductor = la_380();
        let model = CatenaryModel::new(&conductor);
        let w = conductor.unit_weight();
        let state0 = CatenaryState::new(15.0, 1607.7, w);
        let hot = model.change_of_state(&state0, 50.0, w, 300.0).unwrap();
        assert!(hot.tension < state0.tension);
        assert!(hot.sag(300.0) > state0.sag(300.0));
        assert!(length_balance(&conductor, &state0, &hot, 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_cooling_and_ice_raise_tension() {
        let conductor = la_380();
        let model = CatenaryModel::new(&conductor);
        let w = conductor.unit_weight();
        let state0 = CatenaryState::new(15.0, 1607.7, w);

        let cold = model.change_of_state(&state0, -5.0, w, 300.0).unwrap();
        assert!(cold.tension > state0.tension);

        let iced = model.change_of_state(&state0, 15.0, w + 0.9, 300.0).unwrap();
        assert!(iced.tension > state0.tension);
        assert!(length_balance(&conductor, &state0, &iced, 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_round_trip_returns_to_start() {
        let conductor = la_380();
        let model = CatenaryModel::new(&conductor);
        let w = conductor.unit_weight();
        let state0 = CatenaryState::new(15.0, 1607.7, w);
        let cold = model.change_of_state(&state0, -20.0, w, 250.0).unwrap();
        let back = model.change_of_state(&cold, 15.0, w, 250.0).unwrap();
        assert_relative_eq!(back.tension, state0.tension, max_relative = 1e-8);
    }

    #[test]
    fn test_short_span_strong_cooling() {
        // Starting tension lies left of the cubic's turning point here
        let conductor = la_380();
        let model = CatenaryModel::new(&conductor);
        let w = conductor.unit_weight();
        let state0 = CatenaryState::new(15.0, 1607.7, w);
        let cold = model.change_of_state(&state0, -25.0, w, 50.0).unwrap();
        assert!(cold.tension > 3000.0);
        assert!(length_balance(&conductor, &state0, &cold, 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_span() {
        let conductor = unit_conductor();
        let model = CatenaryModel::new(&conductor);
        let state0 = CatenaryState::new(0.0, 100.0, 1.0);
        for span in [0.0, -10.0, f64::NAN] {
            let err = model.change_of_state(&state0, 0.0, 1.0, span).unwrap_err();
            assert!(matches!(err, SagTensionError::InvalidParameter { .. }));
        }
    }

    #[test]
    fn test_zero_stiffness_rejected() {
        let conductor = Conductor::new("empty").with_mass(1000.0);
        let model = CatenaryModel::new(&conductor);
        let state0 = CatenaryState::new(0.0, 100.0, 1.0);
        assert!(model.change_of_state(&state0, 10.0, 1.0, 100.0).is_err());
    }

    #[test]
    fn test_convergence_failure_propagates() {
        let conductor = la_380();
        let model = CatenaryModel::new(&conductor)
            .with_solver(NewtonRaphson::new().with_max_iterations(1));
        assert_eq!(model.solver().max_iterations, 1);
        assert_eq!(model.conductor().designation, conductor.designation);
        let w = conductor.unit_weight();
        let state0 = CatenaryState::new(15.0, 1607.7, w);
        let err = model.change_of_state(&state0, 60.0, w, 300.0).unwrap_err();
        assert!(matches!(err, SagTensionError::ConvergenceFailure { .. }));
    }
}
