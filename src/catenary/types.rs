//! Mechanical state and load value types.

/// A conductor's mechanical condition.
///
/// Temperature in °C, horizontal tension in daN, unit weight in daN/m.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatenaryState {
    /// Conductor temperature
    pub temperature: f64,
    /// Horizontal tension
    pub tension: f64,
    /// Unit weight (or apparent load) per metre
    pub weight: f64,
}

impl CatenaryState {
    /// Create a new state.
    pub const fn new(temperature: f64, tension: f64, weight: f64) -> Self {
        Self {
            temperature,
            tension,
            weight,
        }
    }

    /// Catenary parameter `T / w`, in metres.
    pub fn catenary_parameter(&self) -> f64 {
        self.tension / self.weight
    }

    /// Mid-span sag for a level span, parabolic approximation.
    pub fn sag(&self, span: f64) -> f64 {
        self.weight * span * span / (8.0 * self.tension)
    }
}

/// Apparent load on a conductor: horizontal wind plus vertical weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatenaryApparentLoad {
    /// Horizontal wind load per metre
    pub wind_load: f64,
    /// Vertical load per metre (own weight plus ice)
    pub effective_load: f64,
}

impl CatenaryApparentLoad {
    /// Create a new apparent load.
    pub const fn new(wind_load: f64, effective_load: f64) -> Self {
        Self {
            wind_load,
            effective_load,
        }
    }

    /// Magnitude of the resultant load.
    pub fn resultant(&self) -> f64 {
        self.wind_load.hypot(self.effective_load)
    }

    /// Angle of the resultant from the vertical, in radians.
    pub fn swing_angle(&self) -> f64 {
        self.wind_load.atan2(self.effective_load)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn test_resultant() {
        let load = CatenaryApparentLoad::new(3.0, 4.0);
        assert_relative_eq!(load.resultant(), 5.0);

        for (wind, effective) in [(0.1, 2.5), (1.7, 0.3), (12.0, 12.0)] {
            let load = CatenaryApparentLoad::new(wind, effective);
            assert_relative_eq!(
                load.resultant(),
                (wind * wind + effective * effective).sqrt(),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn test_swing_angle() {
        assert_relative_eq!(CatenaryApparentLoad::new(1.0, 1.0).swing_angle(), FRAC_PI_4);
        assert_relative_eq!(CatenaryApparentLoad::new(7.5, 7.5).swing_angle(), FRAC_PI_4);
        assert_eq!(CatenaryApparentLoad::new(0.0, 1.2).swing_angle(), 0.0);
    }

    #[test]
    fn test_sag_and_parameter() {
        let state = CatenaryState::new(15.0, 1000.0, 1.0);
        assert_relative_eq!(state.catenary_parameter(), 1000.0);
        // w L^2 / 8T = 1 * 200^2 / 8000
        assert_relative_eq!(state.sag(200.0), 5.0);
    }
}
