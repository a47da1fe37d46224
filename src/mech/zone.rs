//! Climatic zones and design hypotheses.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SagTensionError};

/// Climatic zone, by increasing icing severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum MechAnalysisZone {
    /// No ice hypothesis applies
    A,
    /// Moderate icing
    B,
    /// Severe icing
    C,
}

impl fmt::Display for MechAnalysisZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        };
        f.write_str(name)
    }
}

impl FromStr for MechAnalysisZone {
    type Err = SagTensionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            other => Err(SagTensionError::invalid_parameter(
                "zone",
                format!("unknown zone '{}', expected A, B or C", other),
            )),
        }
    }
}

/// Load carried by the conductor in a hypothesis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Loading {
    /// Own weight only
    #[default]
    Bare,
    /// Own weight plus the zone's ice sleeve
    Ice,
    /// Own weight plus transverse wind; `None` uses the regulatory pressure
    Wind { pressure: Option<f64> },
}

impl fmt::Display for Loading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bare => f.write_str("bare"),
            Self::Ice => f.write_str("ice"),
            Self::Wind { pressure: None } => f.write_str("wind"),
            Self::Wind {
                pressure: Some(p),
            } => write!(f, "wind={}", p),
        }
    }
}

/// A design condition: reference temperature and the fraction of the rated
/// tensile strength assumed as tension at that temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MechAnalysisHypothesis {
    /// Temperature in °C
    pub temperature: f64,
    /// Fraction of RTS, in (0, 1]
    pub rts_factor: f64,
    /// Load carried at this condition
    pub loading: Loading,
}

impl MechAnalysisHypothesis {
    /// Create a bare-conductor hypothesis.
    pub const fn new(temperature: f64, rts_factor: f64) -> Self {
        Self {
            temperature,
            rts_factor,
            loading: Loading::Bare,
        }
    }

    /// Set the load carried at this condition.
    pub fn with_loading(mut self, loading: Loading) -> Self {
        self.loading = loading;
        self
    }

    /// Check that the hypothesis describes a usable condition.
    pub fn validate(&self) -> Result<()> {
        if !self.temperature.is_finite() {
            return Err(SagTensionError::invalid_hypothesis(format!(
                "temperature must be finite, got {}",
                self.temperature
            )));
        }
        if !(self.rts_factor > 0.0 && self.rts_factor <= 1.0) {
            return Err(SagTensionError::invalid_hypothesis(format!(
                "RTS factor must be in (0, 1], got {}",
                self.rts_factor
            )));
        }
        if let Loading::Wind {
            pressure: Some(p),
        } = self.loading
        {
            if !(p.is_finite() && p >= 0.0) {
                return Err(SagTensionError::invalid_hypothesis(format!(
                    "wind pressure must be non-negative, got {}",
                    p
                )));
            }
        }
        Ok(())
    }
}

impl fmt::Display for MechAnalysisHypothesis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.temperature, self.rts_factor)?;
        if self.loading != Loading::Bare {
            write!(f, ":{}", self.loading)?;
        }
        Ok(())
    }
}

/// Parses `TEMP:FACTOR[:ice|:wind|:wind=PRESSURE]`, e.g. `-5:0.25` or `-15:0.33:ice`.
impl FromStr for MechAnalysisHypothesis {
    type Err = SagTensionError;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.trim().split(':');
        let number = |part: Option<&str>, what: &str| -> Result<f64> {
            part.and_then(|p| p.trim().parse::<f64>().ok())
                .ok_or_else(|| {
                    SagTensionError::invalid_hypothesis(format!("{} missing or invalid in '{}'", what, s))
                })
        };

        let temperature = number(parts.next(), "temperature")?;
        let rts_factor = number(parts.next(), "RTS factor")?;

        let loading = match parts.next().map(|p| p.trim().to_ascii_lowercase()) {
            None => Loading::Bare,
            Some(tag) => match tag.split_once('=') {
                None if tag == "bare" => Loading::Bare,
                None if tag == "ice" => Loading::Ice,
                None if tag == "wind" => Loading::Wind { pressure: None },
                Some(("wind", p)) => Loading::Wind {
                    pressure: Some(number(Some(p), "wind pressure")?),
                },
                _ => {
                    return Err(SagTensionError::invalid_hypothesis(format!(
                        "unknown loading '{}' in '{}'",
                        tag, s
                    )));
                }
            },
        };

        if parts.next().is_some() {
            return Err(SagTensionError::invalid_hypothesis(format!(
                "too many fields in '{}'",
                s
            )));
        }

        let hypothesis = Self::new(temperature, rts_factor).with_loading(loading);
        hypothesis.validate()?;
        Ok(hypothesis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_from_str() {
        assert_eq!("b".parse::<MechAnalysisZone>().unwrap(), MechAnalysisZone::B);
        assert_eq!(MechAnalysisZone::C.to_string(), "C");
        assert!("D".parse::<MechAnalysisZone>().is_err());
    }

    #[test]
    fn test_hypothesis_from_str() {
        let h: MechAnalysisHypothesis = "-5:0.25".parse().unwrap();
        assert_eq!(h, MechAnalysisHypothesis::new(-5.0, 0.25));

        let h: MechAnalysisHypothesis = "-15:0.33:ice".parse().unwrap();
        assert_eq!(h.loading, Loading::Ice);

        let h: MechAnalysisHypothesis = "-10:0.3:wind=50".parse().unwrap();
        assert_eq!(h.loading, Loading::Wind { pressure: Some(50.0) });
        assert_eq!(h.to_string(), "-10:0.3:wind=50");
    }

    #[test]
    fn test_hypothesis_from_str_errors() {
        for bad in ["", "15", "x:0.1", "15:0", "15:1.5", "15:0.2:snow", "15:0.2:ice:1"] {
            assert!(bad.parse::<MechAnalysisHypothesis>().is_err(), "{}", bad);
        }
    }

    #[test]
    fn test_validate() {
        assert!(MechAnalysisHypothesis::new(15.0, 1.0).validate().is_ok());
        assert!(MechAnalysisHypothesis::new(15.0, 0.0).validate().is_err());
        assert!(MechAnalysisHypothesis::new(f64::NAN, 0.2).validate().is_err());
        assert!(MechAnalysisHypothesis::new(15.0, 0.2)
            .with_loading(Loading::Wind { pressure: Some(-1.0) })
            .validate()
            .is_err());
    }
}
