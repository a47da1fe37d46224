//! Controlling-hypothesis selection and span tables.
//!
//! Every hypothesis fixes a tension limit at its own condition. Starting from
//! that limit, the state is carried to a common reference condition (the
//! every-day temperature, bare conductor) for the span under study. The
//! hypothesis that arrives with the lowest reference tension, which is the
//! largest sag, is the controlling one: stringing the conductor to it keeps
//! every other hypothesis within its own limit.

use tracing::debug;

use super::{MechAnalysis, MechAnalysisHypothesis, EDS_TEMPERATURE};
use crate::catenary::CatenaryState;
use crate::error::{Result, SagTensionError};

/// One hypothesis carried to the reference condition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HypothesisResult {
    /// The originating hypothesis
    pub hypothesis: MechAnalysisHypothesis,
    /// State at the reference condition
    pub state: CatenaryState,
    /// Mid-span sag at the reference condition, m
    pub sag: f64,
}

/// All hypotheses evaluated for one span.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanResults {
    /// Span length, m
    pub span: f64,
    /// One result per hypothesis, in input order
    pub results: Vec<HypothesisResult>,
    /// Index into `results` of the controlling hypothesis
    pub controlling: usize,
}

impl SpanResults {
    /// The controlling hypothesis' result, `None` when `controlling` is out
    /// of range.
    pub fn controlling_result(&self) -> Option<&HypothesisResult> {
        self.results.get(self.controlling)
    }
}

/// Evaluates a set of design hypotheses for a conductor.
#[derive(Debug, Clone)]
pub struct SagTensionAnalyzer<'a> {
    mech: MechAnalysis<'a>,
    hypotheses: Vec<MechAnalysisHypothesis>,
    reference_temperature: f64,
}

impl<'a> SagTensionAnalyzer<'a> {
    /// Create an analyzer.
    ///
    /// # Errors
    ///
    /// [`SagTensionError::InvalidHypothesis`] for an empty list or an invalid
    /// hypothesis.
    pub fn new(mech: MechAnalysis<'a>, hypotheses: Vec<MechAnalysisHypothesis>) -> Result<Self> {
        if hypotheses.is_empty() {
            return Err(SagTensionError::invalid_hypothesis(
                "at least one hypothesis is required",
            ));
        }
        for h in &hypotheses {
            h.validate()?;
        }

        Ok(Self {
            mech,
            hypotheses,
            reference_temperature: EDS_TEMPERATURE,
        })
    }

    /// Compare hypotheses at a different reference temperature.
    pub fn with_reference_temperature(mut self, temperature: f64) -> Self {
        self.reference_temperature = temperature;
        self
    }

    /// The underlying loading analysis.
    pub fn mech(&self) -> &MechAnalysis<'a> {
        &self.mech
    }

    /// Hypotheses in input order.
    pub fn hypotheses(&self) -> &[MechAnalysisHypothesis] {
        &self.hypotheses
    }

    /// Reference temperature used for comparison.
    pub fn reference_temperature(&self) -> f64 {
        self.reference_temperature
    }

    /// Evaluate every hypothesis at `span`.
    pub fn span_results(&self, span: f64) -> Result<SpanResults> {
        let model = self.mech.model();
        let reference_weight = self.mech.conductor().unit_weight();

        let results = self
            .hypotheses
            .iter()
            .map(|h| {
                let start = self.mech.hypothesis_state(h)?;
                let state = model.change_of_state(
                    &start,
                    self.reference_temperature,
                    reference_weight,
                    span,
                )?;
                Ok(HypothesisResult {
                    hypothesis: *h,
                    state,
                    sag: state.sag(span),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        // Strict comparison keeps the first of equal tensions
        let mut controlling = 0;
        for (i, r) in results.iter().enumerate().skip(1) {
            if r.state.tension < results[controlling].state.tension {
                controlling = i;
            }
        }

        debug!(
            span,
            controlling,
            tension = results[controlling].state.tension,
            "controlling hypothesis"
        );

        Ok(SpanResults {
            span,
            results,
            controlling,
        })
    }

    /// The hypothesis that governs the design at `span`.
    pub fn find_controlling_state(&self, span: f64) -> Result<MechAnalysisHypothesis> {
        let results = self.span_results(span)?;
        results
            .controlling_result()
            .map(|r| r.hypothesis)
            .ok_or_else(|| SagTensionError::invalid_hypothesis("no hypothesis evaluated"))
    }

    /// Evaluate every hypothesis at every span, preserving input order.
    pub fn tbl(&self, spans: &[f64]) -> Result<Vec<SpanResults>> {
        spans.iter().map(|&span| self.span_results(span)).collect()
    }
}
