//! WASM bindings for Sagtension Core.
//!
//! This module provides JavaScript-friendly bindings for running the
//! sag-tension analysis in a browser.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmSagTension } from 'sagtension_core';
//!
//! await init();
//!
//! const catalog = `
//!   .conductor "337-AL1/44-ST1A" legacy="LA 380" (
//!       al_area=337.3 steel_area=43.7 total_area=381.0
//!       al_strands=54 steel_strands=7
//!       core_diameter=8.46 overall_diameter=25.38
//!       mass=932 rated_strength=107.18 resistance_dc=0.0857
//!       elastic_modulus=6.9k thermal_exp=19.3u
//!   )
//! `;
//!
//! const analysis = new WasmSagTension(catalog, "337-AL1/44-ST1A", "B");
//! analysis.add_hypothesis(15, 0.15);
//! analysis.add_hypothesis(-5, 0.25);
//! const [temperature, rtsFactor] = analysis.controlling_state(250);
//! ```

use wasm_bindgen::prelude::*;

use crate::conductor::{Conductor, ConductorCatalog, ConductorLookup, ConductorQuery};
use crate::error::{Result, SagTensionError};
use crate::mech::{MechAnalysis, MechAnalysisHypothesis, MechAnalysisZone, SagTensionAnalyzer};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js(e: SagTensionError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// WASM-compatible sag-tension analysis for one conductor.
///
/// Owns the conductor and its hypotheses; each call builds a fresh
/// analyzer over them.
#[wasm_bindgen]
pub struct WasmSagTension {
    conductor: Conductor,
    zone: MechAnalysisZone,
    hypotheses: Vec<MechAnalysisHypothesis>,
}

#[wasm_bindgen]
impl WasmSagTension {
    /// Look up a conductor by designation or legacy code in catalog text.
    ///
    /// # Arguments
    /// * `catalog` - Conductor catalog text
    /// * `identifier` - Designation or legacy code
    /// * `zone` - Climatic zone, "A", "B" or "C"
    #[wasm_bindgen(constructor)]
    pub fn new(catalog: &str, identifier: &str, zone: &str) -> std::result::Result<WasmSagTension, JsValue> {
        let catalog = ConductorCatalog::parse(catalog).map_err(to_js)?;
        let query = ConductorQuery {
            designation: Some(identifier.to_string()),
            legacy_code: Some(identifier.to_string()),
        };
        let conductor = catalog.get(&query).map_err(to_js)?;
        let zone: MechAnalysisZone = zone.parse().map_err(to_js)?;

        Ok(WasmSagTension {
            conductor,
            zone,
            hypotheses: Vec::new(),
        })
    }

    /// Add a bare-conductor design hypothesis.
    #[wasm_bindgen]
    pub fn add_hypothesis(&mut self, temperature: f64, rts_factor: f64) -> std::result::Result<(), JsValue> {
        let hypothesis = MechAnalysisHypothesis::new(temperature, rts_factor);
        hypothesis.validate().map_err(to_js)?;
        self.hypotheses.push(hypothesis);
        Ok(())
    }

    /// Add a hypothesis in `TEMP:FACTOR[:ice|:wind]` form.
    #[wasm_bindgen]
    pub fn add_hypothesis_str(&mut self, hypothesis: &str) -> std::result::Result<(), JsValue> {
        let hypothesis: MechAnalysisHypothesis = hypothesis.parse().map_err(to_js)?;
        self.hypotheses.push(hypothesis);
        Ok(())
    }

    /// The controlling hypothesis at `span`, as `[temperature, rts_factor]`.
    #[wasm_bindgen]
    pub fn controlling_state(&self, span: f64) -> std::result::Result<Vec<f64>, JsValue> {
        let h = self
            .with_analyzer(|a| a.find_controlling_state(span))
            .map_err(to_js)?;
        Ok(vec![h.temperature, h.rts_factor])
    }

    /// Reference tensions, span-major: `spans.len() × hypotheses` values.
    #[wasm_bindgen]
    pub fn tension_table(&self, spans: &[f64]) -> std::result::Result<Vec<f64>, JsValue> {
        let table = self.with_analyzer(|a| a.tbl(spans)).map_err(to_js)?;
        Ok(table
            .iter()
            .flat_map(|row| row.results.iter().map(|r| r.state.tension))
            .collect())
    }

    /// Ruling span of a line section.
    #[wasm_bindgen]
    pub fn ruling_span(&self, spans: &[f64]) -> std::result::Result<f64, JsValue> {
        MechAnalysis::new(&self.conductor, self.zone)
            .ruling_span(spans)
            .map_err(to_js)
    }

    /// Conductor unit weight, daN/m.
    #[wasm_bindgen(getter)]
    pub fn unit_weight(&self) -> f64 {
        self.conductor.unit_weight()
    }
}

impl WasmSagTension {
    fn with_analyzer<T>(&self, f: impl FnOnce(&SagTensionAnalyzer<'_>) -> Result<T>) -> Result<T> {
        let mech = MechAnalysis::new(&self.conductor, self.zone);
        let analyzer = SagTensionAnalyzer::new(mech, self.hypotheses.clone())?;
        f(&analyzer)
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
