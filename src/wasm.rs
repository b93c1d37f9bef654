//! WASM bindings for Routh Core.
//!
//! This module provides JavaScript-friendly bindings for running the
//! stability analysis in the browser. Root lookup stays on the JavaScript
//! side: call the root service with `report.coefficients` when
//! `report.stable` is false.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmRouthAnalyzer } from 'routh_core';
//!
//! await init();
//!
//! const analyzer = new WasmRouthAnalyzer();
//! const report = JSON.parse(analyzer.analyze("1, -3, 2, -5"));
//!
//! if (!report.stable) {
//!   const res = await fetch(`${rootService}/calculate_rhs_roots`, {
//!     method: 'POST',
//!     headers: { 'Content-Type': 'application/json' },
//!     body: JSON.stringify({ coefficients: report.coefficients }),
//!   });
//!   const roots = (await res.json()).rhs_roots.map(clean_root);
//! }
//! ```

use wasm_bindgen::prelude::*;

use crate::report::AnalysisReport;
use crate::roots::RhsRoot;
use crate::routh::{AnalysisConfig, Analyzer};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// WASM-compatible stability analyzer.
#[wasm_bindgen]
pub struct WasmRouthAnalyzer {
    analyzer: Analyzer,
}

#[wasm_bindgen]
impl WasmRouthAnalyzer {
    /// Create an analyzer with the default epsilon and 4-decimal output.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmRouthAnalyzer {
        WasmRouthAnalyzer {
            analyzer: Analyzer::new(),
        }
    }

    /// Create an analyzer with a custom epsilon and display precision.
    ///
    /// # Arguments
    /// * `epsilon` - Stand-in for zero pivots (default: 1e-6)
    /// * `precision` - Decimal places for `formatted_rows` (default: 4)
    #[wasm_bindgen]
    pub fn with_config(epsilon: f64, precision: usize) -> Result<WasmRouthAnalyzer, JsValue> {
        let config = AnalysisConfig::new()
            .with_epsilon(epsilon)
            .with_precision(precision);
        let analyzer = Analyzer::with_config(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WasmRouthAnalyzer { analyzer })
    }

    /// Analyze comma-separated coefficients and return a JSON report.
    ///
    /// Throws "Please enter valid coefficients" when the input has no numbers.
    #[wasm_bindgen]
    pub fn analyze(&self, coefficients: &str) -> Result<String, JsValue> {
        let analysis = self
            .analyzer
            .analyze_text(coefficients)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        AnalysisReport::new(&analysis, self.analyzer.config().precision)
            .to_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Number of right-half-plane poles, or an error for invalid input.
    #[wasm_bindgen]
    pub fn rhs_pole_count(&self, coefficients: &str) -> Result<usize, JsValue> {
        self.analyzer
            .analyze_text(coefficients)
            .map(|a| a.verdict.rhs_pole_count())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Default for WasmRouthAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Strip the parentheses the root service puts around complex numbers.
#[wasm_bindgen]
pub fn clean_root(raw: &str) -> String {
    RhsRoot::new(raw).display()
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
