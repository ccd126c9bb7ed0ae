//! WASM page controller for the resume/job-description match analyzer
//!
//! This crate drives a single HTML page: it collects a resume PDF and a job
//! description, submits them to the backend analysis service, and projects
//! the returned match statistics onto the DOM. All parsing and scoring
//! happens server-side behind `/analyze` and `/api/sample-data`.
//!
//! ## Architecture
//!
//! - Event wiring, validation, and view state live in Rust
//! - JavaScript only loads the module and calls `mount()`
//! - Pure logic (tiers, casing, input checks) is separated from DOM code so
//!   it tests natively
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { AnalyzerApp } from './pkg/resume_match_wasm.js';
//!
//! await init();
//! AnalyzerApp.mount();
//! ```

pub mod api;
pub mod controller;
pub mod report;
pub mod validation;
pub mod view;

use wasm_bindgen::prelude::*;

// Re-export main types for JavaScript
pub use controller::AnalyzerApp;
pub use report::{title_case_skill, AnalysisReport, MatchTier, SampleData, SkillKind};
pub use validation::{
    check_job_description, check_resume_file, UploadError, MAX_RESUME_BYTES, PDF_MIME,
};
pub use view::AnalyzerView;

/// Initialize the WASM module
/// Called automatically by wasm-bindgen
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Get the library version
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Quick pre-submit check a host page can run on a picked file
/// Returns Ok(()) if acceptable, Err with the user-facing message if not
#[wasm_bindgen]
pub fn quick_check_resume(mime: &str, size: usize) -> Result<(), JsValue> {
    validation::check_resume_file(mime, size).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_version() {
        let version = get_version();
        assert!(!version.is_empty());
    }
}
