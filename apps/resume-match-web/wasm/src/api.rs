//! HTTP calls to the analysis backend
//!
//! Two endpoints, both fire-and-forget from the page's perspective: no
//! timeout, no retry, no cancellation.

use crate::report::{AnalysisReport, SampleData};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, Response};

/// Analysis endpoint (multipart POST)
pub const ANALYZE_URL: &str = "/analyze";

/// Sample job description endpoint (GET)
pub const SAMPLE_DATA_URL: &str = "/api/sample-data";

/// Submit a resume and job description for analysis
///
/// The body is decoded into an [`AnalysisReport`] regardless of HTTP status:
/// the backend reports validation failures as `{"success": false, ...}`
/// bodies on 4xx responses. Only a rejected fetch or an unparseable body is
/// an error here.
pub async fn post_analysis(resume: &File, job_description: &str) -> Result<AnalysisReport, JsValue> {
    let window = web_sys::window().ok_or("No window")?;

    let form = FormData::new()?;
    form.append_with_blob("resume", resume)?;
    form.append_with_str("job_description", job_description)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    // Content-Type stays unset so the browser supplies the multipart boundary
    opts.set_body(form.as_ref());

    let request = Request::new_with_str_and_init(ANALYZE_URL, &opts)?;

    let response = JsFuture::from(window.fetch_with_request(&request)).await?;
    let response: Response = response.dyn_into()?;

    let json = JsFuture::from(response.json()?).await?;

    serde_wasm_bindgen::from_value(json)
        .map_err(|e| JsValue::from_str(&format!("Malformed analysis response: {}", e)))
}

/// Fetch the sample job description
pub async fn fetch_sample_data() -> Result<SampleData, JsValue> {
    let window = web_sys::window().ok_or("No window")?;

    let opts = RequestInit::new();
    opts.set_method("GET");

    let request = Request::new_with_str_and_init(SAMPLE_DATA_URL, &opts)?;

    let response = JsFuture::from(window.fetch_with_request(&request)).await?;
    let response: Response = response.dyn_into()?;

    if !response.ok() {
        return Err(JsValue::from_str(&format!(
            "Sample data request failed: {}",
            response.status()
        )));
    }

    let json = JsFuture::from(response.json()?).await?;

    serde_wasm_bindgen::from_value(json)
        .map_err(|e| JsValue::from_str(&format!("Malformed sample data response: {}", e)))
}
