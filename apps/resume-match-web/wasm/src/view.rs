//! DOM projection for the analyzer page
//!
//! `AnalyzerView` owns the window/document handles and is the only place
//! that touches page elements. The page has two mutually exclusive states,
//! Input and Results; the input card and the results section are never
//! visible together.
//!
//! Element ids are the contract with the page markup and must match it.

use crate::report::{title_case_skill, AnalysisReport, MatchTier, SkillKind};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement,
    ScrollBehavior, ScrollToOptions, Window,
};

pub const ID_FORM: &str = "analyzeForm";
pub const ID_RESUME_FILE: &str = "resumeFile";
pub const ID_JOB_DESCRIPTION: &str = "jobDescription";
pub const ID_SUBMIT_BTN: &str = "submitBtn";
pub const ID_LOADING_SPINNER: &str = "loadingSpinner";
pub const ID_ERROR_MESSAGE: &str = "errorMessage";
pub const ID_ERROR_TEXT: &str = "errorText";
pub const ID_FILE_ERROR: &str = "fileError";
pub const ID_RESULTS_SECTION: &str = "resultsSection";
pub const ID_MATCH_BAR: &str = "matchPercentageBar";
pub const ID_MATCH_TEXT: &str = "matchPercentageText";
pub const ID_MATCH_LEVEL: &str = "matchLevel";
pub const ID_MATCHED_COUNT: &str = "matchedCount";
pub const ID_MISSING_COUNT: &str = "missingCount";
pub const ID_RESUME_SKILLS_COUNT: &str = "resumeSkillsCount";
pub const ID_REQUIRED_SKILLS_COUNT: &str = "requiredSkillsCount";
pub const ID_MATCHED_LIST: &str = "matchedSkillsList";
pub const ID_MISSING_LIST: &str = "missingSkillsList";
pub const ID_LOAD_SAMPLE_BTN: &str = "loadSampleBtn";
pub const ID_NEW_ANALYSIS_BTN: &str = "newAnalysisBtn";

/// Selector for the input card wrapping the form
const INPUT_CARD_SELECTOR: &str = ".card";

/// How long a toast stays on screen before removing itself
const TOAST_DISMISS_MS: i32 = 3000;

/// View layer over the analyzer page DOM
pub struct AnalyzerView {
    window: Window,
    document: Document,
}

impl AnalyzerView {
    /// Capture the window and document handles
    ///
    /// # Errors
    /// Returns JsValue error if unable to access window or document
    pub fn new() -> Result<Self, JsValue> {
        let window =
            web_sys::window().ok_or_else(|| JsValue::from_str("No window object available"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("No document object available"))?;

        Ok(Self { window, document })
    }

    /// The page document (for document-level listeners)
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Look up a required element by id
    pub fn element(&self, id: &str) -> Result<Element, JsValue> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("Missing page element #{}", id)))
    }

    fn html_element(&self, id: &str) -> Result<HtmlElement, JsValue> {
        self.element(id)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| JsValue::from_str(&format!("Element #{} is not an HtmlElement", id)))
    }

    fn set_display(&self, id: &str, value: &str) -> Result<(), JsValue> {
        self.html_element(id)?.style().set_property("display", value)
    }

    /// The analyze form element
    pub fn form(&self) -> Result<HtmlFormElement, JsValue> {
        self.element(ID_FORM)?
            .dyn_into::<HtmlFormElement>()
            .map_err(|_| JsValue::from_str("analyzeForm is not a form"))
    }

    /// The resume file input
    pub fn file_input(&self) -> Result<HtmlInputElement, JsValue> {
        self.element(ID_RESUME_FILE)?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| JsValue::from_str("resumeFile is not an input"))
    }

    /// The sample-loading button
    pub fn sample_button(&self) -> Result<Element, JsValue> {
        self.element(ID_LOAD_SAMPLE_BTN)
    }

    /// The new-analysis (reset) button
    pub fn reset_button(&self) -> Result<Element, JsValue> {
        self.element(ID_NEW_ANALYSIS_BTN)
    }

    /// Currently selected resume file, if any
    pub fn resume_file(&self) -> Result<Option<web_sys::File>, JsValue> {
        Ok(self.file_input()?.files().and_then(|list| list.get(0)))
    }

    /// Current job description text (untrimmed, as the backend receives it)
    pub fn job_description(&self) -> Result<String, JsValue> {
        Ok(self.description_area()?.value())
    }

    /// Fill the job description field
    pub fn set_job_description(&self, text: &str) -> Result<(), JsValue> {
        self.description_area()?.set_value(text);
        Ok(())
    }

    fn description_area(&self) -> Result<HtmlTextAreaElement, JsValue> {
        self.element(ID_JOB_DESCRIPTION)?
            .dyn_into::<HtmlTextAreaElement>()
            .map_err(|_| JsValue::from_str("jobDescription is not a textarea"))
    }

    /// Enable or disable the submit control
    pub fn set_submit_enabled(&self, enabled: bool) -> Result<(), JsValue> {
        let button = self
            .element(ID_SUBMIT_BTN)?
            .dyn_into::<web_sys::HtmlButtonElement>()
            .map_err(|_| JsValue::from_str("submitBtn is not a button"))?;
        button.set_disabled(!enabled);
        Ok(())
    }

    /// Show or hide the loading spinner
    pub fn set_spinner_visible(&self, visible: bool) -> Result<(), JsValue> {
        self.set_display(ID_LOADING_SPINNER, if visible { "block" } else { "none" })
    }

    /// Write a message into the persistent error banner and reveal it
    pub fn show_error(&self, message: &str) -> Result<(), JsValue> {
        self.element(ID_ERROR_TEXT)?.set_text_content(Some(message));
        self.set_display(ID_ERROR_MESSAGE, "block")
    }

    /// Hide the error banner
    pub fn hide_error(&self) -> Result<(), JsValue> {
        self.set_display(ID_ERROR_MESSAGE, "none")
    }

    /// Show the inline file-field error
    pub fn show_field_error(&self, message: &str) -> Result<(), JsValue> {
        let field = self.html_element(ID_FILE_ERROR)?;
        field.set_text_content(Some(message));
        field.style().set_property("display", "block")
    }

    /// Clear the inline file-field error
    pub fn clear_field_error(&self) -> Result<(), JsValue> {
        self.set_display(ID_FILE_ERROR, "none")
    }

    /// Project an analysis report onto the results section and switch to it
    pub fn render_results(&self, report: &AnalysisReport) -> Result<(), JsValue> {
        self.set_input_card_visible(false)?;
        self.set_display(ID_RESULTS_SECTION, "block")?;
        self.scroll_to_top();

        let percentage = report.match_percentage;
        let tier = MatchTier::from_percentage(percentage);

        let bar = self.element(ID_MATCH_BAR)?;
        bar.set_class_name(&format!("progress-bar {}", tier.bar_class()));
        bar.set_attribute("aria-valuenow", &percentage.to_string())?;
        if let Some(html_bar) = bar.dyn_ref::<HtmlElement>() {
            html_bar
                .style()
                .set_property("width", &format!("{}%", percentage))?;
        }
        self.element(ID_MATCH_TEXT)?
            .set_text_content(Some(&format!("{}%", percentage)));

        let level = self.element(ID_MATCH_LEVEL)?;
        level.set_text_content(Some(&report.match_level));
        level.set_class_name(tier.text_class());

        self.set_counter(ID_MATCHED_COUNT, report.matched_count)?;
        self.set_counter(ID_MISSING_COUNT, report.missing_count)?;
        self.set_counter(ID_RESUME_SKILLS_COUNT, report.resume_skills_count)?;
        self.set_counter(ID_REQUIRED_SKILLS_COUNT, report.required_skills_count)?;

        self.render_skill_list(ID_MATCHED_LIST, &report.matched_skills, SkillKind::Matched)?;
        self.render_skill_list(ID_MISSING_LIST, &report.missing_skills, SkillKind::Missing)?;

        Ok(())
    }

    fn set_counter(&self, id: &str, value: u32) -> Result<(), JsValue> {
        self.element(id)?.set_text_content(Some(&value.to_string()));
        Ok(())
    }

    /// Render one skill list as badges, or the empty placeholder
    pub fn render_skill_list(
        &self,
        container_id: &str,
        skills: &[String],
        kind: SkillKind,
    ) -> Result<(), JsValue> {
        let container = self.element(container_id)?;
        container.set_inner_html("");

        if skills.is_empty() {
            let empty = self.document.create_element("div")?;
            empty.set_class_name("empty-message");
            empty.set_text_content(Some("No skills to display"));
            container.append_child(&empty)?;
            return Ok(());
        }

        for skill in skills {
            let badge = self.document.create_element("span")?;
            badge.set_class_name(&format!("skill-badge {}", kind.css_class()));

            let icon = self.document.create_element("i")?;
            icon.set_class_name(&format!("fas {}", kind.icon_class()));
            badge.append_child(&icon)?;

            let label = self.document.create_text_node(&title_case_skill(skill));
            badge.append_child(&label)?;

            container.append_child(&badge)?;
        }

        Ok(())
    }

    /// Clear every form field and switch back to the input state
    pub fn reset_to_input(&self) -> Result<(), JsValue> {
        self.form()?.reset();
        self.file_input()?.set_value("");
        self.set_job_description("")?;

        self.set_input_card_visible(true)?;
        self.set_display(ID_RESULTS_SECTION, "none")?;
        self.hide_error()?;
        self.scroll_to_top();

        Ok(())
    }

    fn set_input_card_visible(&self, visible: bool) -> Result<(), JsValue> {
        if let Some(card) = self.document.query_selector(INPUT_CARD_SELECTOR)? {
            if let Some(html_card) = card.dyn_ref::<HtmlElement>() {
                html_card
                    .style()
                    .set_property("display", if visible { "block" } else { "none" })?;
            }
        }
        Ok(())
    }

    /// Smooth-scroll the window back to the top
    pub fn scroll_to_top(&self) {
        let opts = ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&opts);
    }

    /// Append a self-dismissing confirmation toast to the page body
    pub fn show_toast(&self, message: &str) -> Result<(), JsValue> {
        let toast = self.document.create_element("div")?;
        toast.set_class_name("alert alert-success position-fixed bottom-0 end-0 m-3");
        if let Some(html_toast) = toast.dyn_ref::<HtmlElement>() {
            html_toast.style().set_property("z-index", "1050")?;
        }

        let icon = self.document.create_element("i")?;
        icon.set_class_name("fas fa-check-circle");
        toast.append_child(&icon)?;

        let text = self.document.create_text_node(&format!(" {}", message));
        toast.append_child(&text)?;

        let body = self
            .document
            .body()
            .ok_or_else(|| JsValue::from_str("No document body"))?;
        body.append_child(&toast)?;

        // One-shot removal timer scoped to this toast
        let node = toast.clone();
        let dismiss = Closure::once(Box::new(move || {
            node.remove();
        }) as Box<dyn FnOnce()>);

        self.window.set_timeout_with_callback_and_timeout_and_arguments_0(
            dismiss.as_ref().unchecked_ref(),
            TOAST_DISMISS_MS,
        )?;
        dismiss.forget();

        Ok(())
    }
}
