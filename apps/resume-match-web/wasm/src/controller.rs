//! Page controller: event wiring and the submit pipeline
//!
//! All listeners are attached once at mount and live for the page lifetime,
//! so their closures are intentionally leaked with `forget()`. The analyze
//! request is guarded by an in-flight flag in addition to the disabled
//! submit button, which closes the double-click race the attribute alone
//! leaves open.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{DragEvent, Event, KeyboardEvent};

use crate::api;
use crate::validation::{check_job_description, check_resume_file, UploadError};
use crate::view::AnalyzerView;

/// Banner fallback when the server reports failure without a message
const GENERIC_ANALYSIS_ERROR: &str = "An error occurred during analysis";

/// Banner message when the sample fetch fails
const SAMPLE_LOAD_ERROR: &str = "Failed to load sample data";

/// The analyzer page application
///
/// Holds the view handle and the in-flight guard shared with the event
/// closures.
#[wasm_bindgen]
pub struct AnalyzerApp {
    view: Rc<AnalyzerView>,
    in_flight: Rc<Cell<bool>>,
}

#[wasm_bindgen]
impl AnalyzerApp {
    /// Wire up every page listener. Call once after the module loads.
    pub fn mount() -> Result<AnalyzerApp, JsValue> {
        let app = AnalyzerApp {
            view: Rc::new(AnalyzerView::new()?),
            in_flight: Rc::new(Cell::new(false)),
        };
        app.attach_listeners()?;
        Ok(app)
    }

    /// Whether an analyze request is currently in flight
    #[wasm_bindgen(getter, js_name = inFlight)]
    pub fn in_flight(&self) -> bool {
        self.in_flight.get()
    }
}

impl AnalyzerApp {
    fn attach_listeners(&self) -> Result<(), JsValue> {
        self.attach_submit()?;
        self.attach_file_validation()?;
        self.attach_sample_loader()?;
        self.attach_reset()?;
        self.attach_keyboard_shortcut()?;
        self.attach_drop_suppression()?;
        Ok(())
    }

    fn attach_submit(&self) -> Result<(), JsValue> {
        let view = Rc::clone(&self.view);
        let in_flight = Rc::clone(&self.in_flight);

        let on_submit = Closure::wrap(Box::new(move |event: Event| {
            event.prevent_default();
            if let Err(err) = handle_submit(&view, &in_flight) {
                web_sys::console::error_1(&err);
            }
        }) as Box<dyn FnMut(Event)>);

        self.view
            .form()?
            .add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
        on_submit.forget();
        Ok(())
    }

    fn attach_file_validation(&self) -> Result<(), JsValue> {
        let view = Rc::clone(&self.view);

        let on_change = Closure::wrap(Box::new(move |_event: Event| {
            if let Err(err) = handle_file_change(&view) {
                web_sys::console::error_1(&err);
            }
        }) as Box<dyn FnMut(Event)>);

        self.view
            .file_input()?
            .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
        on_change.forget();
        Ok(())
    }

    fn attach_sample_loader(&self) -> Result<(), JsValue> {
        let view = Rc::clone(&self.view);

        let on_click = Closure::wrap(Box::new(move |event: Event| {
            event.prevent_default();
            let view = Rc::clone(&view);
            spawn_local(async move {
                match api::fetch_sample_data().await {
                    Ok(sample) => {
                        let _ = view.set_job_description(&sample.sample_job_description);
                        let _ = view.show_toast("Sample job description loaded!");
                    }
                    Err(err) => {
                        let _ = view.show_error(SAMPLE_LOAD_ERROR);
                        web_sys::console::error_1(&err);
                    }
                }
            });
        }) as Box<dyn FnMut(Event)>);

        self.view
            .sample_button()?
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
        Ok(())
    }

    fn attach_reset(&self) -> Result<(), JsValue> {
        let view = Rc::clone(&self.view);

        let on_click = Closure::wrap(Box::new(move |event: Event| {
            event.prevent_default();
            if let Err(err) = view.reset_to_input() {
                web_sys::console::error_1(&err);
                return;
            }
            let _ = view.show_toast("Ready for a new analysis!");
        }) as Box<dyn FnMut(Event)>);

        self.view
            .reset_button()?
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
        Ok(())
    }

    /// Control+Enter anywhere on the page submits the form
    fn attach_keyboard_shortcut(&self) -> Result<(), JsValue> {
        let view = Rc::clone(&self.view);

        let on_keydown = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            if event.key() == "Enter" && event.ctrl_key() {
                if let (Ok(form), Ok(submit)) = (view.form(), Event::new("submit")) {
                    let _ = form.dispatch_event(&submit);
                }
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);

        self.view
            .document()
            .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())?;
        on_keydown.forget();
        Ok(())
    }

    /// Dropping a file anywhere on the page must not navigate away
    fn attach_drop_suppression(&self) -> Result<(), JsValue> {
        let suppress = Closure::wrap(Box::new(move |event: DragEvent| {
            event.prevent_default();
            event.stop_propagation();
        }) as Box<dyn FnMut(DragEvent)>);

        let document = self.view.document();
        document
            .add_event_listener_with_callback("dragover", suppress.as_ref().unchecked_ref())?;
        document.add_event_listener_with_callback("drop", suppress.as_ref().unchecked_ref())?;
        suppress.forget();
        Ok(())
    }
}

/// Validate inputs and launch the analyze request
fn handle_submit(view: &Rc<AnalyzerView>, in_flight: &Rc<Cell<bool>>) -> Result<(), JsValue> {
    if in_flight.get() {
        return Ok(());
    }

    let resume = match view.resume_file()? {
        Some(file) => file,
        None => {
            view.show_error(&UploadError::NoFile.to_string())?;
            return Ok(());
        }
    };

    let job_description = view.job_description()?;
    if let Err(err) = check_job_description(&job_description) {
        view.show_error(&err.to_string())?;
        return Ok(());
    }

    in_flight.set(true);
    view.set_submit_enabled(false)?;
    view.set_spinner_visible(true)?;
    view.hide_error()?;

    let view = Rc::clone(view);
    let in_flight = Rc::clone(in_flight);
    spawn_local(async move {
        let outcome = api::post_analysis(&resume, &job_description).await;

        // Interactive state is restored on every path
        in_flight.set(false);
        let _ = view.set_submit_enabled(true);
        let _ = view.set_spinner_visible(false);

        match outcome {
            Ok(report) if report.success => {
                if let Err(err) = view.render_results(&report) {
                    web_sys::console::error_1(&err);
                }
            }
            Ok(report) => {
                let message = report.error.as_deref().unwrap_or(GENERIC_ANALYSIS_ERROR);
                let _ = view.show_error(message);
            }
            Err(err) => {
                let _ = view.show_error(&format!("Network error: {}", js_error_message(&err)));
                web_sys::console::error_1(&err);
            }
        }
    });

    Ok(())
}

/// Reject non-PDF and oversized selections as soon as they happen
fn handle_file_change(view: &Rc<AnalyzerView>) -> Result<(), JsValue> {
    let file = match view.resume_file()? {
        Some(file) => file,
        None => return Ok(()),
    };

    match check_resume_file(&file.type_(), file.size() as usize) {
        Ok(()) => view.clear_field_error(),
        Err(err) => {
            view.show_field_error(&err.to_string())?;
            // Clearing the value forces the user to pick again
            view.file_input()?.set_value("");
            Ok(())
        }
    }
}

/// Best-effort human-readable message out of a thrown JsValue
fn js_error_message(err: &JsValue) -> String {
    err.as_string()
        .or_else(|| {
            err.dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", err))
}
