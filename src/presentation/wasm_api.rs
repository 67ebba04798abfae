use gloo::utils::format::JsValueSerdeExt;
use js_sys::{Array, Promise};
use std::str::FromStr;
use strum::IntoEnumIterator;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use super::page_bindings::{PageSubmitter, bind_page};
use crate::application::{self, FormSettings, FormSubmitter, current_settings};
use crate::domain::{
    errors::AppError,
    forms::FieldErrorSet,
    logging::{LogComponent, get_logger},
    routes::ResourceAction,
};
use crate::infrastructure::{BrowserPage, GlooFormTransport};

fn decode_arg<T: serde::de::DeserializeOwned>(value: &JsValue, what: &str) -> Result<T, JsValue> {
    value
        .into_serde::<T>()
        .map_err(|e| AppError::Decode(format!("{}: {}", what, e)).into())
}

/// Render a `{field: [messages]}` object into the error region.
/// `region_id` defaults to the configured one.
#[wasm_bindgen(js_name = renderFormErrors)]
pub fn render_form_errors(errors: JsValue, region_id: Option<String>) -> Result<(), JsValue> {
    let errors: FieldErrorSet = decode_arg(&errors, "field errors")?;
    let region_id = region_id.unwrap_or_else(|| current_settings().errors_region_id);
    BrowserPage::current()?.render_errors_in_region(&region_id, &errors)?;
    Ok(())
}

/// Run a named action (e.g. `"note-edit"`); resolves to the outcome kind.
#[wasm_bindgen(js_name = submitAction)]
pub fn submit_action(name: String) -> Promise {
    future_to_promise(async move {
        let action = ResourceAction::from_str(&name)
            .map_err(|_| JsValue::from_str(&format!("unknown form action '{}'", name)))?;
        let submitter: PageSubmitter = FormSubmitter::new(BrowserPage::current()?, GlooFormTransport::new());
        let outcome = submitter.submit(action).await?;
        Ok(JsValue::from_str(outcome.as_ref()))
    })
}

/// Re-scan the page for triggers; returns how many were bound.
#[wasm_bindgen(js_name = bindFormHandlers)]
pub fn bind_form_handlers() -> Result<usize, JsValue> {
    Ok(bind_page(BrowserPage::current()?).len())
}

#[wasm_bindgen(js_name = formActions)]
pub fn form_actions() -> Array {
    ResourceAction::iter()
        .map(|action| JsValue::from_str(action.as_ref()))
        .collect()
}

/// Replace the runtime settings; missing keys fall back to defaults.
#[wasm_bindgen(js_name = configureForms)]
pub fn configure_forms(settings: JsValue) -> Result<(), JsValue> {
    let settings: FormSettings = decode_arg(&settings, "form settings")?;
    get_logger().info(
        LogComponent::Presentation("WasmApi"),
        &format!("⚙️ settings updated: {:?}", settings),
    );
    application::configure(settings);
    Ok(())
}
