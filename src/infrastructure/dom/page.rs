use std::cell::RefCell;
use std::collections::HashMap;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, FormData, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement,
};

use super::error_renderer;
use crate::application::{SubmissionView, current_settings};
use crate::domain::{
    errors::{AppResult, PageError},
    forms::{ErrorListLayout, FieldErrorSet},
    logging::{LogComponent, get_logger},
};

/// Idle content of a trigger with `depth` requests in flight
struct BusyTrigger {
    depth: usize,
    idle_markup: String,
}

thread_local! {
    // Shared by every BrowserPage so bindings and the JS API agree.
    static BUSY_TRIGGERS: RefCell<HashMap<String, BusyTrigger>> = RefCell::new(HashMap::new());
}

/// The live document as a submission view
#[derive(Clone)]
pub struct BrowserPage {
    document: Document,
}

impl BrowserPage {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn current() -> AppResult<Self> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(PageError::NoDocument)?;
        Ok(Self::new(document))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// `document.forms[name]`
    pub fn form(&self, form_name: &str) -> AppResult<HtmlFormElement> {
        self.document
            .forms()
            .named_item(form_name)
            .and_then(|element| element.dyn_into::<HtmlFormElement>().ok())
            .ok_or_else(|| PageError::MissingForm(form_name.to_string()).into())
    }

    /// Render into the configured region, independent of any form
    pub fn render_errors_in_region(&self, region_id: &str, errors: &FieldErrorSet) -> AppResult<()> {
        let settings = current_settings();
        let region = error_renderer::find_error_region(&self.document, None, region_id)?;
        error_renderer::render_into(
            &self.document,
            &region,
            errors,
            &ErrorListLayout::new(settings.error_item_class),
        )
    }
}

impl SubmissionView for BrowserPage {
    type Payload = FormData;

    fn page_value(&self, element_id: &str) -> Option<String> {
        let element = self.document.get_element_by_id(element_id)?;
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            Some(input.value())
        } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            Some(select.value())
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            Some(area.value())
        } else {
            element.get_attribute("value").or_else(|| element.text_content())
        }
    }

    fn capture_form(&self, form_name: &str) -> AppResult<FormData> {
        let form = self.form(form_name)?;
        FormData::new_with_form(&form)
            .map_err(|e| PageError::FormCapture(format!("{:?}", e)).into())
    }

    fn enter_busy(&self, trigger_id: &str) -> bool {
        let Some(trigger) = self.document.get_element_by_id(trigger_id) else {
            return false;
        };
        BUSY_TRIGGERS.with(|busy| {
            busy.borrow_mut()
                .entry(trigger_id.to_string())
                .and_modify(|state| state.depth += 1)
                .or_insert_with(|| BusyTrigger { depth: 1, idle_markup: trigger.inner_html() });
        });
        trigger.set_inner_html(&current_settings().busy_markup);
        true
    }

    fn leave_busy(&self, trigger_id: &str) {
        let idle_markup = BUSY_TRIGGERS.with(|busy| {
            let mut busy = busy.borrow_mut();
            let state = busy.get_mut(trigger_id)?;
            state.depth -= 1;
            if state.depth > 0 {
                return None;
            }
            busy.remove(trigger_id).map(|state| state.idle_markup)
        });
        let Some(idle_markup) = idle_markup else {
            return;
        };
        match self.document.get_element_by_id(trigger_id) {
            Some(trigger) => trigger.set_inner_html(&idle_markup),
            None => get_logger().warn(
                LogComponent::Infrastructure("Page"),
                &format!("trigger #{} disappeared while busy", trigger_id),
            ),
        }
    }

    fn render_errors(&self, form_name: &str, errors: &FieldErrorSet) -> AppResult<()> {
        let settings = current_settings();
        let form: Option<Element> = self.form(form_name).ok().map(Into::into);
        let region =
            error_renderer::find_error_region(&self.document, form.as_ref(), &settings.errors_region_id)?;
        error_renderer::render_into(
            &self.document,
            &region,
            errors,
            &ErrorListLayout::new(settings.error_item_class),
        )
    }

    fn navigate(&self, url: &str) -> AppResult<()> {
        let location = self.document.location().ok_or(PageError::NoDocument)?;
        location
            .set_href(url)
            .map_err(|_| PageError::Navigation(url.to_string()).into())
    }
}
