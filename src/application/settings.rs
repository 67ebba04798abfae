use serde::{Deserialize, Serialize};
use std::cell::RefCell;

use crate::domain::forms::DEFAULT_ERROR_ITEM_CLASS;

pub const DEFAULT_ERRORS_REGION_ID: &str = "errors";
pub const DEFAULT_BUSY_MARKUP: &str =
    r#"<span class="spinner-border spinner-border-sm" role="status" aria-hidden="true"></span>"#;

/// Runtime knobs for the page integration. Every field has a default, so a
/// partial JSON object from the page is enough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSettings {
    /// Id of the element that receives rendered validation errors
    pub errors_region_id: String,
    /// Markup swapped into the trigger while a request is in flight
    pub busy_markup: String,
    pub error_item_class: String,
    /// Prefix for endpoint paths; empty means relative to the page origin
    pub base_url: String,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            errors_region_id: DEFAULT_ERRORS_REGION_ID.to_string(),
            busy_markup: DEFAULT_BUSY_MARKUP.to_string(),
            error_item_class: DEFAULT_ERROR_ITEM_CLASS.to_string(),
            base_url: String::new(),
        }
    }
}

impl FormSettings {
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

thread_local! {
    static SETTINGS: RefCell<FormSettings> = RefCell::new(FormSettings::default());
}

/// Snapshot of the active settings
pub fn current_settings() -> FormSettings {
    SETTINGS.with(|settings| settings.borrow().clone())
}

pub fn configure(settings: FormSettings) {
    SETTINGS.with(|current| *current.borrow_mut() = settings);
}
