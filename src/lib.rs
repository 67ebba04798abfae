use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, get_logger};
use crate::infrastructure::BrowserPage;

mod macros;

pub mod application;
pub mod domain;
pub mod event_utils;
pub mod infrastructure;
pub mod presentation;

/// Module start: logging, panic hook, then bind the page's form triggers
/// once the DOM is ready.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    domain::logging::init_logger(Box::new(infrastructure::services::ConsoleLogger::for_build()));
    domain::logging::init_time_provider(Box::new(infrastructure::services::BrowserTimeProvider::new()));

    let page = match BrowserPage::current() {
        Ok(page) => page,
        Err(error) => {
            get_logger().error(LogComponent::Presentation("Initialize"), &error.to_string());
            return;
        }
    };

    let document = page.document().clone();
    event_utils::on_dom_ready(&document, move || {
        presentation::page_bindings::bind_page(page);
    });

    get_logger().info(LogComponent::Presentation("Initialize"), "🚀 form handlers initialized");
}
