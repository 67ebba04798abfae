use std::cell::RefCell;
use std::rc::Rc;
use strum::IntoEnumIterator;
use wasm_bindgen_futures::spawn_local;

use crate::application::FormSubmitter;
use crate::domain::{
    logging::{LogComponent, get_logger},
    routes::ResourceAction,
};
use crate::event_utils::ClickBinding;
use crate::infrastructure::{BrowserPage, GlooFormTransport};

pub type PageSubmitter = FormSubmitter<BrowserPage, GlooFormTransport>;

thread_local! {
    static BINDINGS: RefCell<Vec<ClickBinding>> = const { RefCell::new(Vec::new()) };
}

/// Run one action and log whatever goes wrong; click handlers have no caller
/// to report to.
pub async fn run_action(submitter: Rc<PageSubmitter>, action: ResourceAction) {
    if let Err(error) = submitter.submit(action).await {
        get_logger().error(
            LogComponent::Presentation("Bindings"),
            &format!("❌ {} failed: {}", action, error),
        );
    }
}

/// Attach a click handler to every action trigger present on `page`,
/// replacing any earlier bindings. Returns the bound actions.
pub fn bind_page(page: BrowserPage) -> Vec<ResourceAction> {
    let document = page.document().clone();
    let submitter = Rc::new(FormSubmitter::new(page, GlooFormTransport::new()));

    let mut bound = Vec::new();
    let mut bindings = Vec::new();
    for action in ResourceAction::iter() {
        let trigger_id = action.config().trigger_id;
        let Some(trigger) = document.get_element_by_id(trigger_id) else {
            crate::log_debug!(LogComponent::Presentation("Bindings"), "no #{} on this page", trigger_id);
            continue;
        };
        let submitter = Rc::clone(&submitter);
        bindings.push(ClickBinding::new(&trigger, move |_| {
            spawn_local(run_action(Rc::clone(&submitter), action));
        }));
        bound.push(action);
    }

    get_logger().info(
        LogComponent::Presentation("Bindings"),
        &format!("bound {} form actions: {:?}", bound.len(), bound),
    );
    BINDINGS.with(|current| *current.borrow_mut() = bindings);
    bound
}
