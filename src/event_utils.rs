use gloo::events::{EventListener, EventListenerOptions};
use web_sys::{Document, Event, EventTarget};

/// Run `f` once the document has parsed: now, or on `DOMContentLoaded`.
pub fn on_dom_ready(document: &Document, f: impl FnOnce() + 'static) {
    if document.ready_state() == "loading" {
        EventListener::once(document, "DOMContentLoaded", move |_| f()).forget();
    } else {
        f();
    }
}

/// A click listener that suppresses the element's default action.
/// Dropping it detaches the listener.
pub struct ClickBinding {
    _listener: EventListener,
}

impl ClickBinding {
    pub fn new(target: &EventTarget, mut cb: impl FnMut(&Event) + 'static) -> Self {
        let listener = EventListener::new_with_options(
            target,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                cb(event);
            },
        );
        Self { _listener: listener }
    }
}
