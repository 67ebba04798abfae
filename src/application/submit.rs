use futures::future::LocalBoxFuture;

use crate::domain::{
    errors::AppResult,
    forms::FieldErrorSet,
    logging::{LogComponent, LogEntry, LogLevel, get_logger},
    routes::ResourceAction,
    submission::{HttpReply, SubmissionOutcome},
};

/// Everything a submission needs from the hosting page
pub trait SubmissionView {
    /// Serialized form contents, handed to the transport untouched
    type Payload;

    /// Value of a page-embedded identifier element, if present
    fn page_value(&self, element_id: &str) -> Option<String>;

    fn capture_form(&self, form_name: &str) -> AppResult<Self::Payload>;

    /// Put the trigger into its busy state. Nested calls for the same trigger
    /// stack; the idle content comes back when the last one leaves.
    /// `false` when there is no such trigger.
    fn enter_busy(&self, trigger_id: &str) -> bool;

    /// Undo one successful `enter_busy`
    fn leave_busy(&self, trigger_id: &str);

    fn render_errors(&self, form_name: &str, errors: &FieldErrorSet) -> AppResult<()>;

    fn navigate(&self, url: &str) -> AppResult<()>;
}

/// Sends one form payload and hands back status and body
pub trait FormTransport {
    type Payload;

    fn post<'a>(&'a self, path: &'a str, payload: Self::Payload)
    -> LocalBoxFuture<'a, AppResult<HttpReply>>;
}

/// Busy state on a trigger, restored when dropped
pub struct BusyGuard<'a, V: SubmissionView + ?Sized> {
    view: &'a V,
    trigger_id: &'a str,
    held: bool,
}

impl<'a, V: SubmissionView + ?Sized> BusyGuard<'a, V> {
    pub fn acquire(view: &'a V, trigger_id: &'a str) -> Self {
        let held = view.enter_busy(trigger_id);
        Self { view, trigger_id, held }
    }
}

impl<V: SubmissionView + ?Sized> Drop for BusyGuard<'_, V> {
    fn drop(&mut self) {
        if self.held {
            self.view.leave_busy(self.trigger_id);
        }
    }
}

/// Runs submissions for any action against one view and one transport.
///
/// Holds no per-request state; each call to [`FormSubmitter::submit`] owns
/// its own busy guard.
pub struct FormSubmitter<V, T> {
    view: V,
    transport: T,
}

impl<V, T> FormSubmitter<V, T>
where
    V: SubmissionView,
    T: FormTransport<Payload = V::Payload>,
{
    pub fn new(view: V, transport: T) -> Self {
        Self { view, transport }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send request → await reply → branch on status.
    ///
    /// Missing page identifiers and unreadable forms fail before the trigger
    /// goes busy. Statuses other than 201/400 are logged and otherwise ignored.
    pub async fn submit(&self, action: ResourceAction) -> AppResult<SubmissionOutcome> {
        let config = action.config();
        let endpoint = config
            .endpoint_template()?
            .expand(|element_id| self.view.page_value(element_id))?;
        let payload = self.view.capture_form(config.form_name)?;

        get_logger().log(
            LogEntry::new(LogLevel::Debug, LogComponent::Application("Submit"), "posting form")
                .with_field("action", action)
                .with_field("endpoint", &endpoint),
        );

        let reply = {
            let _busy = BusyGuard::acquire(&self.view, config.trigger_id);
            self.transport.post(&endpoint, payload).await?
        };

        let outcome = SubmissionOutcome::classify(&reply)?;
        match &outcome {
            SubmissionOutcome::Created(resource) => {
                let destination = config
                    .redirect_template()?
                    .expand(|field| resource.field(field))?;
                get_logger().log(
                    LogEntry::new(LogLevel::Info, LogComponent::Application("Submit"), "✅ created")
                        .with_field("action", action)
                        .with_field("location", &destination),
                );
                self.view.navigate(&destination)?;
            }
            SubmissionOutcome::ValidationFailed(errors) => {
                get_logger().log(
                    LogEntry::new(LogLevel::Info, LogComponent::Application("Submit"), "validation failed")
                        .with_field("action", action)
                        .with_field("fields", errors.len()),
                );
                self.view.render_errors(config.form_name, errors)?;
            }
            SubmissionOutcome::Unhandled { status } => {
                get_logger().log(
                    LogEntry::new(LogLevel::Warn, LogComponent::Application("Submit"), "unhandled response status")
                        .with_field("action", action)
                        .with_field("status", status),
                );
            }
        }

        Ok(outcome)
    }
}
