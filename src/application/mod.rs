pub mod settings;
pub mod submit;

pub use settings::{FormSettings, configure, current_settings};
pub use submit::{BusyGuard, FormSubmitter, FormTransport, SubmissionView};
