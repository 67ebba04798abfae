//! Pure types: nothing in here touches the browser.

pub mod errors;
pub mod forms;
pub mod logging;
pub mod routes;
pub mod submission;
