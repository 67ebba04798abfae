pub mod actions;
pub mod template;

pub use actions::{ActionConfig, ResourceAction};
pub use template::UrlTemplate;
