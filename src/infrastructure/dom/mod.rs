pub mod error_renderer;
pub mod page;

pub use error_renderer::{find_error_region, materialize, render_into};
pub use page::BrowserPage;
