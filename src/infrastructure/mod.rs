//! Browser-backed implementations of the application seams.

pub mod dom;
pub mod http;
pub mod services;

pub use dom::BrowserPage;
pub use http::GlooFormTransport;
