use futures::future::{FutureExt, LocalBoxFuture};
use gloo::net::http::Request;
use web_sys::FormData;

use crate::application::{FormTransport, current_settings};
use crate::domain::{
    errors::{AppError, AppResult},
    logging::{LogComponent, get_logger},
    submission::HttpReply,
};

/// `fetch`-based POST of a multipart form body.
///
/// The base URL is read from the active settings on every send.
#[derive(Clone, Debug, Default)]
pub struct GlooFormTransport;

impl GlooFormTransport {
    pub fn new() -> Self {
        Self
    }

    async fn send(&self, path: &str, payload: FormData) -> AppResult<HttpReply> {
        let url = current_settings().endpoint_url(path);

        // The browser picks the multipart boundary from the FormData body
        let response = Request::post(&url)
            .body(payload)
            .map_err(|e| AppError::Network(format!("Failed to build request: {:?}", e)))?
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Failed to send request: {:?}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::Network(format!("Failed to read response body: {:?}", e)))?;

        get_logger().debug(
            LogComponent::Infrastructure("Http"),
            &format!("📡 POST {} -> {} ({} bytes)", url, status, body.len()),
        );

        Ok(HttpReply::new(status, body))
    }
}

impl FormTransport for GlooFormTransport {
    type Payload = FormData;

    fn post<'a>(&'a self, path: &'a str, payload: FormData) -> LocalBoxFuture<'a, AppResult<HttpReply>> {
        self.send(path, payload).boxed_local()
    }
}
