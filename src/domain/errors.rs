use derive_more::Display;

/// Root error type for everything a submission can run into
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum AppError {
    #[display(fmt = "Page error: {}", _0)]
    Page(PageError),
    #[display(fmt = "Route error: {}", _0)]
    Route(RouteError),
    #[display(fmt = "Network error: {}", _0)]
    Network(String),
    #[display(fmt = "Response decode error: {}", _0)]
    Decode(String),
}

/// Failures talking to the hosting page
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum PageError {
    #[display(fmt = "browser window or document unavailable")]
    NoDocument,
    #[display(fmt = "element #{} not found", _0)]
    MissingElement(String),
    #[display(fmt = "form '{}' not found", _0)]
    MissingForm(String),
    #[display(fmt = "could not capture form data: {}", _0)]
    FormCapture(String),
    #[display(fmt = "DOM mutation failed: {}", _0)]
    Dom(String),
    #[display(fmt = "navigation to {} failed", _0)]
    Navigation(String),
}

/// URL template problems
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum RouteError {
    #[display(fmt = "no value for placeholder '{}'", _0)]
    MissingValue(String),
    #[display(fmt = "value '{}' for placeholder '{}' is not a path segment", value, name)]
    InvalidValue { name: String, value: String },
    #[display(fmt = "malformed template '{}'", _0)]
    Malformed(String),
}

impl std::error::Error for AppError {}
impl std::error::Error for PageError {}
impl std::error::Error for RouteError {}

impl From<PageError> for AppError {
    fn from(error: PageError) -> Self {
        AppError::Page(error)
    }
}

impl From<RouteError> for AppError {
    fn from(error: RouteError) -> Self {
        AppError::Route(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::Decode(error.to_string())
    }
}

impl From<AppError> for wasm_bindgen::JsValue {
    fn from(error: AppError) -> Self {
        wasm_bindgen::JsValue::from_str(&error.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
