pub mod error_layout;
pub mod field_errors;

pub use error_layout::{DEFAULT_ERROR_ITEM_CLASS, ElementPlan, ErrorListLayout};
pub use field_errors::{FieldErrorSet, FieldErrors};
