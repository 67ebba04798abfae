use serde_json::{Map, Value};
use strum::{AsRefStr, Display};

use crate::domain::errors::{AppError, AppResult};
use crate::domain::forms::FieldErrorSet;

pub const STATUS_CREATED: u16 = 201;
pub const STATUS_BAD_REQUEST: u16 = 400;

/// Raw completion of a form POST
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }
}

/// JSON body of a 201 reply
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreatedResource {
    fields: Map<String, Value>,
}

impl CreatedResource {
    pub fn from_json(body: &str) -> AppResult<Self> {
        match serde_json::from_str::<Value>(body)? {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(AppError::Decode(format!(
                "expected a JSON object for a created resource, got {other}"
            ))),
        }
    }

    /// Field value as a path segment; numbers and strings only
    pub fn field(&self, name: &str) -> Option<String> {
        match self.fields.get(name)? {
            Value::String(text) => Some(text.clone()),
            Value::Number(number) => Some(number.to_string()),
            _ => None,
        }
    }
}

/// How a finished submission is interpreted
#[derive(Debug, Clone, PartialEq, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum SubmissionOutcome {
    Created(CreatedResource),
    ValidationFailed(FieldErrorSet),
    /// Any other status. The body is left unread.
    Unhandled { status: u16 },
}

impl SubmissionOutcome {
    /// Only 201 and 400 bodies are decoded; a decode failure on either is an error.
    pub fn classify(reply: &HttpReply) -> AppResult<Self> {
        match reply.status {
            STATUS_CREATED => Ok(Self::Created(CreatedResource::from_json(&reply.body)?)),
            STATUS_BAD_REQUEST => Ok(Self::ValidationFailed(FieldErrorSet::from_json(&reply.body)?)),
            status => Ok(Self::Unhandled { status }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unhandled_status_ignores_non_json_body() {
        let reply = HttpReply::new(500, "<html>Server Error</html>");
        assert_eq!(
            SubmissionOutcome::classify(&reply).unwrap(),
            SubmissionOutcome::Unhandled { status: 500 }
        );
    }

    #[test]
    fn created_body_must_be_an_object() {
        let reply = HttpReply::new(201, "[42]");
        assert!(matches!(SubmissionOutcome::classify(&reply), Err(AppError::Decode(_))));
    }

    #[test]
    fn outcome_names_are_snake_case() {
        let outcome = SubmissionOutcome::ValidationFailed(FieldErrorSet::new());
        assert_eq!(outcome.as_ref(), "validation_failed");
        assert_eq!(SubmissionOutcome::Unhandled { status: 403 }.to_string(), "unhandled");
    }
}
