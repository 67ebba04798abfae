use serde::Serialize;

use super::field_errors::FieldErrorSet;

pub const DEFAULT_ERROR_ITEM_CLASS: &str = "text-danger";

/// One element to build: tag, optional class, optional leading text, children
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementPlan {
    pub tag: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ElementPlan>,
}

impl ElementPlan {
    pub fn new(tag: &'static str) -> Self {
        Self { tag, class: None, text: None, children: Vec::new() }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_children(mut self, children: Vec<ElementPlan>) -> Self {
        self.children = children;
        self
    }
}

/// Lays a field error set out as
/// `ul > li(field) > ol > li.<item_class>(message)`.
#[derive(Debug, Clone)]
pub struct ErrorListLayout {
    item_class: String,
}

impl Default for ErrorListLayout {
    fn default() -> Self {
        Self::new(DEFAULT_ERROR_ITEM_CLASS)
    }
}

impl ErrorListLayout {
    pub fn new(item_class: impl Into<String>) -> Self {
        Self { item_class: item_class.into() }
    }

    /// `None` for an empty set: the region is left empty, not given a bare `<ul>`.
    /// A field without messages gets its heading and no `<ol>`.
    pub fn plan(&self, errors: &FieldErrorSet) -> Option<ElementPlan> {
        if errors.is_empty() {
            return None;
        }

        let entries = errors
            .iter()
            .map(|entry| {
                let heading = ElementPlan::new("li").with_text(entry.field.clone());
                if entry.messages.is_empty() {
                    return heading;
                }
                let items = entry
                    .messages
                    .iter()
                    .map(|message| {
                        ElementPlan::new("li")
                            .with_class(self.item_class.clone())
                            .with_text(message.clone())
                    })
                    .collect();
                heading.with_children(vec![ElementPlan::new("ol").with_children(items)])
            })
            .collect();

        Some(ElementPlan::new("ul").with_children(entries))
    }
}
