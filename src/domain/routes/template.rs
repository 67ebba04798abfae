use derive_more::Display;

use crate::domain::errors::RouteError;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// Path template with `{name}` placeholders, e.g. `/courses/{course_id}/edit`
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display(fmt = "{}", source)]
pub struct UrlTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl UrlTemplate {
    pub fn parse(source: &str) -> Result<Self, RouteError> {
        let malformed = || RouteError::Malformed(source.to_string());
        let mut segments = Vec::new();
        let mut rest = source;

        while let Some(open) = rest.find(['{', '}']) {
            if rest.as_bytes()[open] == b'}' {
                return Err(malformed());
            }
            if open > 0 {
                segments.push(Segment::Literal(rest[..open].to_string()));
            }
            let after = &rest[open + 1..];
            let close = after.find('}').ok_or_else(malformed)?;
            let name = &after[..close];
            if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(malformed());
            }
            segments.push(Segment::Placeholder(name.to_string()));
            rest = &after[close + 1..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        Ok(Self { source: source.to_string(), segments })
    }

    /// Placeholder names in template order
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Fill every placeholder from `lookup`.
    ///
    /// Values are trimmed; an absent or blank value is `MissingValue`, and a
    /// value that would break out of its path segment is `InvalidValue`.
    pub fn expand<F>(&self, mut lookup: F) -> Result<String, RouteError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut url = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => url.push_str(text),
                Segment::Placeholder(name) => {
                    let value = lookup(name)
                        .map(|value| value.trim().to_string())
                        .filter(|value| !value.is_empty())
                        .ok_or_else(|| RouteError::MissingValue(name.clone()))?;
                    if value.contains(['/', '?', '#', '{', '}']) || value == "." || value == ".." {
                        return Err(RouteError::InvalidValue { name: name.clone(), value });
                    }
                    url.push_str(&value);
                }
            }
        }
        Ok(url)
    }
}
