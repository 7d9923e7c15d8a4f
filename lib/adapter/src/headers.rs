use ntex::http::header::{HeaderName, HeaderValue};

use crate::response::ResponseSink;

#[derive(Debug, thiserror::Error)]
pub enum InvalidHeader {
    #[error("Invalid header name: {0}")]
    Name(String),
    #[error("Header '{0}' has invalid value")]
    Value(String),
}

/// Headers to be set on an outgoing response, kept in the order they were produced.
///
/// Applying them to a response sets each entry in turn, so when a name appears more
/// than once the last value wins.
#[derive(Debug, Clone, Default)]
pub struct ResponseHeaders(Vec<(HeaderName, HeaderValue)>);

impl ResponseHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, name: HeaderName, value: HeaderValue) {
        self.0.push((name, value));
    }

    pub fn with(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.append(name, value);
        self
    }

    /// Like [`ResponseHeaders::with`], for names and values that still need validation.
    pub fn try_with(self, name: &str, value: &str) -> Result<Self, InvalidHeader> {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| InvalidHeader::Name(name.to_string()))?;
        let header_value =
            HeaderValue::from_str(value).map_err(|_| InvalidHeader::Value(name.to_string()))?;

        Ok(self.with(header_name, header_value))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(HeaderName, HeaderValue)> {
        self.0.iter()
    }

    pub fn apply_to<S: ResponseSink>(self, res: &mut S) {
        for (name, value) in self.0 {
            res.set_header(name, value);
        }
    }
}
