use crate::headers::ResponseHeaders;

/// Failure of a GraphQL HTTP query.
///
/// Both variants are turned into an HTTP response by the handler: the message becomes
/// the body, the status defaults to `500` when none is reported.
#[derive(Debug, thiserror::Error)]
pub enum HttpQueryError {
    /// Raised by the executor with HTTP metadata meant for the client.
    #[error("{message}")]
    Query {
        status_code: Option<u16>,
        headers: ResponseHeaders,
        message: String,
    },
    /// Anything else that went wrong while running the query.
    #[error("{message}")]
    Generic { message: String },
}

impl HttpQueryError {
    pub fn query(status_code: u16, message: impl Into<String>) -> Self {
        Self::Query {
            status_code: Some(status_code),
            headers: ResponseHeaders::new(),
            message: message.into(),
        }
    }

    pub fn query_with_headers(
        status_code: u16,
        headers: ResponseHeaders,
        message: impl Into<String>,
    ) -> Self {
        Self::Query {
            status_code: Some(status_code),
            headers,
            message: message.into(),
        }
    }

    pub fn generic(message: impl Into<String>) -> Self {
        Self::Generic {
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Query { status_code, .. } => *status_code,
            Self::Generic { .. } => None,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Query { message, .. } | Self::Generic { message } => message,
        }
    }
}
