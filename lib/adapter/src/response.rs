use ntex::{
    http::{
        header::{HeaderName, HeaderValue, CONTENT_TYPE},
        HeaderMap, ResponseBuilder, StatusCode,
    },
    web::HttpResponse,
};
use tracing::warn;

/// The framework side of a response: headers can be set any number of times, and
/// `finish` consumes the sink so a response is finalized exactly once.
pub trait ResponseSink {
    type Output;

    /// Sets a header, replacing any value set earlier under the same name.
    fn set_header(&mut self, name: HeaderName, value: HeaderValue);

    fn finish(self, status_code: u16, body: String) -> Self::Output;
}

/// Builds an ntex [`HttpResponse`]. Bodies without a `content-type` are sent as plain text.
#[derive(Debug)]
pub struct NtexResponse {
    headers: HeaderMap,
}

impl NtexResponse {
    pub fn new() -> Self {
        Self {
            headers: HeaderMap::new(),
        }
    }
}

impl Default for NtexResponse {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseSink for NtexResponse {
    type Output = HttpResponse;

    fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.insert(name, value);
    }

    fn finish(self, status_code: u16, body: String) -> HttpResponse {
        let status = StatusCode::from_u16(status_code).unwrap_or_else(|_| {
            warn!(
                "status code {} cannot be sent over HTTP, responding with 500",
                status_code
            );
            StatusCode::INTERNAL_SERVER_ERROR
        });

        let mut headers = self.headers;
        if !headers.contains_key(CONTENT_TYPE) {
            headers.insert(
                CONTENT_TYPE,
                HeaderValue::from_static("text/plain; charset=utf-8"),
            );
        }

        let mut response = ResponseBuilder::new(status).body(body);
        *response.headers_mut() = headers;
        response
    }
}
