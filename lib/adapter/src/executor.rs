use async_trait::async_trait;
use ntex::http::Method;
use serde_json::Value;

use crate::{
    error::HttpQueryError, headers::ResponseHeaders, options::OptionsResolver,
    request::NormalizedRequest,
};

/// Everything the executor needs to run one GraphQL HTTP query.
pub struct HttpQueryRequest<'a, C> {
    pub method: Method,
    pub options: &'a dyn OptionsResolver<C>,
    /// Query-string params for `GET`, the parsed body otherwise.
    pub query: Option<Value>,
    pub request: NormalizedRequest,
}

impl<C> HttpQueryRequest<'_, C> {
    /// Resolves the executor options for this request.
    pub async fn resolve_options(&self) -> Result<C, HttpQueryError> {
        self.options.resolve(&self.request).await
    }
}

#[derive(Debug, Clone, Default)]
pub struct ResponseInit {
    /// `None` (or `0`) means the handler answers `200`.
    pub status: Option<u16>,
    pub headers: ResponseHeaders,
}

#[derive(Debug, Clone)]
pub struct HttpQueryResponse {
    pub graphql_response: String,
    pub response_init: ResponseInit,
}

impl HttpQueryResponse {
    pub fn new(graphql_response: impl Into<String>) -> Self {
        Self {
            graphql_response: graphql_response.into(),
            response_init: ResponseInit::default(),
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.response_init.status = Some(status);
        self
    }

    pub fn with_headers(mut self, headers: ResponseHeaders) -> Self {
        self.response_init.headers = headers;
        self
    }
}

/// The GraphQL server core the handler delegates to.
///
/// Implementations parse, validate and execute the query; the handler only moves data
/// between ntex and this trait.
#[async_trait(?Send)]
pub trait GraphQLExecutor: Send + Sync {
    type Options: 'static;

    async fn run_http_query(
        &self,
        query: HttpQueryRequest<'_, Self::Options>,
    ) -> Result<HttpQueryResponse, HttpQueryError>;
}
