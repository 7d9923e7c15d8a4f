use ntex::{http::StatusCode, util::Bytes, web::HttpRequest};
use tracing::{debug, trace, warn};

use crate::{
    error::HttpQueryError,
    executor::{GraphQLExecutor, HttpQueryRequest, HttpQueryResponse},
    options::OptionsResolver,
    request::{IncomingQuery, NormalizedRequest},
    response::ResponseSink,
};

pub struct GraphQLHandler<E: GraphQLExecutor> {
    executor: E,
    options: Box<dyn OptionsResolver<E::Options>>,
}

impl<E: GraphQLExecutor> GraphQLHandler<E> {
    pub fn new(executor: E, options: impl OptionsResolver<E::Options> + 'static) -> Self {
        Self {
            executor,
            options: Box::new(options),
        }
    }

    /// Runs the request through the executor and writes the outcome onto `res`.
    ///
    /// Never fails: executor errors end up as the response status and body.
    pub async fn handle<S: ResponseSink>(
        &self,
        req: &HttpRequest,
        body_bytes: Bytes,
        res: S,
    ) -> S::Output {
        let outcome = self.execute(req, body_bytes).await;
        write_outcome(res, outcome)
    }

    async fn execute(
        &self,
        req: &HttpRequest,
        body_bytes: Bytes,
    ) -> Result<HttpQueryResponse, HttpQueryError> {
        let incoming = IncomingQuery::from_request(req, &body_bytes)?;
        let request = NormalizedRequest::from_request(req, body_bytes);

        trace!(
            method = %incoming.method,
            url = %request.url,
            "forwarding request to the GraphQL executor"
        );

        self.executor
            .run_http_query(HttpQueryRequest {
                method: incoming.method.clone(),
                options: self.options.as_ref(),
                query: incoming.into_query_payload(),
                request,
            })
            .await
    }
}

/// Maps an execution outcome onto the response: headers first, then a single `finish`.
pub fn write_outcome<S: ResponseSink>(
    mut res: S,
    outcome: Result<HttpQueryResponse, HttpQueryError>,
) -> S::Output {
    match outcome {
        Ok(HttpQueryResponse {
            graphql_response,
            response_init,
        }) => {
            response_init.headers.apply_to(&mut res);
            let status_code = match response_init.status {
                Some(status) if status != 0 => status,
                _ => StatusCode::OK.as_u16(),
            };

            res.finish(status_code, graphql_response)
        }
        Err(HttpQueryError::Query {
            status_code,
            headers,
            message,
        }) => {
            debug!(status_code, "GraphQL query failed: {}", message);
            if !headers.is_empty() {
                headers.apply_to(&mut res);
            }
            let status_code = status_code.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR.as_u16());

            res.finish(status_code, message)
        }
        Err(HttpQueryError::Generic { message }) => {
            warn!("GraphQL execution failed: {}", message);

            res.finish(StatusCode::INTERNAL_SERVER_ERROR.as_u16(), message)
        }
    }
}
