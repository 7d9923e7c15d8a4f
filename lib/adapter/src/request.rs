use ntex::{
    http::{header::HOST, HeaderMap, Method, Uri},
    util::Bytes,
    web::{types::Query, HttpRequest},
};
use serde_json::{Map, Value};
use tracing::{trace, warn};

use crate::error::HttpQueryError;

/// What the handler reads off an incoming ntex request.
#[derive(Debug)]
pub struct IncomingQuery {
    pub method: Method,
    /// The query string as a JSON object. Names are mapped to strings, or to arrays of strings
    /// when they repeat. Empty when the URL has no query.
    pub query: Option<Value>,
    /// The JSON request body. `None` for `GET` requests and for empty bodies.
    pub body: Option<Value>,
}

impl IncomingQuery {
    pub fn from_request(req: &HttpRequest, body_bytes: &Bytes) -> Result<Self, HttpQueryError> {
        let method = req.method().clone();
        let query = parse_query_string(req.uri().query().unwrap_or_default())?;

        let body = if method == Method::GET {
            None
        } else {
            parse_json_body(body_bytes)?
        };

        Ok(Self {
            method,
            query: Some(query),
            body,
        })
    }

    /// `GET` requests carry the GraphQL parameters in the query string, everything else in the body.
    pub fn query_payload(&self) -> Option<&Value> {
        if self.method == Method::GET {
            self.query.as_ref()
        } else {
            self.body.as_ref()
        }
    }

    pub fn into_query_payload(self) -> Option<Value> {
        if self.method == Method::GET {
            self.query
        } else {
            self.body
        }
    }
}

fn parse_query_string(query_str: &str) -> Result<Value, HttpQueryError> {
    let pairs = Query::<Vec<(String, String)>>::from_query(query_str)
        .map_err(|err| {
            warn!("failed to parse query string: {}", err);
            HttpQueryError::query(400, format!("Failed to parse query string: {}", err))
        })?
        .0;

    let mut params = Map::with_capacity(pairs.len());
    for (name, value) in pairs {
        let value = Value::String(value);
        match params.get_mut(&name) {
            None => {
                params.insert(name, value);
            }
            // repeated names collect every value, in order
            Some(Value::Array(values)) => values.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
        }
    }

    trace!("parsed query string params: {:?}", params);

    Ok(Value::Object(params))
}

fn parse_json_body(body_bytes: &Bytes) -> Result<Option<Value>, HttpQueryError> {
    if body_bytes.is_empty() {
        trace!("request has no body");
        return Ok(None);
    }

    serde_json::from_slice::<Value>(body_bytes)
        .map(Some)
        .map_err(|err| {
            warn!("failed to parse body: {}", err);
            HttpQueryError::query(400, format!("Failed to parse request body: {}", err))
        })
}

/// Transport-agnostic view of the HTTP request, handed to the executor and to options resolvers.
#[derive(Debug, Clone)]
pub struct NormalizedRequest {
    pub method: Method,
    /// Always absolute.
    pub url: Uri,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl NormalizedRequest {
    pub fn new(method: Method, uri: &Uri, headers: HeaderMap, body: Bytes) -> Self {
        let url = absolute_url(uri, &headers);

        Self {
            method,
            url,
            headers,
            body,
        }
    }

    pub fn from_request(req: &HttpRequest, body: Bytes) -> Self {
        Self::new(req.method().clone(), req.uri(), req.headers().clone(), body)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}

fn absolute_url(uri: &Uri, headers: &HeaderMap) -> Uri {
    if uri.scheme().is_some() && uri.authority().is_some() {
        return uri.clone();
    }

    let host = headers
        .get(HOST)
        .and_then(|value| value.to_str().ok())
        .filter(|host| !host.is_empty())
        .unwrap_or("localhost");
    let path_and_query = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");

    format!("http://{host}{path_and_query}")
        .parse::<Uri>()
        .unwrap_or_else(|err| {
            warn!("unable to build an absolute request URL: {}", err);
            uri.clone()
        })
}
