//! Serves a GraphQL executor's HTTP query contract on ntex.
//!
//! The [`GraphQLHandler`] reads the GraphQL parameters off the request (query string for
//! `GET`, JSON body otherwise), hands them to a [`GraphQLExecutor`] and maps the result or
//! the [`HttpQueryError`] back onto the response.

mod error;
mod executor;
mod handler;
mod headers;
mod logger;
mod options;
mod request;
mod response;
mod server;

pub use crate::{
    error::HttpQueryError,
    executor::{GraphQLExecutor, HttpQueryRequest, HttpQueryResponse, ResponseInit},
    handler::{write_outcome, GraphQLHandler},
    headers::{InvalidHeader, ResponseHeaders},
    logger::configure_logging,
    options::{OptionsFn, OptionsResolver, StaticOptions},
    request::{IncomingQuery, NormalizedRequest},
    response::{NtexResponse, ResponseSink},
    server::{
        adapter_entrypoint, configure_graphql_service, health_check_handler, serve, AdapterInitError,
    },
};

pub use async_trait::async_trait;
pub use ntex;
pub use ntex_graphql_adapter_config as config;
