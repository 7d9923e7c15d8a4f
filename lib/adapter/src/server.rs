use std::sync::Arc;

use ntex::{
    util::Bytes,
    web::{self, HttpRequest, Responder},
};
use ntex_graphql_adapter_config::{http_server::HttpServerConfig, load_config, AdapterConfig};
use tracing::info;

use crate::{
    executor::GraphQLExecutor, handler::GraphQLHandler, logger::configure_logging,
    options::OptionsResolver, response::NtexResponse,
};

#[derive(Debug, thiserror::Error)]
pub enum AdapterInitError {
    #[error("Failed to bind HTTP server to address: {0}. Error: {1}")]
    HttpServerBindError(String, std::io::Error),
    #[error("Failed to start HTTP server: {0}")]
    HttpServerStartError(std::io::Error),
}

async fn graphql_endpoint_handler<E: GraphQLExecutor + 'static>(
    request: HttpRequest,
    body_bytes: Bytes,
    handler: web::types::State<Arc<GraphQLHandler<E>>>,
) -> web::HttpResponse {
    handler
        .handle(&request, body_bytes, NtexResponse::new())
        .await
}

pub async fn health_check_handler() -> impl Responder {
    web::HttpResponse::Ok()
}

/// Mounts the GraphQL endpoint and the health check.
///
/// The app must carry an `Arc<GraphQLHandler<E>>` as state.
pub fn configure_graphql_service<E: GraphQLExecutor + 'static>(
    service_config: &mut web::ServiceConfig,
    http_config: &HttpServerConfig,
) {
    service_config
        .route(
            &http_config.graphql_endpoint(),
            web::to(graphql_endpoint_handler::<E>),
        )
        .route("/health", web::get().to(health_check_handler));
}

/// Loads the configuration (`ADAPTER_CONFIG_FILE_PATH` or the default `adapter.config.*`
/// files, plus environment overrides) and serves `executor` with it.
pub async fn adapter_entrypoint<E>(
    executor: E,
    options: impl OptionsResolver<E::Options> + 'static,
) -> Result<(), Box<dyn std::error::Error>>
where
    E: GraphQLExecutor + 'static,
{
    let config_path = std::env::var("ADAPTER_CONFIG_FILE_PATH").ok();
    let config = load_config(config_path)?;
    serve(config, executor, options).await?;

    Ok(())
}

/// Serves `executor` over HTTP until the server shuts down.
pub async fn serve<E>(
    config: AdapterConfig,
    executor: E,
    options: impl OptionsResolver<E::Options> + 'static,
) -> Result<(), AdapterInitError>
where
    E: GraphQLExecutor + 'static,
{
    configure_logging(&config.log);

    let addr = config.address();
    info!(
        "ntex-graphql-adapter@{} listening on {}{}",
        env!("CARGO_PKG_VERSION"),
        addr,
        config.graphql_path()
    );

    let handler = Arc::new(GraphQLHandler::new(executor, options));
    let config = Arc::new(config);

    web::HttpServer::new(async move || {
        let config = config.clone();
        web::App::new()
            .state(handler.clone())
            .configure(move |service_config| {
                configure_graphql_service::<E>(service_config, &config.http);
            })
    })
    .bind(&addr)
    .map_err(|err| AdapterInitError::HttpServerBindError(addr.clone(), err))?
    .run()
    .await
    .map_err(AdapterInitError::HttpServerStartError)?;

    info!("server stopped");

    Ok(())
}
