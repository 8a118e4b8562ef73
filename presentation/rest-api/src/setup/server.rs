use poem::{
    Endpoint, EndpointExt, Route, Server as PoemServer, listener::TcpListener,
    middleware::{Cors, Tracing},
};
use poem_openapi::OpenApiService;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub const API_TITLE: &str = "Perplexcipe API";

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = build_app(container, config.cors, &addr);

        tracing::info!(%addr, "Perplexcipe listening");
        tracing::info!("Swagger UI at http://{}/docs", addr);

        PoemServer::new(TcpListener::bind(&addr))
            .run_with_graceful_shutdown(
                app,
                async {
                    let _ = tokio::signal::ctrl_c().await;
                    tracing::info!("received shutdown signal");
                },
                None,
            )
            .await?;
        Ok(())
    }
}

/// Every route the service exposes, plus the OpenAPI document at
/// `/openapi.json` and Swagger UI at `/docs`.
pub fn build_app(
    container: DependencyContainer,
    cors: Cors,
    addr: &str,
) -> impl Endpoint + use<> {
    let api_service = OpenApiService::new(
        (
            container.health_api,
            container.recipe_api,
            container.diagnostics_api,
            container.connectivity_api,
        ),
        API_TITLE,
        env!("CARGO_PKG_VERSION"),
    )
    .server(format!("http://{}", addr));
    let docs = api_service.swagger_ui();
    let openapi_json = api_service.spec_endpoint();

    Route::new()
        .nest("/", api_service)
        .nest("/docs", docs)
        .nest("/openapi.json", openapi_json)
        .with(cors)
        .with(Tracing)
}
