use async_graphql::{EmptyMutation, EmptySubscription, Object, Schema};
use axum::Router;
use graphql_handler::{telemetry::init_tracing, GraphqlHandler};
use std::env;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::info;

struct Query;

#[Object]
impl Query {
    async fn hello(&self) -> &str {
        "Hello world"
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let schema = Schema::new(Query, EmptyMutation, EmptySubscription);
    let handler = GraphqlHandler::new(schema).on_error("Bad Request");

    let app = handler
        .register_axum("/graphql", Router::new(), None)
        .layer(TraceLayer::new_for_http());

    let port = env::var("PORT")
        .unwrap_or_else(|_| "8000".to_string())
        .parse::<u16>()?;
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    // visit http://localhost:8000/graphql
    info!("Server listening on {}", addr);

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {}", e);
        }
        info!("Shutting down gracefully...");
    };

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown)
    .await?;

    Ok(())
}
