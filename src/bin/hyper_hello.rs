use async_graphql::{EmptyMutation, EmptySubscription, Object, Schema};
use graphql_handler::{telemetry::init_tracing, GraphqlHandler};
use hyper::server::conn::http1;
use hyper_util::rt::TokioIo;
use std::env;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{info, warn};

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
    let service = GraphqlHandler::new(schema)
        .on_error("Bad Request")
        .hyper_service("/graphql", None);

    let port = env::var("PORT")
        .unwrap_or_else(|_| "8000".to_string())
        .parse::<u16>()?;
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    // visit http://localhost:8000/graphql
    let listener = TcpListener::bind(addr).await?;
    info!("Server listening on {}", addr);

    loop {
        let (stream, remote_addr) = listener.accept().await?;
        let service = service.with_remote_addr(remote_addr);

        tokio::spawn(async move {
            if let Err(e) = http1::Builder::new()
                .serve_connection(TokioIo::new(stream), service)
                .await
            {
                warn!(%remote_addr, "Connection error: {}", e);
            }
        });
    }
}
