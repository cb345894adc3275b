use actix_web::{middleware::Logger, App, HttpServer};
use async_graphql::{EmptyMutation, EmptySubscription, Object, Schema};
use graphql_handler::{telemetry::init_tracing, GraphqlHandler};
use std::env;
use tracing::info;

struct Query;

#[Object]
impl Query {
    async fn hello(&self) -> &str {
        "Hello world"
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let schema = Schema::new(Query, EmptyMutation, EmptySubscription);
    let handler = GraphqlHandler::new(schema).on_error("Bad Request");

    let port = env::var("PORT")
        .unwrap_or_else(|_| "8000".to_string())
        .parse::<u16>()?;

    // visit http://localhost:8000/graphql
    info!("Server listening on 0.0.0.0:{}", port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(|cfg| handler.register_actix("/graphql", cfg, None))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await?;

    Ok(())
}
