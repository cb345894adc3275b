//! Serve an `async-graphql` schema over HTTP.
//!
//! A [`GraphqlHandler`] wraps any [`async_graphql::Executor`] (normally a
//! `Schema`) and mounts it under a single path on one of the supported web
//! stacks:
//!
//! - `POST <path>` decodes `{"query", "operationName", "variables"}` and
//!   answers with the engine's JSON response.
//! - `GET <path>` serves a GraphiQL page pointed at the same path, unless
//!   disabled through [`RegisterOption`].
//!
//! ```rust,ignore
//! use async_graphql::{EmptyMutation, EmptySubscription, Object, Schema};
//! use graphql_handler::GraphqlHandler;
//!
//! struct Query;
//!
//! #[Object]
//! impl Query {
//!     async fn hello(&self) -> &str {
//!         "Hello world"
//!     }
//! }
//!
//! let schema = Schema::new(Query, EmptyMutation, EmptySubscription);
//! let handler = GraphqlHandler::new(schema).on_error("Bad Request");
//! let app = handler.register_axum("/graphql", axum::Router::new(), None);
//! ```

pub mod api;
pub mod config;
pub mod graphiql;
pub mod handler;
pub mod models;
pub mod telemetry;

// Re-export commonly used types
pub use api::error::{HandlerError, HandlerResult};
pub use config::{HandlerConfig, RegisterOption};
pub use graphiql::graphiql;
pub use handler::GraphqlHandler;
pub use models::{Framework, Params, RequestContext};

#[cfg(feature = "hyper")]
pub use api::hyper_handler::GraphqlService;
