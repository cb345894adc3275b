// Shared fixtures for the web stack integration tests
#![allow(dead_code)]

use async_graphql::{Context, EmptyMutation, EmptySubscription, Object, Schema, SimpleObject};
use graphql_handler::{GraphqlHandler, RequestContext};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Number of times `hello` was resolved, i.e. engine executions of `{ hello }`.
#[derive(Clone, Default)]
pub struct Hits(Arc<AtomicUsize>);

impl Hits {
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(SimpleObject)]
pub struct RequestInfo {
    framework: String,
    method: String,
    path: String,
    user_agent: Option<String>,
    remote_addr: Option<String>,
}

pub struct Query;

#[Object]
impl Query {
    async fn hello(&self, ctx: &Context<'_>) -> &str {
        ctx.data_unchecked::<Hits>().0.fetch_add(1, Ordering::SeqCst);
        "Hello world"
    }

    /// Returns `value` after `delay_ms`, so concurrent requests overlap.
    async fn echo(&self, value: String, delay_ms: Option<i32>) -> String {
        if let Some(delay) = delay_ms {
            tokio::time::sleep(Duration::from_millis(delay.max(0) as u64)).await;
        }
        value
    }

    async fn request(&self, ctx: &Context<'_>) -> async_graphql::Result<RequestInfo> {
        let request = ctx.data::<RequestContext>()?;
        Ok(RequestInfo {
            framework: request.framework().to_string(),
            method: request.method().to_string(),
            path: request.uri().path().to_string(),
            user_agent: request.header("user-agent").map(str::to_owned),
            remote_addr: request.remote_addr().map(|addr| addr.to_string()),
        })
    }
}

pub type TestSchema = Schema<Query, EmptyMutation, EmptySubscription>;

pub fn create_test_handler() -> (GraphqlHandler<TestSchema>, Hits) {
    let hits = Hits::default();
    let schema = Schema::build(Query, EmptyMutation, EmptySubscription)
        .data(hits.clone())
        .finish();
    (GraphqlHandler::new(schema), hits)
}

pub const HELLO_QUERY: &str = r#"{"query":"{ hello }"}"#;

pub fn hello_response() -> Value {
    json!({ "data": { "hello": "Hello world" } })
}

pub fn echo_request(value: &str, delay_ms: i32) -> String {
    json!({
        "query": "query Echo($value: String!, $delay: Int) { echo(value: $value, delayMs: $delay) }",
        "operationName": "Echo",
        "variables": { "value": value, "delay": delay_ms }
    })
    .to_string()
}

/// `{ hello }` padded with an unused variable to roughly `size` bytes.
pub fn padded_hello_request(size: usize) -> String {
    json!({
        "query": "{ hello }",
        "variables": { "blob": "x".repeat(size) }
    })
    .to_string()
}
