use async_graphql::{Executor, Response};
use tracing::debug;

use crate::api::error::{HandlerError, HandlerResult};
use crate::config::HandlerConfig;
use crate::models::{Params, RequestContext};

/// Adapts an `async-graphql` executor to HTTP.
///
/// The executor is shared read-only between requests; `Schema` is already
/// reference counted, so cloning a handler is cheap.
#[derive(Clone)]
pub struct GraphqlHandler<E> {
    executor: E,
    config: HandlerConfig,
}

impl<E: Executor> GraphqlHandler<E> {
    pub fn new(executor: E) -> Self {
        Self {
            executor,
            config: HandlerConfig::default(),
        }
    }

    pub fn with_config(mut self, config: HandlerConfig) -> Self {
        self.config = config;
        self
    }

    /// Message sent with every 400 response.
    pub fn on_error(mut self, message: impl Into<String>) -> Self {
        self.config.bad_request_message = message.into();
        self
    }

    pub fn config(&self) -> &HandlerConfig {
        &self.config
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    pub fn decode(&self, body: &[u8]) -> HandlerResult<Params> {
        Params::from_slice(body).map_err(|source| HandlerError::InvalidBody {
            message: self.config.bad_request_message.clone(),
            source,
        })
    }

    /// One engine call with `ctx` attached as request data.
    pub async fn execute(&self, ctx: RequestContext, params: Params) -> Response {
        let request = params.into_request().data(ctx);
        self.executor.execute(request).await
    }

    /// Decode `body` and execute it.
    ///
    /// GraphQL errors are part of the returned response and are not turned
    /// into `Err`; only an undecodable body is.
    #[tracing::instrument(
        skip_all,
        fields(framework = %ctx.framework(), body_len = body.len())
    )]
    pub async fn handle(&self, ctx: RequestContext, body: &[u8]) -> HandlerResult<Response> {
        let params = match self.decode(body) {
            Ok(params) => params,
            Err(e) => {
                if let HandlerError::InvalidBody { source, .. } = &e {
                    debug!(error = %source, "Rejecting undecodable GraphQL request body");
                }
                return Err(e);
            }
        };

        let response = self.execute(ctx, params).await;
        debug!(errors = response.errors.len(), "GraphQL request executed");
        Ok(response)
    }

    /// Error for a body that could not be read off the connection.
    #[cfg(feature = "hyper")]
    pub(crate) fn unreadable_body(&self, detail: impl Into<String>) -> HandlerError {
        let detail = detail.into();
        debug!(error = %detail, "Rejecting unreadable GraphQL request body");
        HandlerError::UnreadableBody {
            message: self.config.bad_request_message.clone(),
            detail,
        }
    }
}
