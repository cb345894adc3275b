use async_graphql::{Executor, Response};
use axum::{
    body::Bytes,
    extract::{ConnectInfo, FromRequest, Request},
    response::{Html, IntoResponse},
    routing::{post, MethodRouter},
    Json, Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, info};

use crate::config::RegisterOption;
use crate::graphiql::graphiql;
use crate::handler::GraphqlHandler;
use crate::models::{Framework, RequestContext};

impl<E: Executor> GraphqlHandler<E> {
    /// `POST` route that executes GraphQL requests.
    ///
    /// Mount it yourself when [`register_axum`](Self::register_axum) doesn't
    /// fit, e.g. `.route("/graphql", handler.axum_route().get(my_page))`.
    pub fn axum_route<S>(&self) -> MethodRouter<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        let handler = Arc::new(self.clone());
        post(move |request: Request| {
            let handler = Arc::clone(&handler);
            async move { axum_graphql(&handler, request).await }
        })
    }

    /// Mount GraphQL on `path`: `POST` executes, `GET` serves GraphiQL
    /// unless disabled.
    ///
    /// The body is read under axum's `DefaultBodyLimit` (2 MiB unless the
    /// router layers its own), and an oversized body is answered with 413.
    pub fn register_axum<S>(
        &self,
        path: &str,
        router: Router<S>,
        opt: Option<RegisterOption>,
    ) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        let opt = RegisterOption::resolve(opt);
        let mut route = self.axum_route();

        if opt.enable_graphiql {
            let page = Bytes::from(graphiql(path));
            route = route.get(move || {
                let page = page.clone();
                async move { Html(page) }
            });
        }

        info!(path, graphiql = opt.enable_graphiql, "Registered GraphQL endpoint on axum");
        router.route(path, route)
    }
}

async fn axum_graphql<E: Executor>(
    handler: &GraphqlHandler<E>,
    request: Request,
) -> axum::response::Response {
    let (parts, body) = request.into_parts();

    // Body limits travel in the request extensions.
    let mut body_request = Request::new(body);
    *body_request.extensions_mut() = parts.extensions.clone();
    let body = match <Bytes as FromRequest<()>>::from_request(body_request, &()).await {
        Ok(body) => body,
        Err(rejection) => {
            debug!(error = %rejection, "Rejecting unreadable GraphQL request body");
            return rejection.into_response();
        }
    };

    let remote_addr = parts
        .extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);
    let ctx = RequestContext::new(Framework::Axum, parts).with_remote_addr(remote_addr);

    match handler.handle(ctx, &body).await {
        Ok(response) => Json(response).into_response(),
        Err(e) => e.into_response(),
    }
}
