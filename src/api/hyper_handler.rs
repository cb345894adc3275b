use async_graphql::Executor;
use bytes::Bytes;
use http::{header, HeaderValue, Method, Request, Response, StatusCode};
use http_body::Body;
use http_body_util::{BodyExt, Full};
use hyper::service::Service;
use serde::Serialize;
use std::convert::Infallible;
use std::fmt;
use std::future::Future;
use std::net::SocketAddr;
use std::pin::Pin;
use std::sync::Arc;
use tracing::{error, info};

use crate::config::RegisterOption;
use crate::graphiql::graphiql;
use crate::handler::GraphqlHandler;
use crate::models::{Framework, RequestContext};

/// A hyper service answering on a single path.
///
/// hyper has no router, so this service is the whole application: any
/// other path is a 404 and any method other than `POST` (or `GET` with the
/// explorer enabled) is a 405. Wrap it in your own dispatch to serve more.
#[derive(Clone)]
pub struct GraphqlService<E> {
    handler: Arc<GraphqlHandler<E>>,
    path: Arc<str>,
    page: Option<Bytes>,
    remote_addr: Option<SocketAddr>,
}

impl<E: Executor> GraphqlHandler<E> {
    /// Build a hyper service with GraphQL mounted on `path`: `POST`
    /// executes, `GET` serves GraphiQL unless disabled.
    pub fn hyper_service(&self, path: &str, opt: Option<RegisterOption>) -> GraphqlService<E> {
        let opt = RegisterOption::resolve(opt);
        info!(path, graphiql = opt.enable_graphiql, "Registered GraphQL endpoint on hyper");

        GraphqlService {
            handler: Arc::new(self.clone()),
            path: Arc::from(path),
            page: opt.enable_graphiql.then(|| Bytes::from(graphiql(path))),
            remote_addr: None,
        }
    }
}

impl<E: Executor> GraphqlService<E> {
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Per-connection copy that reports `addr` as the peer to resolvers.
    pub fn with_remote_addr(&self, addr: SocketAddr) -> Self {
        Self {
            remote_addr: Some(addr),
            ..self.clone()
        }
    }

    pub async fn dispatch<B>(&self, req: Request<B>) -> Response<Full<Bytes>>
    where
        B: Body,
        B::Error: fmt::Display,
    {
        if req.uri().path() != &*self.path {
            return empty(StatusCode::NOT_FOUND);
        }

        let method = req.method().clone();
        match (&method, &self.page) {
            (&Method::POST, _) => self.graphql(req).await,
            (&Method::GET, Some(page)) => {
                let mut response = Response::new(Full::new(page.clone()));
                response.headers_mut().insert(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("text/html; charset=utf-8"),
                );
                response
            }
            _ => {
                let mut response = empty(StatusCode::METHOD_NOT_ALLOWED);
                let allow = if self.page.is_some() { "GET, POST" } else { "POST" };
                response
                    .headers_mut()
                    .insert(header::ALLOW, HeaderValue::from_static(allow));
                response
            }
        }
    }

    async fn graphql<B>(&self, req: Request<B>) -> Response<Full<Bytes>>
    where
        B: Body,
        B::Error: fmt::Display,
    {
        let (parts, body) = req.into_parts();

        let body = body
            .collect()
            .await
            .map(|collected| collected.to_bytes())
            .map_err(|e| e.to_string());

        let result = match body {
            Ok(body) => {
                let ctx = RequestContext::new(Framework::Hyper, parts)
                    .with_remote_addr(self.remote_addr);
                self.handler.handle(ctx, &body).await
            }
            Err(detail) => Err(self.handler.unreadable_body(detail)),
        };

        match result {
            Ok(response) => json(StatusCode::OK, &response),
            Err(e) => json(e.status(), &e.to_response_body()),
        }
    }
}

impl<E, B> Service<Request<B>> for GraphqlService<E>
where
    E: Executor,
    B: Body + Send + 'static,
    B::Data: Send,
    B::Error: fmt::Display,
{
    type Response = Response<Full<Bytes>>;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn call(&self, req: Request<B>) -> Self::Future {
        let service = self.clone();
        Box::pin(async move { Ok(service.dispatch(req).await) })
    }
}

fn empty(status: StatusCode) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::default());
    *response.status_mut() = status;
    response
}

fn json<T: Serialize>(status: StatusCode, value: &T) -> Response<Full<Bytes>> {
    match serde_json::to_vec(value) {
        Ok(body) => {
            let mut response = Response::new(Full::new(Bytes::from(body)));
            *response.status_mut() = status;
            response.headers_mut().insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            );
            response
        }
        Err(e) => {
            error!("Failed to serialize GraphQL response: {}", e);
            empty(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
