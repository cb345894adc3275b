use actix_web::{
    http::header::ContentType,
    web::{self, Bytes},
    HttpRequest, HttpResponse,
};
use async_graphql::Executor;
use http::{HeaderMap, HeaderName, HeaderValue, Method, Uri, Version};
use std::sync::Arc;
use tracing::info;

use crate::api::error::HandlerResult;
use crate::config::RegisterOption;
use crate::graphiql::graphiql;
use crate::handler::GraphqlHandler;
use crate::models::{Framework, RequestContext};

impl<E: Executor> GraphqlHandler<E> {
    /// `POST` route that executes GraphQL requests.
    pub fn actix_route(&self) -> actix_web::Route {
        let handler = Arc::new(self.clone());
        web::post().to(move |req: HttpRequest, body: Bytes| {
            let handler = Arc::clone(&handler);
            async move { actix_graphql(&handler, req, body).await }
        })
    }

    /// Mount GraphQL on `path`: `POST` executes, `GET` serves GraphiQL
    /// unless disabled.
    ///
    /// Meant for `App::configure`:
    ///
    /// ```rust,ignore
    /// App::new().configure(|cfg| handler.register_actix("/graphql", cfg, None))
    /// ```
    ///
    /// Bodies are read with actix's `Bytes` extractor, which caps them at
    /// 256 KiB and answers 413 beyond that. Raise the cap with
    /// `App::new().app_data(web::PayloadConfig::new(limit))`.
    pub fn register_actix(
        &self,
        path: &str,
        cfg: &mut web::ServiceConfig,
        opt: Option<RegisterOption>,
    ) {
        let opt = RegisterOption::resolve(opt);
        let mut resource = web::resource(path).route(self.actix_route());

        if opt.enable_graphiql {
            let page = Bytes::from(graphiql(path));
            resource = resource.route(web::get().to(move || {
                let page = page.clone();
                async move {
                    HttpResponse::Ok()
                        .content_type(ContentType::html())
                        .body(page)
                }
            }));
        }

        info!(path, graphiql = opt.enable_graphiql, "Registered GraphQL endpoint on actix-web");
        cfg.service(resource);
    }
}

async fn actix_graphql<E: Executor>(
    handler: &GraphqlHandler<E>,
    req: HttpRequest,
    body: Bytes,
) -> HandlerResult<HttpResponse> {
    let response = handler.handle(request_context(&req), &body).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// Copy what resolvers may need out of the `HttpRequest`.
///
/// `HttpRequest` is `!Send` and actix-web 4 still uses http 0.2 types, so
/// nothing can be carried over by reference. Headers that don't survive the
/// conversion are dropped.
pub fn request_context(req: &HttpRequest) -> RequestContext {
    let (mut parts, ()) = http::Request::new(()).into_parts();

    parts.method = Method::from_bytes(req.method().as_str().as_bytes()).unwrap_or_default();
    parts.uri = req
        .uri()
        .to_string()
        .parse::<Uri>()
        .unwrap_or_default();
    parts.version = convert_version(req.version());
    parts.headers = convert_headers(req);

    RequestContext::new(Framework::ActixWeb, parts).with_remote_addr(req.peer_addr())
}

fn convert_version(version: actix_web::http::Version) -> Version {
    use actix_web::http::Version as ActixVersion;

    match version {
        ActixVersion::HTTP_09 => Version::HTTP_09,
        ActixVersion::HTTP_10 => Version::HTTP_10,
        ActixVersion::HTTP_2 => Version::HTTP_2,
        ActixVersion::HTTP_3 => Version::HTTP_3,
        _ => Version::HTTP_11,
    }
}

fn convert_headers(req: &HttpRequest) -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(req.headers().len());
    for (name, value) in req.headers().iter() {
        let name = HeaderName::from_bytes(name.as_str().as_bytes());
        let value = HeaderValue::from_bytes(value.as_bytes());
        if let (Ok(name), Ok(value)) = (name, value) {
            headers.append(name, value);
        }
    }
    headers
}
