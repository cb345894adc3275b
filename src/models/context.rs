use http::request::Parts;
use http::{Extensions, HeaderMap, Method, Uri, Version};
use std::fmt;
use std::net::SocketAddr;

/// Web stack that accepted the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Framework {
    Axum,
    ActixWeb,
    Hyper,
}

impl Framework {
    pub fn as_str(&self) -> &'static str {
        match self {
            Framework::Axum => "axum",
            Framework::ActixWeb => "actix-web",
            Framework::Hyper => "hyper",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The originating HTTP request, handed to resolvers as schema-request data.
///
/// Every execution gets exactly one of these. Resolvers read it with
/// `ctx.data::<RequestContext>()`:
///
/// ```rust,ignore
/// #[Object]
/// impl Query {
///     async fn user_agent(&self, ctx: &Context<'_>) -> Option<String> {
///         let request = ctx.data::<RequestContext>().ok()?;
///         request.header("user-agent").map(str::to_owned)
///     }
/// }
/// ```
///
/// The body is not kept; it has already been decoded into [`Params`](super::Params).
#[derive(Debug)]
pub struct RequestContext {
    framework: Framework,
    parts: Parts,
    remote_addr: Option<SocketAddr>,
}

impl RequestContext {
    pub fn new(framework: Framework, parts: Parts) -> Self {
        Self {
            framework,
            parts,
            remote_addr: None,
        }
    }

    pub fn with_remote_addr(mut self, remote_addr: Option<SocketAddr>) -> Self {
        self.remote_addr = remote_addr;
        self
    }

    pub fn framework(&self) -> Framework {
        self.framework
    }

    pub fn method(&self) -> &Method {
        &self.parts.method
    }

    pub fn uri(&self) -> &Uri {
        &self.parts.uri
    }

    pub fn version(&self) -> Version {
        self.parts.version
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.parts.headers
    }

    /// Header value as a string; `None` when missing or not visible ASCII.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.parts.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Request extensions. Populated by axum and hyper middleware; always
    /// empty for actix-web.
    pub fn extensions(&self) -> &Extensions {
        &self.parts.extensions
    }

    pub fn remote_addr(&self) -> Option<SocketAddr> {
        self.remote_addr
    }

    pub fn parts(&self) -> &Parts {
        &self.parts
    }

    pub fn into_parts(self) -> Parts {
        self.parts
    }
}
