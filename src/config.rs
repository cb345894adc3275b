//! Registration and handler options.
//!
//! Both are plain values read once when routes are registered; nothing here
//! is consulted again per request.

/// Message embedded in 400 responses when no other is configured.
pub const DEFAULT_BAD_REQUEST_MESSAGE: &str = "BadRequest";

/// Options for the `register_*` functions.
///
/// Passing `None` to a `register_*` function is the same as passing
/// `Some(RegisterOption::default())`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterOption {
    /// Serve the GraphiQL explorer on `GET <path>`.
    pub enable_graphiql: bool,
}

impl Default for RegisterOption {
    fn default() -> Self {
        Self {
            enable_graphiql: true,
        }
    }
}

impl RegisterOption {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enable_graphiql(mut self, enable: bool) -> Self {
        self.enable_graphiql = enable;
        self
    }

    pub(crate) fn resolve(opt: Option<RegisterOption>) -> RegisterOption {
        opt.unwrap_or_default()
    }
}

/// Per-handler settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerConfig {
    /// Message returned to clients whose body can't be decoded. The decode
    /// error itself is only logged.
    pub bad_request_message: String,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            bad_request_message: DEFAULT_BAD_REQUEST_MESSAGE.to_string(),
        }
    }
}
