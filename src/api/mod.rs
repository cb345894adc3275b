// HTTP adapters - thin layer between a web stack and GraphqlHandler
// Each adapter only deals with its stack's concerns:
// 1. Collect the request metadata into a RequestContext
// 2. Read the raw body
// 3. Call GraphqlHandler::handle
// 4. Turn the result into the stack's response type

pub mod error;

#[cfg(feature = "actix")]
pub mod actix_handler;
#[cfg(feature = "axum")]
pub mod axum_handler;
#[cfg(feature = "hyper")]
pub mod hyper_handler;
