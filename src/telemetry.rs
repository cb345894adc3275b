use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_FILTER: &str = "info,hyper=warn,tower=warn,h2=error,actix_server=warn";

/// Install the global JSON log subscriber used by the bundled servers.
///
/// `RUST_LOG` overrides the default filter. Set `LOG_FORMAT=pretty` for
/// human-readable output during local development.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let format = std::env::var("LOG_FORMAT").ok();

    let registry = tracing_subscriber::registry().with(filter);
    if is_pretty(format.as_deref()) {
        registry.with(fmt::layer().with_target(false)).init();
    } else {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(false)
                    .with_span_events(fmt::format::FmtSpan::CLOSE),
            )
            .init();
    }
}

fn is_pretty(format: Option<&str>) -> bool {
    format.is_some_and(|format| format.eq_ignore_ascii_case("pretty"))
}
