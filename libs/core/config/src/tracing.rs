use crate::Environment;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install color-eyre report hooks. Call first in `main()`; repeated calls are no-ops.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

fn default_directives(environment: &Environment) -> &'static str {
    match environment {
        Environment::Production => "info,tower_http=info,sea_orm=warn,sqlx=warn",
        Environment::Development => "debug,tower_http=debug,sea_orm=info,sqlx=warn",
    }
}

/// Installs the global subscriber.
///
/// Production writes flattened JSON lines, development pretty multi-line
/// events. `RUST_LOG` replaces the default directives. Span traces are
/// captured for eyre reports through `tracing_error::ErrorLayer`.
pub fn init_tracing(environment: &Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(environment)));

    let production = environment.is_production();
    let json = production.then(|| {
        fmt::layer()
            .json()
            .with_target(false)
            .with_current_span(true)
            .flatten_event(true)
    });
    let pretty = (!production).then(|| {
        fmt::layer()
            .pretty()
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
    });

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(pretty)
        .with(tracing_error::ErrorLayer::default())
        .try_init();

    match result {
        Ok(()) => info!(?environment, "Tracing initialized"),
        Err(_) => debug!("Tracing already initialized"),
    }
}
