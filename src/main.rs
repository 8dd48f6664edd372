//! Shiplabel: a shipping label print service.
//!
//! This is the application entry point. It initializes tracing, loads
//! configuration, compiles the label templates, builds the configured label
//! renderer, sets up the Axum router and starts the HTTP server.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shiplabel::config::{AppConfig, DEFAULT_LOG_FILTER, PORT_ENV_VAR};
use shiplabel::label::LabelVariant;
use shiplabel::routes::create_router;
use shiplabel::server::start_server;
use shiplabel::state::AppState;
use shiplabel::templates::init_templates;

/// Shiplabel: printable shipping labels over HTTP
#[derive(Parser, Debug)]
#[command(name = "shiplabel", version, about)]
struct Args {
    /// Path to configuration file (defaults to config/default.toml when present)
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "shiplabel=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Label style served by /print (overrides label.variant)
    #[arg(long, value_enum)]
    variant: Option<LabelVariant>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration before tracing so the log format can be honored
    let mut config = AppConfig::load_or_default(args.config.as_deref())?;
    config.apply_port_override(std::env::var(PORT_ENV_VAR).ok())?;
    if let Some(variant) = args.variant {
        config.label.variant = variant;
    }

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    if config.logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        variant = %config.label.variant,
        max_copies = config.label.max_copies,
        "Loaded configuration"
    );

    let tera = init_templates()?;
    tracing::info!("Initialized templates");

    // Builds the renderer; the branded variant reads its logo here, once
    let state = AppState::new(config.clone(), tera);

    let app = create_router(state);
    start_server(app, &config).await?;

    Ok(())
}
