//! Artistly - discover, book and onboard performing artists
//!
//! Serves the listing, onboarding wizard, manager dashboard and account
//! routes over a JSON API. All data is held in memory.

mod api;
mod config;
mod core;
mod error;
mod models;
mod state;
mod stores;
mod utils;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// How often expired sessions and idle wizards are swept from memory
const SWEEP_INTERVAL_SECS: u64 = 600;

/// Artistly - performing artist booking service
#[derive(Parser, Debug)]
#[command(name = "artistly")]
#[command(version)]
#[command(about = "Discover, book and onboard performing artists")]
struct Args {
    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 3000)]
    port: u16,

    /// Enable debug mode
    #[arg(long)]
    debug: bool,

    /// Path to config directory
    #[arg(long)]
    config: Option<PathBuf>,
}

#[actix_web::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::new(format!("{},actix_server=warn", log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();

    info!("Artistly v{} starting...", env!("CARGO_PKG_VERSION"));

    let paths = config::Paths::init(args.config)?;
    info!("Config directory: {:?}", paths.config_dir());

    let app_config = config::AppConfig::load_from(&paths.settings_path())?;
    start_artistly(args.host, args.port, app_config).await
}

/// Any origin, without credentials. Cross-origin browser callers cannot ride
/// the session cookie and must send a bearer token.
fn cors_policy(max_age: usize) -> actix_cors::Cors {
    actix_cors::Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .max_age(max_age)
}

async fn start_artistly(host: String, port: u16, app_config: config::AppConfig) -> Result<()> {
    use actix_web::{middleware, web, App, HttpServer};

    let cors_max_age = app_config.cors_max_age;

    info!("Loading catalogue...");
    let state = web::Data::new(state::AppState::new(app_config)?);
    info!(
        "Loaded {} artists and {} submissions",
        state.artists.count(),
        state.submissions.all().len()
    );

    // Start background tasks
    info!("Starting background tasks...");
    let sweeper = state.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(SWEEP_INTERVAL_SECS));
        loop {
            interval.tick().await;
            let sessions = sweeper.sessions.purge_expired();
            let wizards = sweeper.wizards.purge_stale(sweeper.config.wizard_ttl_secs);
            if sessions + wizards > 0 {
                tracing::debug!(
                    "Purged {} expired sessions and {} idle onboarding wizards",
                    sessions,
                    wizards
                );
            }
        }
    });

    let addr = format!("{}:{}", host, port);
    info!("Server listening on http://{}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(cors_policy(cors_max_age))
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(api::configure)
    })
    .bind(addr)?
    .run()
    .await?;

    Ok(())
}
