use std::net::SocketAddr;
use std::sync::Arc;

use api::auth::{hash_password, AuthConfig};
use api::routes::api_router;
use api::seed::seed_demo_data;
use api::state::AppState;
use api::store::HrStore;
use axum::http::{header, HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn, Level};

#[derive(Parser, Debug)]
#[command(name = "workforce-hub", version, about = "Workforce Hub HR server")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Run HTTP server
    Serve {
        #[arg(long, env = "BIND", default_value = "127.0.0.1:5000")]
        bind: String,
        /// Start with empty stores instead of the demo fixtures
        #[arg(long)]
        no_seed: bool,
    },
    /// Print an argon2 hash for the given password
    HashPassword { password: String },
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Serve { bind, no_seed } => run_server(bind, no_seed),
        Cmd::HashPassword { password } => {
            let hash = hash_password(&password)
                .map_err(|err| anyhow::anyhow!("hashing failed: {err}"))?;
            println!("{hash}");
            Ok(())
        }
    }
}

#[tokio::main]
async fn run_server(bind: String, no_seed: bool) -> anyhow::Result<()> {
    let auth = Arc::new(load_auth_config());
    let store = Arc::new(HrStore::new());
    if no_seed {
        warn!("starting with empty stores; every login will fail until users are created");
    } else {
        let seeded = seed_demo_data(&store)?;
        info!(users = seeded.users.len(), "demo data seeded");
    }

    let state = AppState::new(store, auth);
    let app = app_router(state);

    let addr: SocketAddr = bind.parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!("listening on http://{}", addr);
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .merge(api_router(state))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}

/// Session auth rides on a cookie, so CORS must name its origins and
/// allow credentials; a wildcard would be rejected by browsers.
fn cors_layer() -> CorsLayer {
    let origins = std::env::var("CORS_ALLOWED_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000".into())
        .split(',')
        .filter_map(|raw| raw.trim().parse::<HeaderValue>().ok())
        .collect::<Vec<_>>();
    CorsLayer::new()
        .allow_credentials(true)
        .allow_headers([header::CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_origin(AllowOrigin::list(origins))
}

fn load_auth_config() -> AuthConfig {
    let jwt_secret = match std::env::var("AUTH_SECRET") {
        Ok(secret) => secret,
        Err(_) => {
            warn!("AUTH_SECRET not set, using development secret");
            "dev-secret".into()
        }
    };
    let session_ttl_hours = std::env::var("SESSION_TTL_HOURS")
        .ok()
        .and_then(|v| v.parse::<i64>().ok())
        .unwrap_or(24);
    let cookie_secure = env_bool("COOKIE_SECURE", false);
    AuthConfig {
        jwt_secret,
        session_ttl_hours,
        cookie_secure,
    }
}

fn env_bool(var: &str, default: bool) -> bool {
    std::env::var(var)
        .ok()
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(default)
}

async fn shutdown_signal() {
    use tokio::signal;
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler")
    };
    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();
    tokio::select! { _ = ctrl_c => {}, _ = terminate => {}, }
}
