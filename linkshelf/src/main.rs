use axum::http::{header, HeaderValue, Method};
use linkshelf::api;
use linkshelf::config::{Config, StoreBackend};
use linkshelf::store;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn load_env_file() {
    let cwd = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            tracing::warn!(error = %e, "Could not determine current directory for .env lookup");
            return;
        }
    };

    let mut current = cwd.clone();
    loop {
        let candidate = current.join(".env");
        if candidate.exists() {
            match dotenvy::from_path(&candidate) {
                Ok(_) => {
                    tracing::info!(path = %candidate.display(), "Loaded environment from .env");
                }
                Err(e) => {
                    tracing::warn!(
                        path = %candidate.display(),
                        error = %e,
                        "Failed to load .env file"
                    );
                }
            }
            return;
        }

        if !current.pop() {
            break;
        }
    }

    tracing::info!(
        cwd = %cwd.display(),
        "No .env file found in current directory or ancestors; using process environment only"
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "linkshelf=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Credentials are read here but only checked when a request needs them.
    load_env_file();
    let config = Config::from_env()?;
    tracing::info!(
        port = config.port,
        store = ?config.store,
        sheet_name = %config.sheet.sheet_name,
        "Starting Linkshelf API server"
    );
    if config.store == StoreBackend::Memory {
        tracing::warn!("Using in-memory row store; links are lost on restart");
    }

    let connector = store::connector_for(&config)?;
    let api_state = api::ApiState::new(connector);

    // dx serve origins for UI development
    let allowed_origins = [
        "http://localhost:3000",
        "http://127.0.0.1:3000",
        "http://localhost:8081",
        "http://127.0.0.1:8081",
    ]
    .into_iter()
    .map(HeaderValue::from_static)
    .collect::<Vec<_>>();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(std::time::Duration::from_secs(3600));

    let mut app = api::router().with_state(api_state);
    if config.ui_dist.is_dir() {
        tracing::info!(path = %config.ui_dist.display(), "serving web UI assets");
        app = app.fallback_service(ServeDir::new(&config.ui_dist));
    } else {
        tracing::warn!(
            path = %config.ui_dist.display(),
            "web UI dist not found; serving API only"
        );
    }
    let app = app.layer(cors).layer(TraceLayer::new_for_http());

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("listening on http://{addr}");
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
