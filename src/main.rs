use axum::{Extension, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

mod error;
mod gateway;
mod handlers;
mod hf_client;
mod middleware;
mod models;
mod scenes;
mod workflow;

use gateway::InferenceGateway;
use hf_client::HuggingFaceClient;
use workflow::sessions::SessionManager;

// AppState holds the inference gateway and the workflow session registry.
pub struct AppState {
    pub gateway: Arc<InferenceGateway>,
    pub sessions: SessionManager,
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    init_logging().expect("Failed to initialize logging");

    // The credential is re-read on every provider call; this check is
    // informational only, never a startup failure.
    if std::env::var("HUGGINGFACE_API_KEY").map(|key| !key.is_empty()).unwrap_or(false) {
        tracing::info!("Hugging Face credential detected");
    } else {
        tracing::warn!("HUGGINGFACE_API_KEY not set. Script generation uses the public demo token; images and narration take their local fallbacks.");
    }

    let backend = Arc::new(HuggingFaceClient::new());
    let gateway = Arc::new(InferenceGateway::new(backend));
    let sessions = SessionManager::new(gateway.clone());

    let shared_state = Arc::new(AppState { gateway, sessions });

    // Build our application with all routes and shared state
    let app = Router::new()
        .merge(handlers::ui::ui_routes())
        .merge(handlers::generate::generate_routes())
        .merge(handlers::workflow::workflow_routes())
        .route("/api/status", axum::routing::get(api_status))
        .layer(axum::middleware::from_fn(middleware::logging::request_logging_middleware))
        .layer(CorsLayer::permissive())
        .layer(Extension(shared_state.clone()));

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind server address");
    tracing::info!("listening on {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.unwrap();
}

// Production-grade logging configuration
fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, fmt, Layer};

    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cfg!(debug_assertions) {
            "debug,shorts_studio=trace,reqwest=info,hyper=info,tower=info".to_string()
        } else {
            "info,shorts_studio=info,reqwest=warn,hyper=warn,tower=warn".to_string()
        }
    });

    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&log_level))?;

    // JSON logging for production log aggregation, human-readable otherwise
    let fmt_layer = if std::env::var("LOG_FORMAT").as_deref() == Ok("json") {
        fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .with_target(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    tracing::info!("🎬 Shorts Studio starting up...");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Build mode: {}",
        if cfg!(debug_assertions) { "development" } else { "production" }
    );

    Ok(())
}

// API Status endpoint
async fn api_status(
    Extension(state): Extension<Arc<AppState>>,
) -> axum::response::Json<serde_json::Value> {
    use serde_json::json;

    let hf_status = if std::env::var("HUGGINGFACE_API_KEY")
        .map(|key| !key.is_empty())
        .unwrap_or(false)
    {
        "configured"
    } else {
        "not_configured"
    };

    axum::response::Json(json!({
        "status": "operational",
        "version": env!("CARGO_PKG_VERSION"),
        "services": {
            "huggingface_inference": hf_status,
        },
        "workflow": {
            "active_sessions": state.sessions.active_count().await,
        },
        "endpoints": {
            "ui": "/",
            "status": "/api/status",
            "generate": "/api/generate-script, /api/generate-images, /api/generate-audio, /api/generate-video",
            "workflow": "/api/workflow, /api/workflow/:id/{script,images,audio,video,reset}",
        }
    }))
}
