use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::{HeaderValue, Request},
    middleware::{Next, from_fn},
    response::Json,
    routing::{get, post},
};
use movie_flow::{
    Config, Credential, GeminiClient, Generator, ImdbPosterProvider, MoviePipeline, SearchQuery,
};
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{Instrument, error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

const EMPTY_TITLE_WARNING: &str =
    "⚠️ Por favor, ingresa el nombre de una película para comenzar la búsqueda.";

#[derive(Clone)]
struct AppState {
    pipeline: Arc<MoviePipeline>,
}

#[derive(Debug, Deserialize)]
struct SearchRequest {
    title: String,
}

#[derive(Debug, Serialize)]
struct SearchResponse {
    /// HTML fragment for the rendering shell; on failure this is the
    /// user-facing message, never a blank body.
    html: String,
    structured: bool,
    status: String,
}

/// Initialize structured tracing based on environment variables
fn init_tracing() {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "movie_guide_service=debug,movie_flow=debug,tower_http=debug".into());

    match log_format.as_str() {
        "pretty" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_target(true)
                        .with_level(true),
                )
                .init();
        }
    }
}

/// Middleware to add a correlation ID to all requests
async fn correlation_id_middleware(
    mut request: Request<axum::body::Body>,
    next: Next,
) -> axum::response::Response {
    let correlation_id = Uuid::new_v4().to_string();

    request.headers_mut().insert(
        "x-correlation-id",
        HeaderValue::from_str(&correlation_id).unwrap(),
    );

    let span = tracing::info_span!("http_request", correlation_id = %correlation_id);
    next.run(request).instrument(span).await
}

async fn health_check() -> &'static str {
    "OK"
}

async fn search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Json<SearchResponse> {
    // An explicit submit with no title never reaches the pipeline.
    let Some(query) = SearchQuery::new(&request.title) else {
        return Json(SearchResponse {
            html: EMPTY_TITLE_WARNING.to_string(),
            structured: false,
            status: "empty_query".to_string(),
        });
    };

    info!(title = %query, "processing search request");

    match state.pipeline.run(&query).await {
        Ok(payload) => Json(SearchResponse {
            html: payload.html,
            structured: payload.structured,
            status: "ok".to_string(),
        }),
        Err(e) => {
            error!(title = %query, error = %e, "pipeline failed");
            Json(SearchResponse {
                html: e.user_message(),
                structured: false,
                status: "error".to_string(),
            })
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = Config::from_env();

    // A missing credential disables generation but not the server: every
    // search then renders the service-unavailable message.
    let generator: Option<Arc<dyn Generator>> = match Credential::from_env() {
        Ok(credential) => Some(Arc::new(GeminiClient::new(credential))),
        Err(e) => {
            warn!(error = %e, "generation disabled, serving without it");
            None
        }
    };

    let pipeline = Arc::new(MoviePipeline::new(
        generator,
        Arc::new(ImdbPosterProvider::new()),
    ));
    info!(
        generation_available = pipeline.generation_available(),
        "pipeline ready"
    );

    let state = AppState { pipeline };

    let app = Router::new()
        .route("/health", get(health_check))
        .route("/search", post(search))
        .with_state(state)
        .layer(from_fn(correlation_id_middleware))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        );

    let addr = format!("{}:{}", config.web_host, config.web_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Server running on http://{addr}");
    info!("Available endpoints:");
    info!("  GET  /health  - Health check");
    info!("  POST /search  - Generate movie information");

    axum::serve(listener, app).await?;

    Ok(())
}
