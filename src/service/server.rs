//! Web server setup using Axum framework

use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::ard::{Ard, TableArd};
use crate::service::{
    config::{parse_size, ServiceConfig},
    handlers,
    types::{ErrorResponse, ServiceError},
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Allele-nomenclature backend, shared by every request
    pub ard: Arc<dyn Ard>,
    /// Service configuration
    pub config: Arc<ServiceConfig>,
    /// Process start time
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    /// Create state around an existing backend
    pub fn new(ard: Arc<dyn Ard>, config: ServiceConfig) -> Self {
        Self {
            ard,
            config: Arc::new(config),
            started_at: chrono::Utc::now(),
        }
    }
}

/// Load the backend described by the configuration
///
/// Without a configured tables path, the built-in sample dataset is used.
pub fn load_ard(config: &ServiceConfig) -> Result<Arc<dyn Ard>, ServiceError> {
    match &config.data.tables_path {
        Some(path) => {
            tracing::info!("Loading ARD tables from {}", path.display());
            let ard = TableArd::from_json(path)?;
            tracing::info!(
                "Loaded {} alleles and {} MAC codes",
                ard.allele_count(),
                ard.mac_count()
            );
            Ok(Arc::new(ard))
        }
        None => {
            tracing::warn!("No ARD tables configured. Using built-in sample data.");
            Ok(Arc::new(TableArd::with_test_data()))
        }
    }
}

/// Create the Axum application with all routes and middleware
pub fn create_app(
    config: ServiceConfig,
    ard: Arc<dyn Ard>,
) -> Result<(Router, AppState), ServiceError> {
    let max_size = parse_size(&config.server.max_request_size)
        .map_err(|e| ServiceError::ConfigError(format!("Invalid max_request_size: {}", e)))?;

    let state = AppState::new(ard, config);

    let app = Router::new()
        // Gateway endpoints
        .route("/validate", post(handlers::validate::validate_gl))
        .route("/reduce", post(handlers::reduce::reduce_gl))
        .route("/redux", post(handlers::reduce::reduce_gl))
        .route("/mac/{allele_code}", get(handlers::mac::expand_mac))
        // Service endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/info", get(handlers::info::service_info))
        .fallback(handle_404)
        .method_not_allowed_fallback(handle_405)
        .with_state(state.clone())
        .layer(DefaultBodyLimit::max(max_size));

    Ok((app, state))
}

/// Handle 404 errors
async fn handle_404() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::Message {
            message: "Endpoint not found".to_string(),
        }),
    )
}

/// Handle requests with a method the route does not accept
async fn handle_405() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse::Message {
            message: "Method not allowed".to_string(),
        }),
    )
}
