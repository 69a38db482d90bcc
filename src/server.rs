use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::error::ApiError;
use crate::models::{Prompt, PromptId};
use crate::storage::PromptStorage;

/// Shared state injected into every handler through `web::Data`.
#[derive(Clone)]
pub struct AppState {
    storage: Arc<dyn PromptStorage>,
}

impl AppState {
    pub fn new(storage: Arc<dyn PromptStorage>) -> Self {
        Self { storage }
    }
}

/// Response body for prompts created under a generated id.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedPrompt {
    #[serde(rename = "promptId")]
    pub prompt_id: PromptId,
}

/// Registers the HTTP routes. Shared by `main` and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/health", web::get().to(health))
        .service(
            web::scope("/api")
                .route("/prompt", web::post().to(create_prompt))
                .service(
                    web::resource("/prompt/{prompt_id}")
                        .route(web::get().to(get_prompt))
                        .route(web::post().to(save_prompt)),
                ),
        );
}

/// Malformed bodies are rejected before they reach the store.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::InvalidInput(err.to_string()).into())
}

/// GET /health
async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET /api/prompt/{prompt_id}
#[instrument(skip(state), name = "get_prompt")]
async fn get_prompt(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<web::Json<Prompt>, ApiError> {
    let id = PromptId::parse(&path)?;
    let prompt = state.storage.get_prompt(&id).await?;
    debug!("Prompt retrieved successfully");
    Ok(web::Json(prompt))
}

/// POST /api/prompt/{prompt_id}
#[instrument(skip(state, body), name = "save_prompt")]
async fn save_prompt(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<Prompt>,
) -> Result<HttpResponse, ApiError> {
    let id = PromptId::parse(&path)?;
    state.storage.save_prompt(&id, &body).await?;
    info!("Prompt created successfully");
    Ok(HttpResponse::Ok().finish())
}

/// POST /api/prompt
#[instrument(skip(state, body), name = "create_prompt")]
async fn create_prompt(
    state: web::Data<AppState>,
    body: web::Json<Prompt>,
) -> Result<HttpResponse, ApiError> {
    let id = PromptId::generate();
    state.storage.save_prompt(&id, &body).await?;
    info!(prompt_id = %id, "Prompt created under generated id");
    Ok(HttpResponse::Ok().json(CreatedPrompt { prompt_id: id }))
}
