//! HTTP routes.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;
use std::sync::Arc;

use gamedb_domain::{LootChanceInput, LootChanceResult, LootMultiplierTables, ScalingTables};
use gamedb_shared::{LootPreviewRequest, ScaledSkillsQuery, ScaledSkillsResponse};

use crate::app::App;
use crate::infrastructure::ports::{DataSection, RepoError};
use crate::use_cases::DataError;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/api/stats/class-base", get(get_class_base_stats))
        .route("/api/classes", get(list_classes))
        .route(
            "/api/classes/{class}/skills",
            get(get_class_skills).put(save_class_skills),
        )
        .route("/api/classes/{class}/skills/scaled", get(get_scaled_skills))
        .route("/api/scaling", get(get_scaling_tables))
        .route("/api/loot/multipliers", get(get_loot_multipliers))
        .route("/api/loot/preview", post(preview_loot))
        .merge(section_routes(DataSection::Systems))
        .merge(section_routes(DataSection::Items))
        .merge(section_routes(DataSection::Monsters))
        .merge(section_routes(DataSection::World))
}

/// `GET /api/<section>` and `GET /api/<section>/{name}`.
fn section_routes(section: DataSection) -> Router<Arc<App>> {
    let base = format!("/api/{}", section.dir_name());
    Router::new()
        .route(
            &base,
            get(move |State(app): State<Arc<App>>| list_section(app, section)),
        )
        .route(
            &format!("{base}/{{name}}"),
            get(
                move |State(app): State<Arc<App>>, Path(name): Path<String>| {
                    get_section_document(app, section, name)
                },
            ),
        )
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Catalog
// =============================================================================

async fn get_class_base_stats(State(app): State<Arc<App>>) -> Result<Json<Value>, ApiError> {
    let stats = app
        .use_cases
        .catalog
        .class_base_stats()
        .await
        .map_err(|e| ApiError::load("class base stats", e))?;
    Ok(Json(stats))
}

async fn list_classes(State(app): State<Arc<App>>) -> Result<Json<Vec<String>>, ApiError> {
    let classes = app
        .use_cases
        .catalog
        .list_classes()
        .await
        .map_err(|e| ApiError::load("classes", e))?;
    Ok(Json(classes))
}

async fn list_section(app: Arc<App>, section: DataSection) -> Result<Json<Vec<String>>, ApiError> {
    let names = app
        .use_cases
        .catalog
        .list_documents(section)
        .await
        .map_err(|e| ApiError::load(section.dir_name(), e))?;
    Ok(Json(names))
}

async fn get_section_document(
    app: Arc<App>,
    section: DataSection,
    name: String,
) -> Result<Json<Value>, ApiError> {
    let document = app
        .use_cases
        .catalog
        .get_document(section, &name)
        .await
        .map_err(|e| ApiError::load(&format!("{section}/{name}"), e))?;
    Ok(Json(document))
}

// =============================================================================
// Skills
// =============================================================================

async fn get_class_skills(
    State(app): State<Arc<App>>,
    Path(class): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let document = app
        .use_cases
        .skills
        .get_document(&class)
        .await
        .map_err(|e| ApiError::load("skills", e))?;
    Ok(Json(document))
}

async fn save_class_skills(
    State(app): State<Arc<App>>,
    Path(class): Path<String>,
    Json(document): Json<Value>,
) -> Result<StatusCode, ApiError> {
    app.use_cases
        .skills
        .save_document(&class, &document)
        .await
        .map_err(|e| ApiError::save("skills", e))?;
    Ok(StatusCode::NO_CONTENT)
}

async fn get_scaled_skills(
    State(app): State<Arc<App>>,
    Path(class): Path<String>,
    Query(query): Query<ScaledSkillsQuery>,
) -> Result<Json<ScaledSkillsResponse>, ApiError> {
    let response = app
        .use_cases
        .skills
        .scaled(&class, &query)
        .await
        .map_err(|e| ApiError::load("skills", e))?;
    Ok(Json(response))
}

async fn get_scaling_tables(State(app): State<Arc<App>>) -> Result<Json<ScalingTables>, ApiError> {
    let tables = app
        .use_cases
        .skills
        .scaling_tables()
        .await
        .map_err(|e| ApiError::load("skill scaling", e))?;
    Ok(Json(tables))
}

// =============================================================================
// Loot
// =============================================================================

async fn get_loot_multipliers(
    State(app): State<Arc<App>>,
) -> Result<Json<LootMultiplierTables>, ApiError> {
    let tables = app
        .use_cases
        .loot
        .multiplier_tables()
        .await
        .map_err(|e| ApiError::load("loot multipliers", e))?;
    Ok(Json(tables))
}

async fn preview_loot(
    State(app): State<Arc<App>>,
    Json(request): Json<LootPreviewRequest>,
) -> Result<Json<LootChanceResult>, ApiError> {
    let input: LootChanceInput = request.into();
    let result = app
        .use_cases
        .loot
        .preview(&input)
        .await
        .map_err(|e| ApiError::load("loot multipliers", e))?;
    Ok(Json(result))
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl ApiError {
    /// Map a failed read. The body only names what failed; the cause is logged.
    fn load(what: &str, err: DataError) -> Self {
        match err {
            DataError::Repo(RepoError::InvalidPath(segment)) => {
                ApiError::BadRequest(format!("Invalid name: {segment:?}"))
            }
            e if e.is_not_found() => {
                tracing::debug!(what, error = %e, "Requested data not found");
                ApiError::NotFound(format!("Failed to load {what}"))
            }
            e => {
                tracing::warn!(what, error = %e, "Failed to load data");
                ApiError::Internal(format!("Failed to load {what}"))
            }
        }
    }

    /// Map a failed write.
    fn save(what: &str, err: DataError) -> Self {
        match err {
            DataError::Repo(RepoError::InvalidPath(segment)) => {
                ApiError::BadRequest(format!("Invalid name: {segment:?}"))
            }
            e if e.is_not_found() => ApiError::NotFound(format!("Failed to save {what}")),
            e => {
                tracing::error!(what, error = %e, "Failed to save data");
                ApiError::Internal(format!("Failed to save {what}"))
            }
        }
    }
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg).into_response(),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response(),
        }
    }
}
