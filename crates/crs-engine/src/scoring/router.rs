use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Local;
use serde_json::json;

use super::domain::{ApplicantInput, LanguageTest};
use super::language::{catalog, full_catalog};
use super::{ScoreBreakdown, ScoringEngine, ValidationError};
use crate::error::AppError;

/// Router builder exposing score calculation and the language test catalog.
pub fn scoring_router(engine: Arc<ScoringEngine>) -> Router {
    Router::new()
        .route("/api/v1/crs/score", post(score_handler))
        .route("/api/v1/crs/language-tests", get(catalog_handler))
        .route("/api/v1/crs/language-tests/:test", get(test_catalog_handler))
        .with_state(engine)
}

pub(crate) async fn score_handler(
    State(engine): State<Arc<ScoringEngine>>,
    payload: Result<Json<ApplicantInput>, JsonRejection>,
) -> Result<Json<ScoreBreakdown>, AppError> {
    // Undecodable bodies still answer with the violation list shape.
    let Json(mut input) = payload.map_err(|rejection| {
        ValidationError::new(vec![format!(
            "Applicant input could not be read: {}",
            rejection.body_text()
        )])
    })?;

    if input.assessed_on.is_none() {
        input.assessed_on = Some(Local::now().date_naive());
    }

    let breakdown = engine.calculate(&input)?;
    Ok(Json(breakdown))
}

pub(crate) async fn catalog_handler() -> Response {
    (StatusCode::OK, Json(full_catalog())).into_response()
}

pub(crate) async fn test_catalog_handler(Path(test): Path<String>) -> Response {
    match LanguageTest::from_name(&test).and_then(catalog) {
        Some(entry) => (StatusCode::OK, Json(entry)).into_response(),
        None => {
            let payload = json!({
                "error": format!("unknown language test '{test}'"),
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}
