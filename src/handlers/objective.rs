// src/handlers/objective.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::{
    error::AppError,
    models::question::CreateObjectiveRequest,
    store::QuestionStore,
    utils::sample::{normalize_count, take_random_sample},
};

/// Query parameters for drawing random objective questions.
#[derive(Debug, Deserialize)]
pub struct RandomParams {
    /// Kept as text so a non-numeric value falls back to the default count.
    pub count: Option<String>,
    pub qtype: Option<String>,
}

/// Lists every objective question in the bank.
pub async fn list_objective(
    State(store): State<Arc<QuestionStore>>,
) -> Result<impl IntoResponse, AppError> {
    let questions = store.objective_questions().await?;
    Ok(Json(questions))
}

/// Draws a random sample of objective questions, optionally of one `qtype`.
///
/// Returns 404 when nothing is left after filtering.
pub async fn random_objective(
    State(store): State<Arc<QuestionStore>>,
    params: Result<Query<RandomParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;
    let count = normalize_count(params.count.as_deref());
    let mut questions = store.objective_questions().await?;

    if let Some(qtype) = params.qtype.as_deref().filter(|q| !q.is_empty()) {
        questions.retain(|q| q.qtype.as_str() == qtype);
    }

    if questions.is_empty() {
        return Err(AppError::NotFound("No objective questions found.".to_string()));
    }

    Ok(Json(take_random_sample(questions, count)))
}

/// Adds one objective question.
///
/// * Validates the payload (non-blank question, at least two options, index in range).
/// * Trims question and options, defaults `qtype` to `single`.
/// * Returns 201 Created with the stored record.
pub async fn create_objective(
    State(store): State<Arc<QuestionStore>>,
    payload: Result<Json<CreateObjectiveRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    payload.check().map_err(AppError::BadRequest)?;

    let question = payload.into_question();
    let total = store.add_objective(vec![question.clone()]).await?;
    tracing::info!("Added objective question {} ({} in bank)", question.id, total);

    Ok((StatusCode::CREATED, Json(question)))
}
