// src/handlers/subjective.rs

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
    models::question::CreateSubjectiveRequest,
    store::QuestionStore,
    utils::sample::{normalize_count, take_random_sample},
};

#[derive(Debug, Deserialize)]
pub struct RandomParams {
    pub count: Option<String>,
}

pub async fn list_subjective(
    State(store): State<Arc<QuestionStore>>,
) -> Result<impl IntoResponse, AppError> {
    let questions = store.subjective_questions().await?;
    Ok(Json(questions))
}

/// Draws a random sample of subjective questions. 404 on an empty bank.
pub async fn random_subjective(
    State(store): State<Arc<QuestionStore>>,
    params: Result<Query<RandomParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;
    let count = normalize_count(params.count.as_deref());
    let questions = store.subjective_questions().await?;

    if questions.is_empty() {
        return Err(AppError::NotFound("No subjective questions found.".to_string()));
    }

    Ok(Json(take_random_sample(questions, count)))
}

/// Adds one subjective question and returns it with 201 Created.
pub async fn create_subjective(
    State(store): State<Arc<QuestionStore>>,
    payload: Result<Json<CreateSubjectiveRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    payload.check().map_err(AppError::BadRequest)?;

    let question = payload.into_question();
    let total = store.add_subjective(vec![question.clone()]).await?;
    tracing::info!("Added subjective question {} ({} in bank)", question.id, total);

    Ok((StatusCode::CREATED, Json(question)))
}
