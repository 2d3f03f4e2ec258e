// src/handlers/import.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    error::AppError,
    models::import::{ImportKind, ImportSummary, ImportTxtRequest},
    parser::{parse_objective, parse_subjective},
    store::QuestionStore,
};

/// Imports a plain-text question bank into the matching store.
///
/// Parsed records are appended to the existing collection. Malformed blocks
/// simply yield fewer records; only a blank body or an unknown `kind` is
/// rejected with 400.
pub async fn import_txt(
    State(store): State<Arc<QuestionStore>>,
    payload: Result<Json<ImportTxtRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    payload.check().map_err(AppError::BadRequest)?;

    let kind = payload
        .import_kind()
        .ok_or_else(|| AppError::BadRequest("kind must be objective or subjective".to_string()))?;
    let source = payload.source();

    let imported = match kind {
        ImportKind::Objective => {
            let questions = parse_objective(&payload.content, source);
            let imported = questions.len();
            store.add_objective(questions).await?;
            imported
        }
        ImportKind::Subjective => {
            let questions = parse_subjective(&payload.content, source);
            let imported = questions.len();
            store.add_subjective(questions).await?;
            imported
        }
    };

    tracing::info!("Imported {} {:?} questions from '{}'", imported, kind, source);

    Ok((StatusCode::CREATED, Json(ImportSummary { imported })))
}
