// src/batch.rs

//! Offline conversion of `.txt` question banks into store records.

use std::path::{Path, PathBuf};

use crate::{
    error::AppError,
    models::question::{ObjectiveQuestion, SubjectiveQuestion},
    parser::{parse_objective, parse_subjective},
};

/// Lists the `*.txt` files directly inside `dir`, sorted by name.
pub fn txt_files(dir: &Path) -> Result<Vec<PathBuf>, AppError> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let is_txt = path.extension().is_some_and(|ext| ext == "txt");
        if is_txt && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Reads `path` as UTF-8, falling back to GBK for legacy banks.
fn read_text(path: &Path) -> Result<String, AppError> {
    let bytes = std::fs::read(path)?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            tracing::warn!("{} is not valid UTF-8, decoding as GBK", path.display());
            let (text, _, had_errors) = encoding_rs::GBK.decode(e.as_bytes());
            if had_errors {
                tracing::warn!("{} contains bytes that are not valid GBK either", path.display());
            }
            Ok(text.into_owned())
        }
    }
}

/// Source tag for records read from `path`: its file name.
fn source_tag(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Parses every objective bank in `dir`.
pub fn objective_from_dir(dir: &Path) -> Result<Vec<ObjectiveQuestion>, AppError> {
    let mut questions = Vec::new();
    for path in txt_files(dir)? {
        let parsed = parse_objective(&read_text(&path)?, &source_tag(&path));
        tracing::info!("{}: {} objective questions", path.display(), parsed.len());
        questions.extend(parsed);
    }
    Ok(questions)
}

/// Parses every subjective bank in `dir`.
pub fn subjective_from_dir(dir: &Path) -> Result<Vec<SubjectiveQuestion>, AppError> {
    let mut questions = Vec::new();
    for path in txt_files(dir)? {
        let parsed = parse_subjective(&read_text(&path)?, &source_tag(&path));
        tracing::info!("{}: {} subjective questions", path.display(), parsed.len());
        questions.extend(parsed);
    }
    Ok(questions)
}
