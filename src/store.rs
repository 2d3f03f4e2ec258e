// src/store.rs

use std::io::ErrorKind;
use std::path::PathBuf;

use serde::{Serialize, de::DeserializeOwned};
use tokio::sync::Mutex;

use crate::{
    config::Config,
    error::AppError,
    models::question::{ObjectiveQuestion, SubjectiveQuestion},
};

/// A collection persisted as one pretty-printed JSON array.
///
/// Every mutation reads the whole file, changes it in memory and writes it
/// back. Writers are serialized by a per-file lock; readers are not.
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Reads the full collection. A missing file is an empty collection.
    pub async fn load<T: DeserializeOwned>(&self) -> Result<Vec<T>, AppError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(AppError::InternalServerError(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )));
            }
        };

        serde_json::from_str(&content).map_err(|e| {
            AppError::InternalServerError(format!("Failed to parse {}: {}", self.path.display(), e))
        })
    }

    /// Appends `items` to the stored collection and returns the new length.
    pub async fn append<T: Serialize + DeserializeOwned>(&self, items: Vec<T>) -> Result<usize, AppError> {
        let _guard = self.write_lock.lock().await;

        let mut stored: Vec<T> = self.load().await?;
        stored.extend(items);
        self.write(&stored).await?;

        Ok(stored.len())
    }

    /// Replaces the stored collection with `items`.
    pub async fn replace<T: Serialize>(&self, items: &[T]) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;
        self.write(items).await
    }

    async fn write<T: Serialize>(&self, items: &[T]) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(items)?;
        tokio::fs::write(&self.path, json).await.map_err(|e| {
            AppError::InternalServerError(format!("Failed to write {}: {}", self.path.display(), e))
        })
    }
}

/// The two question banks, one file each.
#[derive(Debug)]
pub struct QuestionStore {
    objective: JsonStore,
    subjective: JsonStore,
}

impl QuestionStore {
    pub fn new(config: &Config) -> Self {
        Self {
            objective: JsonStore::new(config.objective_path()),
            subjective: JsonStore::new(config.subjective_path()),
        }
    }

    pub async fn objective_questions(&self) -> Result<Vec<ObjectiveQuestion>, AppError> {
        self.objective.load().await
    }

    pub async fn subjective_questions(&self) -> Result<Vec<SubjectiveQuestion>, AppError> {
        self.subjective.load().await
    }

    pub async fn add_objective(&self, questions: Vec<ObjectiveQuestion>) -> Result<usize, AppError> {
        self.objective.append(questions).await
    }

    pub async fn add_subjective(&self, questions: Vec<SubjectiveQuestion>) -> Result<usize, AppError> {
        self.subjective.append(questions).await
    }

    pub async fn replace_objective(&self, questions: &[ObjectiveQuestion]) -> Result<(), AppError> {
        self.objective.replace(questions).await
    }

    pub async fn replace_subjective(&self, questions: &[SubjectiveQuestion]) -> Result<(), AppError> {
        self.subjective.replace(questions).await
    }
}
