// src/models/import.rs

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::utils::validation::{first_reason, not_blank};

/// Source tag used when an import request carries none.
pub const DEFAULT_IMPORT_SOURCE: &str = "txt-import";

/// Which parser and store an import targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportKind {
    Objective,
    Subjective,
}

impl ImportKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "objective" => Some(ImportKind::Objective),
            "subjective" => Some(ImportKind::Subjective),
            _ => None,
        }
    }
}

/// DTO for importing a plain-text question bank.
#[derive(Debug, Deserialize, Validate)]
pub struct ImportTxtRequest {
    #[serde(default)]
    #[validate(custom(function = validate_kind))]
    pub kind: String,
    #[serde(default)]
    #[validate(custom(function = not_blank))]
    pub content: String,
    pub source: Option<String>,
}

impl ImportTxtRequest {
    /// Content is reported before kind.
    pub fn check(&self) -> Result<(), String> {
        self.validate()
            .map_err(|errors| first_reason(&errors, &["content", "kind"]))
    }

    /// The validated kind. Only meaningful after `check` succeeded.
    pub fn import_kind(&self) -> Option<ImportKind> {
        ImportKind::parse(&self.kind)
    }

    pub fn source(&self) -> &str {
        match self.source.as_deref() {
            Some(source) if !source.is_empty() => source,
            _ => DEFAULT_IMPORT_SOURCE,
        }
    }
}

/// Response body of a successful import.
#[derive(Debug, Serialize, Deserialize)]
pub struct ImportSummary {
    pub imported: usize,
}

fn validate_kind(kind: &str) -> Result<(), ValidationError> {
    if ImportKind::parse(kind).is_none() {
        return Err(ValidationError::new("invalid_kind")
            .with_message(Cow::Borrowed("must be objective or subjective")));
    }
    Ok(())
}
