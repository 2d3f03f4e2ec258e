// src/models/question.rs

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::utils::validation::{first_reason, not_blank};

/// Kind of an objective question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    /// Single choice among the options.
    Single,
    /// True/false judgement.
    Judge,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Single => "single",
            QuestionType::Judge => "judge",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "single" => Some(QuestionType::Single),
            "judge" => Some(QuestionType::Judge),
            _ => None,
        }
    }
}

/// A stored objective question (single choice or judge).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectiveQuestion {
    pub id: String,

    pub qtype: QuestionType,

    /// Question body, blank edge lines removed.
    pub question: String,

    pub options: Vec<String>,

    /// Zero-based index into `options`.
    pub answer_index: usize,

    /// Origin tag (e.g. the imported file name), used for grouping.
    pub source: Option<String>,
}

/// A stored subjective question with its reference answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectiveQuestion {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub source: Option<String>,
}

/// DTO for creating an objective question.
#[derive(Debug, Deserialize, Validate)]
#[validate(schema(function = validate_index_and_qtype))]
pub struct CreateObjectiveRequest {
    #[serde(default)]
    #[validate(custom(function = not_blank))]
    pub question: String,
    #[serde(default)]
    #[validate(custom(function = validate_options))]
    pub options: Vec<String>,
    pub answer_index: Option<i64>,
    /// Empty counts as absent.
    pub qtype: Option<String>,
    pub source: Option<String>,
}

impl CreateObjectiveRequest {
    /// Returns the first reason the payload is invalid, in field order.
    pub fn check(&self) -> Result<(), String> {
        self.validate()
            .map_err(|errors| first_reason(&errors, &["question", "options"]))
    }

    /// Builds the record to store. Call only after `check` succeeded.
    pub fn into_question(self) -> ObjectiveQuestion {
        let qtype = self
            .qtype
            .as_deref()
            .and_then(QuestionType::parse)
            .unwrap_or(QuestionType::Single);

        ObjectiveQuestion {
            id: uuid::Uuid::new_v4().to_string(),
            qtype,
            question: self.question.trim().to_string(),
            options: self.options.iter().map(|o| o.trim().to_string()).collect(),
            answer_index: self.answer_index.unwrap_or(0).max(0) as usize,
            source: self.source.filter(|s| !s.is_empty()),
        }
    }
}

/// DTO for creating a subjective question.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSubjectiveRequest {
    #[serde(default)]
    #[validate(custom(function = not_blank))]
    pub question: String,
    #[serde(default)]
    #[validate(custom(function = not_blank))]
    pub answer: String,
    pub source: Option<String>,
}

impl CreateSubjectiveRequest {
    pub fn check(&self) -> Result<(), String> {
        self.validate()
            .map_err(|errors| first_reason(&errors, &["question", "answer"]))
    }

    pub fn into_question(self) -> SubjectiveQuestion {
        SubjectiveQuestion {
            id: uuid::Uuid::new_v4().to_string(),
            question: self.question.trim().to_string(),
            answer: self.answer.trim().to_string(),
            source: self.source.filter(|s| !s.is_empty()),
        }
    }
}

fn validate_options(options: &[String]) -> Result<(), ValidationError> {
    if options.len() < 2 {
        return Err(ValidationError::new("too_few_options")
            .with_message(Cow::Borrowed("must contain at least two options")));
    }
    Ok(())
}

/// Runs only once the field rules pass, so `options` is known to be usable.
/// The index bound is reported before `qtype`.
fn validate_index_and_qtype(req: &CreateObjectiveRequest) -> Result<(), ValidationError> {
    let index_in_range = matches!(
        req.answer_index,
        Some(index) if index >= 0 && (index as usize) < req.options.len()
    );
    if !index_in_range {
        return Err(ValidationError::new("answer_index_out_of_range")
            .with_message(Cow::Borrowed("answer_index is out of range")));
    }

    match req.qtype.as_deref() {
        Some(qtype) if !qtype.is_empty() && QuestionType::parse(qtype).is_none() => {
            Err(ValidationError::new("invalid_qtype")
                .with_message(Cow::Borrowed("qtype must be single or judge")))
        }
        _ => Ok(()),
    }
}
