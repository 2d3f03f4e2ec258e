// src/parser.rs

//! Plain-text question bank importer.
//!
//! Objective blocks look like:
//!
//! ```text
//! #CHOICE            (or #JUDGE)
//! question body, any number of lines
//! #OPTIONS
//! first option
//! second option
//! #CORRECT
//! 2 (optional explanation)
//! #END
//! ```
//!
//! Subjective blocks open with `#SUBJECTIVE`, put the body before `#ANSWER`
//! (or `#CORRECT_ANSWER`), and end with `#END`. A `#USER_ANSWER` section is
//! skipped up to the following `#CORRECT_ANSWER`.
//!
//! Malformed input never fails: missing markers make the scan run to the end
//! of the text, which yields fewer records.

use crate::models::question::{ObjectiveQuestion, QuestionType, SubjectiveQuestion};
use crate::utils::number::parse_leading_int;

const CHOICE: &str = "#CHOICE";
const JUDGE: &str = "#JUDGE";
const OPTIONS: &str = "#OPTIONS";
const CORRECT: &str = "#CORRECT";
const SUBJECTIVE: &str = "#SUBJECTIVE";
const ANSWER: &str = "#ANSWER";
const USER_ANSWER: &str = "#USER_ANSWER";
const CORRECT_ANSWER: &str = "#CORRECT_ANSWER";
const END: &str = "#END";

/// Forward-only position over the lines of an import.
struct LineCursor<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    fn new(text: &'a str) -> Self {
        // `lines` also strips the `\r` of CRLF endings.
        Self {
            lines: text.lines().collect(),
            pos: 0,
        }
    }

    /// Current line with surrounding whitespace removed, if any is left.
    fn marker(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied().map(str::trim)
    }

    fn current(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied()
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    /// Collects lines until one whose trimmed text satisfies `stop`.
    /// The stopping line is left under the cursor.
    fn take_until(&mut self, stop: impl Fn(&str) -> bool) -> Vec<&'a str> {
        let mut taken = Vec::new();
        while let Some(line) = self.current() {
            if stop(line.trim()) {
                break;
            }
            taken.push(line);
            self.pos += 1;
        }
        taken
    }

    /// Moves to the next line whose trimmed text equals `marker`.
    fn skip_to(&mut self, marker: &str) {
        while let Some(line) = self.marker() {
            if line == marker {
                break;
            }
            self.pos += 1;
        }
    }

    /// Moves past the next line whose trimmed text equals `marker`,
    /// or to the end of input when there is none.
    fn skip_past(&mut self, marker: &str) {
        self.skip_to(marker);
        self.advance();
    }
}

/// Parses every `#CHOICE` / `#JUDGE` block in `text`.
pub fn parse_objective(text: &str, source: &str) -> Vec<ObjectiveQuestion> {
    let mut cursor = LineCursor::new(text);
    let mut questions = Vec::new();

    while let Some(marker) = cursor.marker() {
        let qtype = match marker {
            JUDGE => QuestionType::Judge,
            CHOICE => QuestionType::Single,
            _ => {
                cursor.advance();
                continue;
            }
        };
        cursor.advance();

        let body = cursor.take_until(|line| line == OPTIONS);
        cursor.advance();

        let options = cursor
            .take_until(|line| line == CORRECT)
            .into_iter()
            .filter(|option| !option.trim().is_empty())
            .map(str::to_string)
            .collect();
        cursor.advance();

        let answer_index = cursor.current().map(answer_index_from_line).unwrap_or(0);

        // The answer line itself may already be `#END`.
        cursor.skip_past(END);

        questions.push(ObjectiveQuestion {
            id: uuid::Uuid::new_v4().to_string(),
            qtype,
            question: join_trimmed(&body),
            options,
            answer_index,
            source: Some(source.to_string()),
        });
    }

    questions
}

/// Parses every `#SUBJECTIVE` block in `text`.
pub fn parse_subjective(text: &str, source: &str) -> Vec<SubjectiveQuestion> {
    let mut cursor = LineCursor::new(text);
    let mut questions = Vec::new();

    while let Some(marker) = cursor.marker() {
        if marker != SUBJECTIVE {
            cursor.advance();
            continue;
        }
        cursor.advance();

        let body = cursor.take_until(|line| matches!(line, ANSWER | USER_ANSWER | CORRECT_ANSWER));
        let answer_marker = cursor.marker();
        cursor.advance();

        if answer_marker == Some(USER_ANSWER) {
            cursor.skip_past(CORRECT_ANSWER);
        }

        let answer = cursor.take_until(|line| line == END);
        cursor.advance();

        questions.push(SubjectiveQuestion {
            id: uuid::Uuid::new_v4().to_string(),
            question: join_trimmed(&body),
            answer: join_trimmed(&answer),
            source: Some(source.to_string()),
        });
    }

    questions
}

/// One-based answer number on the first token of `line`, as a zero-based index.
fn answer_index_from_line(line: &str) -> usize {
    line.split_whitespace()
        .next()
        .and_then(parse_leading_int)
        .map(|number| number.saturating_sub(1).max(0) as usize)
        .unwrap_or(0)
}

/// Drops blank lines at both ends and joins the rest with `\n`.
fn join_trimmed(lines: &[&str]) -> String {
    let start = lines.iter().position(|line| !line.trim().is_empty());
    let end = lines.iter().rposition(|line| !line.trim().is_empty());

    match (start, end) {
        (Some(start), Some(end)) => lines[start..=end].join("\n"),
        _ => String::new(),
    }
}
