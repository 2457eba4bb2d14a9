//! Keyword-based task classification.
//!
//! Classification is an explicit ordered list of (predicate, task) pairs over
//! the lowercased description: the first match wins, and a description that
//! matches several entries resolves to the earliest one checked, not the most
//! specific one. The deletion guard runs before everything else.

use crate::error::TaskError;

/// The fixed catalog of operations the service knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    Datagen,
    Format,
    Dates,
    Contacts,
    Logs,
    Docs,
    Email,
    Card,
    Similar,
    Sales,
    /// Recognized business-automation request with no implemented handler;
    /// carries the keyword that matched.
    Business(&'static str),
}

const DELETION_KEYWORDS: &[&str] = &["delete", "remove"];

const BUSINESS_KEYWORDS: &[&str] = &[
    "fetch",
    "api",
    "clone",
    "git",
    "scrape",
    "compress",
    "resize",
    "transcribe",
    "convert",
    "markdown",
    "csv",
];

type Predicate = fn(&str) -> bool;

static RULES: &[(Predicate, TaskKind)] = &[
    (
        |t: &str| t.contains("install uv") || t.contains("datagen"),
        TaskKind::Datagen,
    ),
    (
        |t: &str| t.contains("format.md") || t.contains("prettier"),
        TaskKind::Format,
    ),
    (
        |t: &str| t.contains("dates.txt") || t.contains("wednesday"),
        TaskKind::Dates,
    ),
    (
        |t: &str| t.contains("contacts.json") || (t.contains("contacts") && t.contains("sort")),
        TaskKind::Contacts,
    ),
    (
        |t: &str| t.contains(".log") || (t.contains("logs") && t.contains("first line")),
        TaskKind::Logs,
    ),
    (
        |t: &str| {
            t.contains("docs") && (t.contains(".md") || t.contains("index") || t.contains("h1"))
        },
        TaskKind::Docs,
    ),
    (
        |t: &str| {
            t.contains("email.txt") || t.contains("email-sender") || t.contains("sender email")
        },
        TaskKind::Email,
    ),
    (
        |t: &str| t.contains("credit-card.png") || t.contains("credit card"),
        TaskKind::Card,
    ),
    (
        |t: &str| t.contains("comments.txt") || t.contains("similar"),
        TaskKind::Similar,
    ),
    (
        |t: &str| t.contains("ticket-sales.db") || (t.contains("ticket") && t.contains("gold")),
        TaskKind::Sales,
    ),
];

/// Map a free-text description to a task, or reject it.
pub fn classify(task: &str) -> Result<TaskKind, TaskError> {
    let lowered = task.to_lowercase();

    if let Some(keyword) = DELETION_KEYWORDS.iter().find(|k| lowered.contains(**k)) {
        return Err(TaskError::Forbidden(format!(
            "Task contains forbidden keyword '{keyword}'; deletion tasks are not allowed"
        )));
    }

    for (matches, kind) in RULES {
        if matches(&lowered) {
            return Ok(*kind);
        }
    }

    if let Some(keyword) = BUSINESS_KEYWORDS.iter().find(|k| lowered.contains(**k)) {
        return Ok(TaskKind::Business(keyword));
    }

    Err(TaskError::Unrecognized)
}
