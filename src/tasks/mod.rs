//! The fixed catalog of file-processing task handlers.
//!
//! Every handler is stateless, validates its file paths through the sandbox
//! guard, and returns a success message or an error. A handler that fails
//! after writing partial output leaves that output in place.

pub mod card;
pub mod contacts;
pub mod dates;
pub mod docs;
pub mod email;
pub mod logs;
pub mod sales;
pub mod shell;
pub mod similar;

use std::path::PathBuf;

use crate::error::TaskError;
use crate::router::TaskKind;
use crate::{sandbox, AppState};

pub async fn execute(state: &AppState, kind: TaskKind) -> Result<String, TaskError> {
    match kind {
        TaskKind::Datagen => shell::run_datagen(state).await,
        TaskKind::Format => shell::format_markdown(state).await,
        TaskKind::Dates => dates::count_wednesdays(state).await,
        TaskKind::Contacts => contacts::sort_contacts(state).await,
        TaskKind::Logs => logs::recent_log_first_lines(state).await,
        TaskKind::Docs => docs::build_docs_index(state).await,
        TaskKind::Email => email::extract_sender(state).await,
        TaskKind::Card => card::extract_card_number(state).await,
        TaskKind::Similar => similar::most_similar_comments(state).await,
        TaskKind::Sales => sales::gold_ticket_sales(state).await,
        TaskKind::Business(keyword) => Ok(format!(
            "Business task recognized (keyword '{keyword}'); no automated handler is implemented yet"
        )),
    }
}

/// Resolve a required input file inside the sandbox, failing with a 400-tier
/// error when it does not exist.
fn input_file(state: &AppState, name: &str) -> Result<PathBuf, TaskError> {
    let path = sandbox::resolve(&state.config.data_dir, name)?;
    if !path.is_file() {
        return Err(TaskError::BadInput(format!(
            "{name} not found under {}",
            state.config.data_dir.display()
        )));
    }
    Ok(path)
}
