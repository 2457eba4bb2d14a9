//! Extract the first line of the most recently modified `.log` files.

use std::path::PathBuf;
use std::time::SystemTime;

use crate::error::TaskError;
use crate::{sandbox, AppState};

const MAX_LOG_FILES: usize = 10;

pub async fn recent_log_first_lines(state: &AppState) -> Result<String, TaskError> {
    let logs_dir = sandbox::resolve(&state.config.data_dir, "logs")?;
    if !logs_dir.is_dir() {
        return Err(TaskError::BadInput(format!(
            "logs/ not found under {}",
            state.config.data_dir.display()
        )));
    }

    let mut entries: Vec<(SystemTime, PathBuf)> = Vec::new();
    let mut dir = tokio::fs::read_dir(&logs_dir).await?;
    while let Some(entry) = dir.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("log") {
            continue;
        }
        let modified = entry.metadata().await?.modified()?;
        entries.push((modified, path));
    }

    if entries.is_empty() {
        return Err(TaskError::BadInput(
            "No .log files found under logs/".to_string(),
        ));
    }

    entries.sort_by(|a, b| b.0.cmp(&a.0));
    entries.truncate(MAX_LOG_FILES);

    let mut first_lines = Vec::with_capacity(entries.len());
    for (_, path) in &entries {
        let content = tokio::fs::read_to_string(path).await?;
        first_lines.push(content.lines().next().unwrap_or_default().to_string());
    }

    let dst = sandbox::resolve(&state.config.data_dir, "logs-recent.txt")?;
    tokio::fs::write(&dst, first_lines.join("\n")).await?;

    Ok(format!(
        "Wrote first lines of the {} most recent log file(s) to logs-recent.txt",
        first_lines.len()
    ))
}
