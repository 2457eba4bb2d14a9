//! Handlers that shell out to external tools: the datagen bootstrap and the
//! prettier formatter.

use anyhow::anyhow;
use tokio::process::Command;
use tracing::info;

use crate::error::TaskError;
use crate::{sandbox, AppState};

use super::input_file;

const DATAGEN_URL: &str = "https://raw.githubusercontent.com/sanand0/tools-in-data-science-public/tds-2025-01/project-1/datagen.py";

/// Install the `uv` helper, download the datagen script into the sandbox and
/// run it with the configured user email.
pub async fn run_datagen(state: &AppState) -> Result<String, TaskError> {
    let email = state.config.user_email.clone().ok_or_else(|| {
        TaskError::BadInput("USER_EMAIL is not set; the datagen task needs it".to_string())
    })?;

    let mut pip = Command::new("pip");
    pip.args(["install", "uv"]);
    run_checked(&mut pip, "pip install uv").await?;

    info!(url = DATAGEN_URL, "Downloading datagen script");
    let response = state.http_client.get(DATAGEN_URL).send().await?;
    if !response.status().is_success() {
        return Err(TaskError::Internal(anyhow!(
            "datagen download failed with status {}",
            response.status()
        )));
    }
    let script = response.bytes().await?;

    let script_path = sandbox::resolve(&state.config.data_dir, "datagen.py")?;
    tokio::fs::write(&script_path, &script).await?;

    let mut datagen = Command::new("python3");
    datagen
        .arg(&script_path)
        .arg(&email)
        .arg("--root")
        .arg(&state.config.data_dir);
    run_checked(&mut datagen, "datagen.py").await?;

    Ok(format!("Ran datagen.py for {email}"))
}

/// Format `format.md` in place with a pinned prettier.
pub async fn format_markdown(state: &AppState) -> Result<String, TaskError> {
    let target = input_file(state, "format.md")?;

    let mut npx = Command::new("npx");
    npx.args(["prettier@3.4.2", "--write"]).arg(&target);
    run_checked(&mut npx, "prettier").await?;

    Ok("Formatted format.md in place with prettier".to_string())
}

async fn run_checked(command: &mut Command, label: &str) -> Result<(), TaskError> {
    let output = command
        .output()
        .await
        .map_err(|e| TaskError::Internal(anyhow!("failed to spawn {label}: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(TaskError::Internal(anyhow!(
            "{label} exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }
    Ok(())
}
