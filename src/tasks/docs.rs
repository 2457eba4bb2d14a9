//! Index the first H1 heading of every markdown file under `docs/`.

use serde_json::{Map, Value};
use walkdir::WalkDir;

use crate::error::TaskError;
use crate::{sandbox, AppState};

pub async fn build_docs_index(state: &AppState) -> Result<String, TaskError> {
    let docs_dir = sandbox::resolve(&state.config.data_dir, "docs")?;
    if !docs_dir.is_dir() {
        return Err(TaskError::BadInput(format!(
            "docs/ not found under {}",
            state.config.data_dir.display()
        )));
    }

    let mut index = Map::new();
    for entry in WalkDir::new(&docs_dir).sort_by_file_name() {
        let entry = entry.map_err(|e| TaskError::Internal(e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().and_then(|e| e.to_str()) != Some("md") {
            continue;
        }

        let content = tokio::fs::read_to_string(entry.path()).await?;
        // Files without an H1 heading are left out of the index.
        let Some(title) = content.lines().find_map(|line| line.strip_prefix("# ")) else {
            continue;
        };

        let relative = entry
            .path()
            .strip_prefix(&docs_dir)
            .unwrap_or(entry.path())
            .to_string_lossy()
            .replace('\\', "/");
        index.insert(relative, Value::String(title.trim().to_string()));
    }

    let indexed = index.len();
    let dst = sandbox::resolve(&state.config.data_dir, "docs/index.json")?;
    tokio::fs::write(&dst, serde_json::to_vec_pretty(&Value::Object(index))?).await?;

    Ok(format!(
        "Indexed {indexed} markdown file(s) into docs/index.json"
    ))
}
