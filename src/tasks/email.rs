//! Extract the sender address from `email.txt` via the LLM.

use crate::error::TaskError;
use crate::{sandbox, AppState};

use super::input_file;

pub async fn extract_sender(state: &AppState) -> Result<String, TaskError> {
    let src = input_file(state, "email.txt")?;
    let content = tokio::fs::read_to_string(&src).await?;

    let prompt = format!(
        "Extract the sender's email address from the following email message. \
         Reply with the address only and nothing else.\n\n{content}"
    );
    let sender = state.llm.chat(&prompt).await?;

    let dst = sandbox::resolve(&state.config.data_dir, "email-sender.txt")?;
    tokio::fs::write(&dst, sender.trim()).await?;

    Ok("Extracted sender email into email-sender.txt".to_string())
}
