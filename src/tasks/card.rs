//! Read the card number out of `credit-card.png` via the LLM.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::TaskError;
use crate::{sandbox, AppState};

use super::input_file;

pub async fn extract_card_number(state: &AppState) -> Result<String, TaskError> {
    let src = input_file(state, "credit-card.png")?;
    let bytes = tokio::fs::read(&src).await?;
    let encoded = STANDARD.encode(&bytes);

    let reply = state
        .llm
        .chat_with_image(
            "Extract the credit card number shown in this image. Reply with the digits only.",
            &encoded,
        )
        .await?;

    let card_number: String = reply.chars().filter(|c| !c.is_whitespace()).collect();

    let dst = sandbox::resolve(&state.config.data_dir, "credit-card.txt")?;
    tokio::fs::write(&dst, &card_number).await?;

    Ok("Extracted card number into credit-card.txt".to_string())
}
