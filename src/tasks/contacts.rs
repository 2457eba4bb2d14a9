//! Sort `contacts.json` by (last name, first name).

use serde_json::Value;

use crate::error::TaskError;
use crate::{sandbox, AppState};

use super::input_file;

pub async fn sort_contacts(state: &AppState) -> Result<String, TaskError> {
    let src = input_file(state, "contacts.json")?;
    let content = tokio::fs::read_to_string(&src).await?;

    let mut contacts: Vec<Value> = serde_json::from_str(&content)
        .map_err(|e| TaskError::BadInput(format!("contacts.json is not a JSON array: {e}")))?;

    contacts.sort_by(|a, b| sort_key(a).cmp(&sort_key(b)));

    let dst = sandbox::resolve(&state.config.data_dir, "contacts-sorted.json")?;
    tokio::fs::write(&dst, serde_json::to_vec_pretty(&contacts)?).await?;

    Ok(format!(
        "Sorted {} contact(s) into contacts-sorted.json",
        contacts.len()
    ))
}

fn sort_key(contact: &Value) -> (String, String) {
    let field = |name: &str| {
        contact
            .get(name)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    (field("last_name"), field("first_name"))
}
