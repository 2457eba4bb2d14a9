//! Total Gold ticket sales from `ticket-sales.db`.

use rusqlite::Connection;

use crate::error::TaskError;
use crate::{sandbox, AppState};

use super::input_file;

pub async fn gold_ticket_sales(state: &AppState) -> Result<String, TaskError> {
    let db_path = input_file(state, "ticket-sales.db")?;

    // rusqlite is synchronous; this is a single cheap aggregate, so it runs
    // inline with the request.
    let conn = Connection::open(&db_path)?;
    let total: f64 = conn
        .query_row(
            "SELECT SUM(units * price) FROM tickets WHERE type = 'Gold'",
            [],
            |row| row.get::<_, Option<f64>>(0),
        )?
        .unwrap_or(0.0);

    let dst = sandbox::resolve(&state.config.data_dir, "ticket-sales-gold.txt")?;
    tokio::fs::write(&dst, total.to_string()).await?;

    Ok(format!("Total Gold ticket sales: {total}"))
}
