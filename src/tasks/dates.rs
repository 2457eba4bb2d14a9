//! Count the Wednesdays in `dates.txt`.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::TaskError;
use crate::{sandbox, AppState};

use super::input_file;

pub async fn count_wednesdays(state: &AppState) -> Result<String, TaskError> {
    let src = input_file(state, "dates.txt")?;
    let content = tokio::fs::read_to_string(&src).await?;

    let mut count = 0u32;
    for line in content.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let date = NaiveDate::parse_from_str(line, "%Y-%m-%d")
            .map_err(|e| TaskError::BadInput(format!("Invalid date '{line}' in dates.txt: {e}")))?;
        if date.weekday() == Weekday::Wed {
            count += 1;
        }
    }

    let dst = sandbox::resolve(&state.config.data_dir, "dates-wednesdays.txt")?;
    tokio::fs::write(&dst, count.to_string()).await?;

    Ok(format!("Counted {count} Wednesday(s) in dates.txt"))
}
