//! Handler tests against a temporary sandbox root.

use std::sync::Arc;
use std::time::Duration;

use tempfile::TempDir;

use automation_backend::config::Config;
use automation_backend::error::TaskError;
use automation_backend::tasks;
use automation_backend::AppState;

fn test_state(dir: &TempDir) -> Arc<AppState> {
    let config = Config {
        data_dir: dir.path().to_path_buf(),
        port: 0,
        aiproxy_url: "http://127.0.0.1:9".to_string(),
        aiproxy_token: String::new(),
        user_email: None,
    };
    AppState::new(config).expect("test state")
}

#[tokio::test]
async fn wednesday_count_matches_known_dates() {
    let dir = TempDir::new().unwrap();
    let state = test_state(&dir);

    // 2024-01-03 and 2024-01-10 are Wednesdays; 2024-01-04 is a Thursday.
    std::fs::write(
        dir.path().join("dates.txt"),
        "2024-01-03\n2024-01-04\n2024-01-10\n",
    )
    .unwrap();

    let message = tasks::dates::count_wednesdays(&state).await.unwrap();
    assert!(message.contains('2'), "unexpected message: {message}");

    let written = std::fs::read_to_string(dir.path().join("dates-wednesdays.txt")).unwrap();
    assert_eq!(written, "2");
}

#[tokio::test]
async fn unparseable_date_line_is_a_bad_input_error() {
    let dir = TempDir::new().unwrap();
    let state = test_state(&dir);

    std::fs::write(dir.path().join("dates.txt"), "2024-01-03\nnot-a-date\n").unwrap();

    let err = tasks::dates::count_wednesdays(&state).await.unwrap_err();
    assert!(matches!(err, TaskError::BadInput(_)));
}

#[tokio::test]
async fn missing_dates_file_is_a_bad_input_error() {
    let dir = TempDir::new().unwrap();
    let state = test_state(&dir);

    let err = tasks::dates::count_wednesdays(&state).await.unwrap_err();
    assert!(matches!(err, TaskError::BadInput(_)));
}

#[tokio::test]
async fn contacts_sort_by_last_then_first_name() {
    let dir = TempDir::new().unwrap();
    let state = test_state(&dir);

    std::fs::write(
        dir.path().join("contacts.json"),
        r#"[{"last_name":"B","first_name":"Z"},{"last_name":"A","first_name":"Y"}]"#,
    )
    .unwrap();

    tasks::contacts::sort_contacts(&state).await.unwrap();

    let sorted: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("contacts-sorted.json")).unwrap())
            .unwrap();
    let contacts = sorted.as_array().unwrap();
    assert_eq!(contacts[0]["last_name"], "A");
    assert_eq!(contacts[1]["last_name"], "B");
}

#[tokio::test]
async fn contacts_with_equal_last_names_sort_by_first_name() {
    let dir = TempDir::new().unwrap();
    let state = test_state(&dir);

    std::fs::write(
        dir.path().join("contacts.json"),
        r#"[{"last_name":"A","first_name":"Z"},{"last_name":"A","first_name":"Y"}]"#,
    )
    .unwrap();

    tasks::contacts::sort_contacts(&state).await.unwrap();

    let sorted: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("contacts-sorted.json")).unwrap())
            .unwrap();
    let contacts = sorted.as_array().unwrap();
    assert_eq!(contacts[0]["first_name"], "Y");
    assert_eq!(contacts[1]["first_name"], "Z");
}

#[tokio::test]
async fn missing_log_files_fail_without_writing_output() {
    let dir = TempDir::new().unwrap();
    let state = test_state(&dir);

    // logs/ exists but holds no .log files.
    std::fs::create_dir(dir.path().join("logs")).unwrap();
    std::fs::write(dir.path().join("logs/readme.txt"), "not a log").unwrap();

    let err = tasks::logs::recent_log_first_lines(&state).await.unwrap_err();
    assert!(matches!(err, TaskError::BadInput(_)));
    assert!(!dir.path().join("logs-recent.txt").exists());
}

#[tokio::test]
async fn log_first_lines_are_ordered_newest_first() {
    let dir = TempDir::new().unwrap();
    let state = test_state(&dir);

    let logs_dir = dir.path().join("logs");
    std::fs::create_dir(&logs_dir).unwrap();

    std::fs::write(logs_dir.join("old.log"), "old first line\nold second").unwrap();
    std::thread::sleep(Duration::from_millis(25));
    std::fs::write(logs_dir.join("new.log"), "new first line\nnew second").unwrap();

    tasks::logs::recent_log_first_lines(&state).await.unwrap();

    let written = std::fs::read_to_string(dir.path().join("logs-recent.txt")).unwrap();
    assert_eq!(written, "new first line\nold first line");
}

#[tokio::test]
async fn docs_index_maps_relative_paths_to_h1_titles() {
    let dir = TempDir::new().unwrap();
    let state = test_state(&dir);

    let docs_dir = dir.path().join("docs");
    std::fs::create_dir_all(docs_dir.join("sub")).unwrap();
    std::fs::write(docs_dir.join("alpha.md"), "# Alpha Title\n\nBody.").unwrap();
    std::fs::write(docs_dir.join("sub/beta.md"), "intro line\n# Beta Title\n").unwrap();
    std::fs::write(docs_dir.join("no-heading.md"), "just text, no heading").unwrap();

    tasks::docs::build_docs_index(&state).await.unwrap();

    let index: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(docs_dir.join("index.json")).unwrap())
            .unwrap();
    assert_eq!(index["alpha.md"], "Alpha Title");
    assert_eq!(index["sub/beta.md"], "Beta Title");
    assert!(index.get("no-heading.md").is_none());
}

#[tokio::test]
async fn gold_ticket_sales_sums_units_times_price() {
    let dir = TempDir::new().unwrap();
    let state = test_state(&dir);

    let db_path = dir.path().join("ticket-sales.db");
    let conn = rusqlite::Connection::open(&db_path).unwrap();
    conn.execute(
        "CREATE TABLE tickets (type TEXT, units INTEGER, price REAL)",
        [],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO tickets (type, units, price) VALUES
         ('Gold', 2, 5.0), ('Gold', 1, 10.0), ('Silver', 4, 100.0)",
        [],
    )
    .unwrap();
    drop(conn);

    tasks::sales::gold_ticket_sales(&state).await.unwrap();

    let written = std::fs::read_to_string(dir.path().join("ticket-sales-gold.txt")).unwrap();
    assert_eq!(written, "20");
}

#[tokio::test]
async fn gold_ticket_sales_with_no_gold_rows_writes_zero() {
    let dir = TempDir::new().unwrap();
    let state = test_state(&dir);

    let db_path = dir.path().join("ticket-sales.db");
    let conn = rusqlite::Connection::open(&db_path).unwrap();
    conn.execute(
        "CREATE TABLE tickets (type TEXT, units INTEGER, price REAL)",
        [],
    )
    .unwrap();
    drop(conn);

    tasks::sales::gold_ticket_sales(&state).await.unwrap();

    let written = std::fs::read_to_string(dir.path().join("ticket-sales-gold.txt")).unwrap();
    assert_eq!(written, "0");
}

#[tokio::test]
async fn fewer_than_two_comments_is_a_bad_input_error() {
    let dir = TempDir::new().unwrap();
    let state = test_state(&dir);

    std::fs::write(dir.path().join("comments.txt"), "only one comment\n").unwrap();

    let err = tasks::similar::most_similar_comments(&state)
        .await
        .unwrap_err();
    assert!(matches!(err, TaskError::BadInput(_)));
}

#[tokio::test]
async fn datagen_without_user_email_is_a_bad_input_error() {
    let dir = TempDir::new().unwrap();
    let state = test_state(&dir);

    let err = tasks::shell::run_datagen(&state).await.unwrap_err();
    assert!(matches!(err, TaskError::BadInput(_)));
}

#[tokio::test]
async fn format_without_target_file_is_a_bad_input_error() {
    let dir = TempDir::new().unwrap();
    let state = test_state(&dir);

    let err = tasks::shell::format_markdown(&state).await.unwrap_err();
    assert!(matches!(err, TaskError::BadInput(_)));
}
