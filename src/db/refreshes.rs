use crate::errors::ServerError;
use rusqlite::{params, Connection};

pub fn start_refresh_run(conn: &Connection, mode: &str, now: i64) -> Result<i64, ServerError> {
    conn.execute(
        "INSERT INTO refresh_runs (mode, started_at, success) VALUES (?, ?, 0)",
        params![mode, now],
    )
    .map_err(|e| ServerError::DbError(e.to_string()))?;
    Ok(conn.last_insert_rowid())
}

pub fn end_refresh_run(
    conn: &Connection,
    run_id: i64,
    now: i64,
    sources: usize,
    saved: usize,
    success: bool,
    error: Option<String>,
) -> Result<(), ServerError> {
    conn.execute(
        "UPDATE refresh_runs SET finished_at = ?, sources_fetched = ?, listings_saved = ?, success = ?, error_message = ? WHERE id = ?",
        params![now, sources, saved, success, error, run_id],
    ).map_err(|e| ServerError::DbError(e.to_string()))?;
    Ok(())
}
