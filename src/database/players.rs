use rusqlite::{Connection, OptionalExtension, params};

use super::models::Player;
use crate::errors::AppError;

/// Player directory lookup: returns the existing player for `name`, or
/// inserts a fresh row on first sighting. Matching is on the exact string;
/// no normalization is performed.
pub fn resolve_player(conn: &Connection, name: &str) -> Result<Player, AppError> {
    if let Some(existing) = find_by_name(conn, name)? {
        return Ok(existing);
    }

    insert_new_player(conn, name)
}

pub fn find_by_name(conn: &Connection, name: &str) -> Result<Option<Player>, AppError> {
    let sql = "SELECT id, name, created_at FROM players WHERE name = ?1";

    conn.query_row(sql, params![name], parse_player_row)
        .optional()
        .map_err(AppError::from)
}

fn insert_new_player(conn: &Connection, name: &str) -> Result<Player, AppError> {
    let sql = "INSERT INTO players (name) VALUES (?1) RETURNING id, name, created_at";

    conn.query_row(sql, params![name], parse_player_row)
        .map_err(AppError::from)
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        name: row.get(1)?,
        created_at: row.get(2)?,
    })
}
