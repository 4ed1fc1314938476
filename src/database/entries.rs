use rusqlite::{Connection, params};

use super::models::{Entry, EntryWithPlayer};
use crate::domain::models::Rank;
use crate::errors::AppError;

pub fn insert_entry(
    conn: &Connection,
    tournament_id: i64,
    player_id: i64,
    placement: Option<Rank>,
) -> Result<Entry, AppError> {
    let sql = "INSERT INTO entries (tournament_id, player_id, placement) VALUES (?1, ?2, ?3) RETURNING id, tournament_id, player_id, placement, created_at";

    conn.query_row(
        sql,
        params![tournament_id, player_id, placement.map(Rank::value)],
        parse_entry_row,
    )
    .map_err(AppError::from)
}

pub fn delete_for_tournament(conn: &Connection, tournament_id: i64) -> Result<usize, AppError> {
    let sql = "DELETE FROM entries WHERE tournament_id = ?1";

    conn.execute(sql, params![tournament_id])
        .map_err(AppError::from)
}

/// Entries for one tournament joined with player names, in insertion order.
pub fn list_for_tournament(
    conn: &Connection,
    tournament_id: i64,
) -> Result<Vec<EntryWithPlayer>, AppError> {
    let sql = "
        SELECT e.id, e.player_id, p.name, e.placement
        FROM entries e
        JOIN players p ON e.player_id = p.id
        WHERE e.tournament_id = ?1
        ORDER BY e.id
    ";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![tournament_id], |row| {
            let placement: Option<i64> = row.get(3)?;
            Ok(EntryWithPlayer {
                entry_id: row.get(0)?,
                player_id: row.get(1)?,
                player_name: row.get(2)?,
                placement: placement.and_then(Rank::from_value),
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn count_for_tournament(conn: &Connection, tournament_id: i64) -> Result<i64, AppError> {
    let sql = "SELECT COUNT(*) FROM entries WHERE tournament_id = ?1";

    conn.query_row(sql, params![tournament_id], |row| row.get(0))
        .map_err(AppError::from)
}

fn parse_entry_row(row: &rusqlite::Row) -> rusqlite::Result<Entry> {
    let placement: Option<i64> = row.get(3)?;
    Ok(Entry {
        id: row.get(0)?,
        tournament_id: row.get(1)?,
        player_id: row.get(2)?,
        placement: placement.and_then(Rank::from_value),
        created_at: row.get(4)?,
    })
}
