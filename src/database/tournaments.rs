use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, params};

use super::models::Tournament;
use crate::domain::models::TournamentType;
use crate::errors::AppError;

pub fn insert_tournament(
    conn: &Connection,
    date: NaiveDate,
    tournament_type: TournamentType,
    flavor: Option<&str>,
) -> Result<Tournament, AppError> {
    let sql = "INSERT INTO tournaments (date, type, flavor) VALUES (?1, ?2, ?3) RETURNING id, date, type, flavor, created_at";

    conn.query_row(
        sql,
        params![date, tournament_type.as_str(), flavor],
        parse_tournament_row,
    )
    .map_err(AppError::from)
}

/// Overwrites date, type and flavor. Returns the number of rows affected;
/// zero means the id does not exist.
pub fn update_tournament(
    conn: &Connection,
    id: i64,
    date: NaiveDate,
    tournament_type: TournamentType,
    flavor: Option<&str>,
) -> Result<usize, AppError> {
    let sql = "UPDATE tournaments SET date = ?1, type = ?2, flavor = ?3 WHERE id = ?4";

    conn.execute(sql, params![date, tournament_type.as_str(), flavor, id])
        .map_err(AppError::from)
}

/// Returns the number of rows affected; zero means the id does not exist.
/// Entry rows go with the tournament via the schema cascade.
pub fn delete_tournament(conn: &Connection, id: i64) -> Result<usize, AppError> {
    let sql = "DELETE FROM tournaments WHERE id = ?1";

    conn.execute(sql, params![id]).map_err(AppError::from)
}

pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Tournament>, AppError> {
    let sql = "SELECT id, date, type, flavor, created_at FROM tournaments WHERE id = ?1";

    conn.query_row(sql, params![id], parse_tournament_row)
        .optional()
        .map_err(AppError::from)
}

pub fn list_all(conn: &Connection) -> Result<Vec<Tournament>, AppError> {
    let sql = "SELECT id, date, type, flavor, created_at FROM tournaments ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_tournament_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

fn parse_tournament_row(row: &rusqlite::Row) -> rusqlite::Result<Tournament> {
    let type_str: String = row.get(2)?;
    let tournament_type = TournamentType::parse(&type_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            2,
            rusqlite::types::Type::Text,
            format!("unknown tournament type: {type_str}").into(),
        )
    })?;

    Ok(Tournament {
        id: row.get(0)?,
        date: row.get(1)?,
        tournament_type,
        flavor: row.get(3)?,
        created_at: row.get(4)?,
    })
}
