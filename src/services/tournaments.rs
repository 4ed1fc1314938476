use crate::database::connection::{DbConn, run_in_transaction};
use crate::database::models::{EntryWithPlayer, Tournament};
use crate::database::{entries, tournaments};
use crate::errors::AppError;
use crate::domain::models::TournamentSubmission;
use crate::services::reconciliation::reconcile_entries;

/// Inserts the tournament row and reconciles its entries as one unit.
/// Returns the new tournament id.
pub fn create_tournament(
    conn: &mut DbConn,
    submission: &TournamentSubmission,
) -> Result<i64, AppError> {
    run_in_transaction(conn, |tx| {
        let tournament = tournaments::insert_tournament(
            tx,
            submission.date,
            submission.tournament_type,
            submission.flavor.as_deref(),
        )?;
        reconcile_entries(tx, tournament.id, submission)?;
        Ok(tournament.id)
    })
}

/// Full replace: overwrites the tournament row, drops every prior entry and
/// rebuilds the entry set from the submission, as one unit. Zero rows
/// affected by the row update means the id does not exist.
pub fn update_tournament(
    conn: &mut DbConn,
    id: i64,
    submission: &TournamentSubmission,
) -> Result<(), AppError> {
    run_in_transaction(conn, |tx| {
        let affected = tournaments::update_tournament(
            tx,
            id,
            submission.date,
            submission.tournament_type,
            submission.flavor.as_deref(),
        )?;
        if affected == 0 {
            return Err(AppError::NotFound(id));
        }

        entries::delete_for_tournament(tx, id)?;
        reconcile_entries(tx, id, submission)?;
        Ok(())
    })
}

/// Deletes the tournament row; its entries cascade away with it.
pub fn delete_tournament(conn: &mut DbConn, id: i64) -> Result<(), AppError> {
    let affected = tournaments::delete_tournament(conn, id)?;
    if affected == 0 {
        return Err(AppError::NotFound(id));
    }

    Ok(())
}

pub fn get_tournament(
    conn: &mut DbConn,
    id: i64,
) -> Result<(Tournament, Vec<EntryWithPlayer>), AppError> {
    let tournament = tournaments::find_by_id(conn, id)?.ok_or(AppError::NotFound(id))?;
    let entry_rows = entries::list_for_tournament(conn, id)?;

    Ok((tournament, entry_rows))
}

pub fn list_tournaments(conn: &mut DbConn) -> Result<Vec<Tournament>, AppError> {
    tournaments::list_all(conn)
}
