use rusqlite::Connection;

use crate::database::{entries, players};
use crate::domain::models::TournamentSubmission;
use crate::errors::AppError;

/// Synchronizes the player directory and the entry set of one tournament
/// with a submitted participant/placement payload.
///
/// Runs inside the caller's transaction; the tournament row must already
/// exist there. For an update the caller deletes the prior entries first —
/// the writes made here are the complete new state, not a merge.
pub fn reconcile_entries(
    conn: &Connection,
    tournament_id: i64,
    submission: &TournamentSubmission,
) -> Result<(), AppError> {
    for name in submission.distinct_participants() {
        let player = players::resolve_player(conn, name)?;
        let placement = submission.placements.rank_of(name);
        entries::insert_entry(conn, tournament_id, player.id, placement)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::connection::{DbConn, create_memory_pool, run_in_transaction};
    use crate::database::{setup, tournaments};
    use crate::domain::models::{PlacementGroups, Rank};

    fn test_conn() -> DbConn {
        let pool = create_memory_pool().unwrap();
        let mut conn = pool.get().unwrap();
        setup::init_database(&mut conn).unwrap();
        conn
    }

    fn submission(participants: &[&str], first_place: &[&str]) -> TournamentSubmission {
        TournamentSubmission::new(
            "2025-01-01",
            "single",
            None,
            participants.iter().map(|n| n.to_string()).collect(),
            PlacementGroups {
                first_place: first_place.iter().map(|n| n.to_string()).collect(),
                ..PlacementGroups::default()
            },
        )
        .unwrap()
    }

    fn reconcile(conn: &mut DbConn, submission: &TournamentSubmission) -> i64 {
        run_in_transaction(conn, |tx| {
            let tournament = tournaments::insert_tournament(
                tx,
                submission.date,
                submission.tournament_type,
                None,
            )?;
            reconcile_entries(tx, tournament.id, submission)?;
            Ok(tournament.id)
        })
        .unwrap()
    }

    #[test]
    fn test_writes_one_entry_per_participant() {
        let mut conn = test_conn();
        let submission = submission(&["Alice", "Bob"], &["Alice"]);

        let tournament_id = reconcile(&mut conn, &submission);

        let rows = entries::list_for_tournament(&conn, tournament_id).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].player_name, "Alice");
        assert_eq!(rows[0].placement, Some(Rank::First));
        assert_eq!(rows[1].player_name, "Bob");
        assert_eq!(rows[1].placement, None);
    }

    #[test]
    fn test_duplicate_names_collapse_to_one_entry() {
        let mut conn = test_conn();
        let submission = submission(&["Alice", "Alice", "Bob"], &[]);

        let tournament_id = reconcile(&mut conn, &submission);

        let rows = entries::list_for_tournament(&conn, tournament_id).unwrap();
        assert_eq!(rows.len(), 2);

        let player_count: i64 = conn
            .query_row("SELECT COUNT(*) FROM players", [], |row| row.get(0))
            .unwrap();
        assert_eq!(player_count, 2);
    }

    #[test]
    fn test_directory_resolution_is_idempotent_across_tournaments() {
        let mut conn = test_conn();

        let first = reconcile(&mut conn, &submission(&["Alice", "Bob"], &[]));
        let second = reconcile(&mut conn, &submission(&["Alice", "Carol"], &[]));

        let alice_in_first = entries::list_for_tournament(&conn, first)
            .unwrap()
            .into_iter()
            .find(|e| e.player_name == "Alice")
            .unwrap();
        let alice_in_second = entries::list_for_tournament(&conn, second)
            .unwrap()
            .into_iter()
            .find(|e| e.player_name == "Alice")
            .unwrap();

        assert_eq!(alice_in_first.player_id, alice_in_second.player_id);

        let alice_rows: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM players WHERE name = 'Alice'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(alice_rows, 1);
    }
}
