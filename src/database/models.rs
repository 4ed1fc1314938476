use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::models::{Rank, TournamentType};

#[derive(Debug, Clone)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone)]
pub struct Tournament {
    pub id: i64,
    pub date: NaiveDate,
    pub tournament_type: TournamentType,
    pub flavor: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone)]
pub struct Entry {
    pub id: i64,
    pub tournament_id: i64,
    pub player_id: i64,
    pub placement: Option<Rank>,
    pub created_at: Option<NaiveDateTime>,
}

// DTO for joined queries
#[derive(Debug, Clone)]
pub struct EntryWithPlayer {
    pub entry_id: i64,
    pub player_id: i64,
    pub player_name: String,
    pub placement: Option<Rank>,
}
