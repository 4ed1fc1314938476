use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::database::models::{EntryWithPlayer, Tournament};
use crate::domain::models::{PlacementGroups, TournamentSubmission};
use crate::errors::AppError;

/// Create/update request body. Required fields stay optional here so their
/// absence surfaces as a `Validation` outcome instead of a decode failure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentPayload {
    pub date: Option<String>,
    #[serde(rename = "type")]
    pub tournament_type: Option<String>,
    #[serde(default)]
    pub flavor: Option<String>,
    pub participants: Option<Vec<String>>,
    pub placements: Option<PlacementGroups>,
}

impl TournamentPayload {
    pub fn into_submission(self) -> Result<TournamentSubmission, AppError> {
        let date = self.date.ok_or_else(|| missing_field("date"))?;
        let tournament_type = self.tournament_type.ok_or_else(|| missing_field("type"))?;
        let participants = self.participants.ok_or_else(|| missing_field("participants"))?;
        let placements = self.placements.ok_or_else(|| missing_field("placements"))?;

        TournamentSubmission::new(&date, &tournament_type, self.flavor, participants, placements)
    }
}

fn missing_field(field: &str) -> AppError {
    AppError::Validation(format!("missing field: {field}"))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentListItem {
    pub id: i64,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub tournament_type: String,
    pub flavor: Option<String>,
    pub participants: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentDetail {
    pub id: i64,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub tournament_type: String,
    pub flavor: Option<String>,
    pub participants: Vec<String>,
    pub placements: PlacementGroups,
}

impl TournamentDetail {
    pub fn from_rows(tournament: Tournament, entry_rows: &[EntryWithPlayer]) -> Self {
        let participants = entry_rows
            .iter()
            .map(|e| e.player_name.clone())
            .collect();
        let placements = PlacementGroups::from_ranked(
            entry_rows
                .iter()
                .map(|e| (e.player_name.as_str(), e.placement)),
        );

        Self {
            id: tournament.id,
            date: tournament.date,
            tournament_type: tournament.tournament_type.as_str().to_string(),
            flavor: tournament.flavor,
            participants,
            placements,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentCreated {
    pub tournament_id: i64,
}
