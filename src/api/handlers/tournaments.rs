use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::AppState;
use crate::api::models::{
    TournamentCreated, TournamentDetail, TournamentListItem, TournamentPayload,
};
use crate::database::{self, entries};
use crate::errors::AppError;
use crate::services;

pub async fn list_tournaments(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = database::get_connection(&state.pool)?;
    let tournaments = services::tournaments::list_tournaments(&mut conn)?;

    let mut items = Vec::with_capacity(tournaments.len());
    for tournament in tournaments {
        let entry_rows = entries::list_for_tournament(&conn, tournament.id)?;
        let names: Vec<&str> = entry_rows.iter().map(|e| e.player_name.as_str()).collect();

        items.push(TournamentListItem {
            id: tournament.id,
            date: tournament.date,
            tournament_type: tournament.tournament_type.as_str().to_string(),
            flavor: tournament.flavor,
            participants: names.join(", "),
        });
    }

    Ok(Json(items))
}

pub async fn get_tournament_detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<TournamentDetail>, AppError> {
    let mut conn = database::get_connection(&state.pool)?;
    let (tournament, entry_rows) = services::tournaments::get_tournament(&mut conn, id)?;

    Ok(Json(TournamentDetail::from_rows(tournament, &entry_rows)))
}

pub async fn create_tournament(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<TournamentPayload>,
) -> Result<impl IntoResponse, AppError> {
    let submission = payload.into_submission()?;

    let mut conn = database::get_connection(&state.pool)?;
    let tournament_id = services::tournaments::create_tournament(&mut conn, &submission)?;
    log::info!("Created tournament {tournament_id}");

    Ok((StatusCode::CREATED, Json(TournamentCreated { tournament_id })))
}

pub async fn update_tournament(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(payload): Json<TournamentPayload>,
) -> Result<Json<TournamentDetail>, AppError> {
    let submission = payload.into_submission()?;

    let mut conn = database::get_connection(&state.pool)?;
    services::tournaments::update_tournament(&mut conn, id, &submission)?;
    log::info!("Updated tournament {id}");

    let (tournament, entry_rows) = services::tournaments::get_tournament(&mut conn, id)?;
    Ok(Json(TournamentDetail::from_rows(tournament, &entry_rows)))
}

pub async fn delete_tournament(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let mut conn = database::get_connection(&state.pool)?;
    services::tournaments::delete_tournament(&mut conn, id)?;
    log::info!("Deleted tournament {id}");

    Ok(StatusCode::NO_CONTENT)
}
