use axum::{Router, routing::get};
use std::sync::Arc;

use crate::api::handlers::{
    AppState,
    tournaments::{
        create_tournament, delete_tournament, get_tournament_detail, list_tournaments,
        update_tournament,
    },
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/api/tournaments",
            get(list_tournaments).post(create_tournament),
        )
        .route(
            "/api/tournaments/:id",
            get(get_tournament_detail)
                .put(update_tournament)
                .delete(delete_tournament),
        )
        .with_state(state)
}
