use crate::database::connection::DbPool;

pub mod tournaments;

#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
}
