pub mod connection;
pub mod entries;
pub mod models;
pub mod players;
pub mod setup;
pub mod tournaments;

pub use connection::{DbConn, DbPool, create_pool, get_connection, run_in_transaction};
pub use models::*;
