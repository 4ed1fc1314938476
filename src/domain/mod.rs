pub mod models;

pub use models::{PlacementGroups, Rank, TournamentSubmission, TournamentType};
