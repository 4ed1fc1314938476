use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TournamentType {
    Single,
    Team,
}

impl TournamentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TournamentType::Single => "single",
            TournamentType::Team => "team",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "single" => Some(TournamentType::Single),
            "team" => Some(TournamentType::Team),
            _ => None,
        }
    }
}

/// Placement rank. The set is closed: a participant either holds one of the
/// three podium spots or has no placement at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rank {
    First,
    Second,
    Third,
}

impl Rank {
    pub fn value(self) -> i64 {
        match self {
            Rank::First => 1,
            Rank::Second => 2,
            Rank::Third => 3,
        }
    }

    pub fn from_value(value: i64) -> Option<Self> {
        match value {
            1 => Some(Rank::First),
            2 => Some(Rank::Second),
            3 => Some(Rank::Third),
            _ => None,
        }
    }
}

/// The three placement groups of a submission. Group membership is a set;
/// order within a group carries no meaning.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementGroups {
    #[serde(default)]
    pub first_place: Vec<String>,
    #[serde(default)]
    pub second_place: Vec<String>,
    #[serde(default)]
    pub third_place: Vec<String>,
}

impl PlacementGroups {
    fn ordered_groups(&self) -> [(Rank, &[String]); 3] {
        [
            (Rank::First, self.first_place.as_slice()),
            (Rank::Second, self.second_place.as_slice()),
            (Rank::Third, self.third_place.as_slice()),
        ]
    }

    /// Resolves a name to its rank by scanning the groups in podium order.
    /// A name listed in more than one group takes the best rank (documented
    /// tie-break, not an error); a name in no group has no placement.
    pub fn rank_of(&self, name: &str) -> Option<Rank> {
        self.ordered_groups()
            .into_iter()
            .find(|(_, names)| names.iter().any(|n| n == name))
            .map(|(rank, _)| rank)
    }

    /// Rebuilds the groups from stored (name, rank) pairs.
    pub fn from_ranked<'a, I>(ranked: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, Option<Rank>)>,
    {
        let mut groups = Self::default();
        for (name, rank) in ranked {
            match rank {
                Some(Rank::First) => groups.first_place.push(name.to_string()),
                Some(Rank::Second) => groups.second_place.push(name.to_string()),
                Some(Rank::Third) => groups.third_place.push(name.to_string()),
                None => {}
            }
        }
        groups
    }
}

/// A validated create/update payload. Constructing one is the only
/// validation step; everything past this point may assume well-formed input.
#[derive(Debug, Clone)]
pub struct TournamentSubmission {
    pub date: NaiveDate,
    pub tournament_type: TournamentType,
    pub flavor: Option<String>,
    pub participants: Vec<String>,
    pub placements: PlacementGroups,
}

impl TournamentSubmission {
    pub fn new(
        date: &str,
        tournament_type: &str,
        flavor: Option<String>,
        participants: Vec<String>,
        placements: PlacementGroups,
    ) -> Result<Self, AppError> {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| {
            AppError::Validation(format!("invalid date '{date}', expected YYYY-MM-DD"))
        })?;

        let tournament_type = TournamentType::parse(tournament_type).ok_or_else(|| {
            AppError::Validation(format!(
                "invalid tournament type '{tournament_type}', expected 'single' or 'team'"
            ))
        })?;

        if participants.is_empty() {
            return Err(AppError::Validation(
                "a tournament must have participants".to_string(),
            ));
        }

        if participants.iter().any(|name| name.is_empty()) {
            return Err(AppError::Validation(
                "participant names must not be empty".to_string(),
            ));
        }

        Ok(Self {
            date,
            tournament_type,
            flavor,
            participants,
            placements,
        })
    }

    /// Participant names with duplicates collapsed, first occurrence wins.
    /// Identical strings resolve to the same player id anyway, so the entry
    /// set is built from the distinct names only.
    pub fn distinct_participants(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.participants
            .iter()
            .map(String::as_str)
            .filter(|name| seen.insert(*name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups(first: &[&str], second: &[&str], third: &[&str]) -> PlacementGroups {
        let to_owned = |names: &[&str]| names.iter().map(|n| n.to_string()).collect();
        PlacementGroups {
            first_place: to_owned(first),
            second_place: to_owned(second),
            third_place: to_owned(third),
        }
    }

    #[test]
    fn test_rank_resolution() {
        let placements = groups(&["Alice"], &["Bob"], &["Carol"]);

        assert_eq!(placements.rank_of("Alice"), Some(Rank::First));
        assert_eq!(placements.rank_of("Bob"), Some(Rank::Second));
        assert_eq!(placements.rank_of("Carol"), Some(Rank::Third));
        assert_eq!(placements.rank_of("Dave"), None);
    }

    #[test]
    fn test_rank_resolution_prefers_best_group() {
        let placements = groups(&["Alice"], &["Alice"], &[]);

        assert_eq!(placements.rank_of("Alice"), Some(Rank::First));
    }

    #[test]
    fn test_rank_resolution_is_case_sensitive() {
        let placements = groups(&["Alice"], &[], &[]);

        assert_eq!(placements.rank_of("alice"), None);
    }

    #[test]
    fn test_submission_rejects_bad_date() {
        let result = TournamentSubmission::new(
            "01-01-2025",
            "single",
            None,
            vec!["Alice".to_string()],
            PlacementGroups::default(),
        );

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_submission_rejects_unknown_type() {
        let result = TournamentSubmission::new(
            "2025-01-01",
            "doubles",
            None,
            vec!["Alice".to_string()],
            PlacementGroups::default(),
        );

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_submission_rejects_empty_participants() {
        let result = TournamentSubmission::new(
            "2025-01-01",
            "single",
            None,
            vec![],
            PlacementGroups::default(),
        );

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_distinct_participants_keeps_first_occurrence() {
        let submission = TournamentSubmission::new(
            "2025-01-01",
            "single",
            None,
            vec![
                "Alice".to_string(),
                "Bob".to_string(),
                "Alice".to_string(),
            ],
            PlacementGroups::default(),
        )
        .unwrap();

        assert_eq!(submission.distinct_participants(), vec!["Alice", "Bob"]);
    }
}
