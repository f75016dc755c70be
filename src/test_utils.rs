//! Test utilities and helpers for unit testing
//!
//! This module provides common test infrastructure including:
//! - Plan document fixtures
//! - Mock plan factories
//! - Date helpers

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::models::{RaceAnchor, WorkoutDescriptor};
use crate::plan::{TrainingPlan, TrainingWeek};

/// ---------------------------------------------------------------------------
/// Plan Fixtures
/// ---------------------------------------------------------------------------

/// Six weeks counting down to a half (2024-05-01) and a full (2024-06-01).
///
/// Weeks start on Monday 2024-04-22; week 3 is skipped, week 6 is read as its
/// own template because no library schedule has six entries.
pub const TWO_RACE_PLAN: &str = r#"
Plan Name: Spring Build
Weekly Start Day: Monday
Races:
  - Half Marathon: 2024-05-01
  - Full Marathon: 2024-06-01
Weekly Schedules:
  - [rest, Easy, Tempo, rest, Easy, rest, Long]
  - [rest, Easy, rest, Easy, rest, rest, Long]
Training Plan:
  - [Easy, Tempo, Easy, Long]
  - [Easy, Tempo, Easy, Long]
  - skip
  - [Easy, Easy, Long]
  - [Easy, [Tempo, 20 min at threshold], Easy, Long]
  - [rest, Easy, rest, Easy, rest, Race]
"#;

/// ---------------------------------------------------------------------------
/// Factories
/// ---------------------------------------------------------------------------

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

pub fn plain(label: &str) -> WorkoutDescriptor {
  WorkoutDescriptor::Plain(label.to_string())
}

pub fn plain_entries(labels: &[&str]) -> Vec<Option<WorkoutDescriptor>> {
  labels.iter().map(|label| Some(plain(label))).collect()
}

/// Plan named "Test Plan", weeks starting Monday, ending on the last race,
/// with an empty schedule library.
pub fn mock_plan(races: Vec<RaceAnchor>, weeks: Vec<TrainingWeek>) -> TrainingPlan {
  let end_date = races
    .iter()
    .map(|race| race.date)
    .max()
    .expect("mock plan needs a race");

  TrainingPlan {
    name: "Test Plan".to_string(),
    start_weekday: 0,
    races,
    end_date,
    schedules: BTreeMap::new(),
    weeks,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_two_race_fixture_parses() {
    let plan = TrainingPlan::from_yaml_str(TWO_RACE_PLAN).unwrap();
    assert_eq!(plan.weeks.len(), 6);
    assert_eq!(plan.end_date, date(2024, 6, 1));
  }

  #[test]
  fn test_mock_plan_ends_on_last_race() {
    let plan = mock_plan(
      vec![
        RaceAnchor::new("B", date(2024, 6, 1)),
        RaceAnchor::new("A", date(2024, 5, 1)),
      ],
      vec![TrainingWeek::Skip],
    );
    assert_eq!(plan.end_date, date(2024, 6, 1));
    assert!(plan.schedules.is_empty());
  }
}
