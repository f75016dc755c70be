//! Plan model parsing
//!
//! Turns a YAML training-plan document into a typed `TrainingPlan`:
//! plan name, start-of-week weekday, race anchors, the library of weekly
//! day-patterns keyed by arity, and the authored weeks in order.
//!
//! Only the weekday token and workout shapes are checked here. Structural
//! problems beyond missing keys surface during schedule resolution.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::PlanError;
use crate::models::workout::describe_value;
use crate::models::{RaceAnchor, WorkoutDescriptor};

/// Week token meaning "no training this week".
pub const SKIP_TOKEN: &str = "skip";

/// ---------------------------------------------------------------------------
/// Document Keywords
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanKey {
  PlanName,
  WeeklyStartDay,
  Races,
  RaceDate,
  WeeklySchedules,
  TrainingPlan,
}

impl PlanKey {
  /// Accepted spellings, canonical first.
  pub fn spellings(&self) -> &'static [&'static str] {
    match self {
      Self::PlanName => &["Plan Name", "PlanName", "Event"],
      Self::WeeklyStartDay => &["Weekly Start Day", "WeeklyStartDay"],
      Self::Races => &["Races"],
      Self::RaceDate => &["Race Date", "RaceDate"],
      Self::WeeklySchedules => &["Weekly Schedules", "WeeklySchedules"],
      Self::TrainingPlan => &["Training Plan", "TrainingPlan"],
    }
  }

  pub fn as_str(&self) -> &'static str {
    self.spellings()[0]
  }

  fn lookup<'a>(&self, document: &'a Mapping) -> Option<&'a Value> {
    self
      .spellings()
      .iter()
      .find_map(|spelling| document.get(*spelling))
  }

  fn require<'a>(&self, document: &'a Mapping) -> Result<&'a Value, PlanError> {
    self.lookup(document).ok_or(PlanError::MissingKey(self.as_str()))
  }
}

/// ---------------------------------------------------------------------------
/// Weekdays
/// ---------------------------------------------------------------------------

const WEEKDAY_PREFIXES: [&str; 7] = ["mon", "tue", "wed", "thu", "fri", "sat", "sun"];

/// Map a weekday word to its ordinal (Monday = 0). Missing means Monday.
pub fn weekday_ordinal(token: Option<&str>) -> Result<u32, PlanError> {
  let Some(token) = token else {
    return Ok(0);
  };

  let prefix: String = token.to_lowercase().chars().take(3).collect();
  WEEKDAY_PREFIXES
    .iter()
    .position(|candidate| *candidate == prefix)
    .map(|ordinal| ordinal as u32)
    .ok_or_else(|| PlanError::UnknownWeekday(token.to_string()))
}

/// ---------------------------------------------------------------------------
/// Weekly Templates
/// ---------------------------------------------------------------------------

/// A week's rest/active layout plus the workouts for its active days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekTemplate {
  pub pattern: Vec<bool>,
  pub workouts: Vec<Option<WorkoutDescriptor>>,
}

impl WeekTemplate {
  /// `rest` entries become rest days; everything else is an active day.
  pub fn from_entries(entries: &[Option<WorkoutDescriptor>]) -> Self {
    let mut pattern = Vec::with_capacity(entries.len());
    let mut workouts = Vec::new();

    for entry in entries {
      let is_rest = entry.as_ref().is_some_and(WorkoutDescriptor::is_rest);
      pattern.push(!is_rest);
      if !is_rest {
        workouts.push(entry.clone());
      }
    }

    Self { pattern, workouts }
  }

  /// Number of active days.
  pub fn arity(&self) -> usize {
    self.workouts.len()
  }
}

/// One authored week of the training plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrainingWeek {
  Skip,
  Entries(Vec<Option<WorkoutDescriptor>>),
}

/// ---------------------------------------------------------------------------
/// Training Plan
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingPlan {
  pub name: String,
  pub start_weekday: u32,
  /// Document order; description lines follow it.
  pub races: Vec<RaceAnchor>,
  pub end_date: NaiveDate,
  /// Arity -> day pattern.
  pub schedules: BTreeMap<usize, Vec<bool>>,
  pub weeks: Vec<TrainingWeek>,
}

impl TrainingPlan {
  /// Load from a YAML file
  pub fn load_from_file(path: &Path) -> Result<Self, PlanError> {
    let content = std::fs::read_to_string(path).map_err(|e| PlanError::io(path, e))?;
    Self::from_yaml_str(&content)
  }

  /// Load from a YAML string
  pub fn from_yaml_str(yaml: &str) -> Result<Self, PlanError> {
    let document: Value = serde_yaml::from_str(yaml)?;
    Self::from_document(&document)
  }

  pub fn from_document(document: &Value) -> Result<Self, PlanError> {
    let document = document.as_mapping().ok_or_else(|| PlanError::InvalidValue {
      key: "document",
      reason: "expected a mapping at the top level".to_string(),
    })?;

    let name = expect_str(PlanKey::PlanName, PlanKey::PlanName.require(document)?)?.to_string();

    let start_weekday = match PlanKey::WeeklyStartDay.lookup(document) {
      None | Some(Value::Null) => weekday_ordinal(None)?,
      Some(value) => weekday_ordinal(Some(expect_str(PlanKey::WeeklyStartDay, value)?))?,
    };

    let race_date = match PlanKey::RaceDate.lookup(document) {
      None | Some(Value::Null) => None,
      Some(value) => Some(parse_date(PlanKey::RaceDate, value)?),
    };

    let races = match PlanKey::Races.lookup(document) {
      Some(value) => parse_races(value)?,
      // Single-race documents name the race after the plan.
      None => match race_date {
        Some(date) => vec![RaceAnchor::new(name.clone(), date)],
        None => return Err(PlanError::MissingKey(PlanKey::Races.as_str())),
      },
    };

    let end_date = match race_date.or_else(|| races.iter().map(|race| race.date).max()) {
      Some(date) => date,
      None => {
        return Err(PlanError::InvalidValue {
          key: PlanKey::Races.as_str(),
          reason: "at least one race is required".to_string(),
        })
      }
    };

    let schedules = parse_schedules(PlanKey::WeeklySchedules.require(document)?)?;
    let weeks = parse_weeks(PlanKey::TrainingPlan.require(document)?)?;

    log::debug!(
      "parsed plan '{}': {} races, {} schedules, {} weeks, ending {}",
      name,
      races.len(),
      schedules.len(),
      weeks.len(),
      end_date
    );

    Ok(Self {
      name,
      start_weekday,
      races,
      end_date,
      schedules,
      weeks,
    })
  }

  /// The race held on `date`, if any.
  pub fn race_on(&self, date: NaiveDate) -> Option<&RaceAnchor> {
    self.races.iter().find(|race| race.date == date)
  }
}

/// ---------------------------------------------------------------------------
/// Section Parsers
/// ---------------------------------------------------------------------------

fn parse_races(value: &Value) -> Result<Vec<RaceAnchor>, PlanError> {
  let key = PlanKey::Races;
  let entries: Vec<&Mapping> = match value {
    Value::Sequence(items) => items
      .iter()
      .map(|item| {
        item.as_mapping().ok_or_else(|| PlanError::InvalidValue {
          key: key.as_str(),
          reason: format!("expected `race name: date`, got {}", describe_value(item)),
        })
      })
      .collect::<Result<_, _>>()?,
    Value::Mapping(map) => vec![map],
    other => {
      return Err(PlanError::InvalidValue {
        key: key.as_str(),
        reason: format!("expected a list of races, got {}", describe_value(other)),
      })
    }
  };

  let mut races = Vec::new();
  for map in entries {
    for (race_name, race_date) in map {
      races.push(RaceAnchor::new(
        expect_str(key, race_name)?,
        parse_date(key, race_date)?,
      ));
    }
  }

  Ok(races)
}

fn parse_schedules(value: &Value) -> Result<BTreeMap<usize, Vec<bool>>, PlanError> {
  let mut schedules = BTreeMap::new();
  for template in expect_sequence(PlanKey::WeeklySchedules, value)? {
    let entries = parse_entries(expect_sequence(PlanKey::WeeklySchedules, template)?)?;
    let template = WeekTemplate::from_entries(&entries);
    // Later templates of the same arity replace earlier ones.
    schedules.insert(template.arity(), template.pattern);
  }
  Ok(schedules)
}

fn parse_weeks(value: &Value) -> Result<Vec<TrainingWeek>, PlanError> {
  expect_sequence(PlanKey::TrainingPlan, value)?
    .iter()
    .map(|week| match week {
      Value::String(token) if token == SKIP_TOKEN => Ok(TrainingWeek::Skip),
      Value::Sequence(entries) => Ok(TrainingWeek::Entries(parse_entries(entries)?)),
      other => Err(PlanError::UnknownWorkout(describe_value(other))),
    })
    .collect()
}

fn parse_entries(values: &[Value]) -> Result<Vec<Option<WorkoutDescriptor>>, PlanError> {
  values.iter().map(WorkoutDescriptor::from_yaml).collect()
}

fn expect_sequence(key: PlanKey, value: &Value) -> Result<&[Value], PlanError> {
  value
    .as_sequence()
    .map(Vec::as_slice)
    .ok_or_else(|| PlanError::InvalidValue {
      key: key.as_str(),
      reason: format!("expected a list, got {}", describe_value(value)),
    })
}

fn expect_str(key: PlanKey, value: &Value) -> Result<&str, PlanError> {
  value.as_str().ok_or_else(|| PlanError::InvalidValue {
    key: key.as_str(),
    reason: format!("expected text, got {}", describe_value(value)),
  })
}

fn parse_date(key: PlanKey, value: &Value) -> Result<NaiveDate, PlanError> {
  NaiveDate::deserialize(value).map_err(|e| PlanError::InvalidValue {
    key: key.as_str(),
    reason: format!("{} is not a YYYY-MM-DD date: {}", describe_value(value), e),
  })
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
