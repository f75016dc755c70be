use std::path::PathBuf;

/// ---------------------------------------------------------------------------
/// Error Handling
/// ---------------------------------------------------------------------------

/// Every failure is fatal for a run; `lib::run` prints it and exits with 1.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
  #[error("{0}")]
  Usage(String),

  #[error("Failed to access {path}: {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Failed to parse training plan: {0}")]
  Yaml(#[from] serde_yaml::Error),

  #[error("Missing key in training plan: {0}")]
  MissingKey(&'static str),

  #[error("Invalid value for {key}: {reason}")]
  InvalidValue { key: &'static str, reason: String },

  #[error("Unknown word in weekly start date: {0}")]
  UnknownWeekday(String),

  #[error("Unknown object in training plan: {0}")]
  UnknownWorkout(String),

  /// Only reachable from a hand-built `TrainingPlan`: parsed library patterns
  /// and ad-hoc templates always carry one workout per active slot.
  #[error("Week {week} schedules {expected} workouts but only lists {found}")]
  NotEnoughWorkouts {
    week: usize,
    expected: usize,
    found: usize,
  },

  /// A week pattern with more than seven slots. Each week keeps a fixed
  /// seven-day cadence, so the extra slots would land in the next week.
  #[error("Week {week} has {days} days; a week holds at most 7")]
  WeekTooLong { week: usize, days: usize },
}

impl PlanError {
  pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
    Self::Io {
      path: path.into(),
      source,
    }
  }
}
