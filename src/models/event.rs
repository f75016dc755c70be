use chrono::NaiveDate;
use std::fmt;

/// One dated calendar entry produced by schedule resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingEvent {
  pub date: NaiveDate,
  pub title: String,
  pub description: String,
}

impl TrainingEvent {
  pub fn new(date: NaiveDate, title: impl Into<String>, description: impl Into<String>) -> Self {
    Self {
      date,
      title: title.into(),
      description: description.into(),
    }
  }
}

impl fmt::Display for TrainingEvent {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}: {}, {})", self.date, self.title, self.description)
  }
}
