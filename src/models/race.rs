use chrono::NaiveDate;

/// A race the plan counts down to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaceAnchor {
  pub name: String,
  pub date: NaiveDate,
}

impl RaceAnchor {
  pub fn new(name: impl Into<String>, date: NaiveDate) -> Self {
    Self {
      name: name.into(),
      date,
    }
  }
}
