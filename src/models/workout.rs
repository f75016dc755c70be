use serde::Deserialize;
use serde_yaml::Value;

use crate::error::PlanError;

/// Token marking a rest day inside a weekly template.
pub const REST_TOKEN: &str = "rest";

/// What an active day asks the athlete to do.
///
/// Deserializes from `Long`, `[Long, note]`, `{Long: note}` or
/// `{0: Long, 1: note}`; any other shape is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Value")]
pub enum WorkoutDescriptor {
  /// `Long`
  Plain(String),
  /// `[Long, "10 miles, last 2 at goal pace"]` or `{Long: "..."}`
  Noted { label: String, note: String },
}

impl WorkoutDescriptor {
  pub fn label(&self) -> &str {
    match self {
      Self::Plain(label) => label,
      Self::Noted { label, .. } => label,
    }
  }

  pub fn note(&self) -> Option<&str> {
    match self {
      Self::Plain(_) => None,
      Self::Noted { note, .. } => Some(note),
    }
  }

  /// A plain `rest` entry (any case) marks a rest day in a template.
  pub fn is_rest(&self) -> bool {
    matches!(self, Self::Plain(label) if label.to_lowercase() == REST_TOKEN)
  }

  /// Parse one week entry. YAML null is an empty slot and yields `None`.
  pub fn from_yaml(value: &Value) -> Result<Option<Self>, PlanError> {
    Option::<Self>::deserialize(value).map_err(|_| unknown(value))
  }

  fn noted(label: &str, note: &str) -> Self {
    Self::Noted {
      label: label.to_string(),
      note: note.to_string(),
    }
  }
}

impl TryFrom<Value> for WorkoutDescriptor {
  type Error = PlanError;

  fn try_from(value: Value) -> Result<Self, Self::Error> {
    match &value {
      Value::String(label) => Ok(Self::Plain(label.clone())),
      Value::Sequence(items) if items.len() == 2 => match (&items[0], &items[1]) {
        (Value::String(label), Value::String(note)) => Ok(Self::noted(label, note)),
        _ => Err(unknown(&value)),
      },
      Value::Mapping(map) if map.len() == 1 => match map.iter().next() {
        Some((Value::String(label), Value::String(note))) => Ok(Self::noted(label, note)),
        _ => Err(unknown(&value)),
      },
      Value::Mapping(map) if map.len() == 2 => {
        match (map.get(Value::from(0)), map.get(Value::from(1))) {
          (Some(Value::String(label)), Some(Value::String(note))) => Ok(Self::noted(label, note)),
          _ => Err(unknown(&value)),
        }
      }
      _ => Err(unknown(&value)),
    }
  }
}

/// Render an offending YAML value on one line for diagnostics.
pub fn describe_value(value: &Value) -> String {
  match serde_yaml::to_string(value) {
    Ok(text) => text.trim().replace('\n', " "),
    Err(_) => format!("{:?}", value),
  }
}

fn unknown(value: &Value) -> PlanError {
  PlanError::UnknownWorkout(describe_value(value))
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
