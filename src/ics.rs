//! iCalendar export
//!
//! Serializes resolved training events as a VCALENDAR: one all-day VEVENT per
//! event, spanning its date to the next day.

use chrono::{DateTime, Duration, Utc};
use icalendar::{Calendar, Component, Event, EventLike};
use std::path::Path;

use crate::error::PlanError;
use crate::models::TrainingEvent;

/// ---------------------------------------------------------------------------
/// Configuration Constants
/// ---------------------------------------------------------------------------

const UID_DOMAIN: &str = "training-calendar";

/// ---------------------------------------------------------------------------
/// Rendering
/// ---------------------------------------------------------------------------

/// Build the calendar. `stamp` becomes every event's DTSTAMP.
pub fn build_calendar(events: &[TrainingEvent], stamp: DateTime<Utc>) -> Calendar {
  let mut calendar = Calendar::new();

  for (index, event) in events.iter().enumerate() {
    let uid = format!("{}-{}@{}", event.date.format("%Y%m%d"), index, UID_DOMAIN);
    calendar.push(
      Event::new()
        .summary(&event.title)
        .description(&event.description)
        .all_day(event.date)
        .ends(event.date + Duration::days(1))
        .timestamp(stamp)
        .uid(&uid)
        .done(),
    );
  }

  calendar.done()
}

/// Render the calendar as iCalendar text.
pub fn render_calendar(events: &[TrainingEvent], stamp: DateTime<Utc>) -> String {
  build_calendar(events, stamp).to_string()
}

/// Render and write the calendar to `path`.
pub fn write_calendar(path: &Path, events: &[TrainingEvent], stamp: DateTime<Utc>) -> Result<(), PlanError> {
  let contents = render_calendar(events, stamp);
  std::fs::write(path, contents).map_err(|e| PlanError::io(path, e))?;
  log::info!("wrote {} events to {}", events.len(), path.display());
  Ok(())
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
