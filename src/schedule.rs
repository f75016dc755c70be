//! Schedule resolution
//!
//! Walks the authored weeks backwards from the plan's end date to find the
//! first training day, then forwards one calendar day per slot, emitting a
//! `TrainingEvent` for every active day on or before the end date.
//!
//! Key rules:
//! - The last authored week contains the end date
//! - Every week occupies seven days, including `skip` weeks
//! - Nothing is emitted after the end date
//! - Race days override the scheduled workout title

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::PlanError;
use crate::models::{RaceAnchor, TrainingEvent, WorkoutDescriptor};
use crate::plan::{TrainingPlan, TrainingWeek, WeekTemplate};

/// Trailing line of every description, after the plan name.
pub const DESCRIPTION_FOOTER: &str = "Training Calendar Generator";

const DAYS_PER_WEEK: usize = 7;

/// ---------------------------------------------------------------------------
/// Anchor Computation
/// ---------------------------------------------------------------------------

/// First day of the first authored week.
///
/// Steps back from `end_date` by its weekday index plus the plan's start
/// weekday, then by one whole week for every authored week before the last.
pub fn first_week_start(end_date: NaiveDate, start_weekday: u32, week_count: usize) -> NaiveDate {
  let into_week = i64::from(end_date.weekday().num_days_from_monday() + start_weekday);
  let earlier_weeks = week_count.saturating_sub(1) as i64;
  end_date - Duration::days(into_week) - Duration::weeks(earlier_weeks)
}

/// ---------------------------------------------------------------------------
/// Resolution
/// ---------------------------------------------------------------------------

/// Resolve every authored week into dated events, ascending by date.
pub fn resolve(plan: &TrainingPlan) -> Result<Vec<TrainingEvent>, PlanError> {
  let mut week_start = first_week_start(plan.end_date, plan.start_weekday, plan.weeks.len());
  let mut events = Vec::new();

  log::debug!(
    "resolving '{}' from {} through {} ({} weeks)",
    plan.name,
    week_start,
    plan.end_date,
    plan.weeks.len()
  );

  for (index, week) in plan.weeks.iter().enumerate() {
    let week_number = index + 1;

    match week {
      TrainingWeek::Skip => {
        log::debug!("week {} ({}) skipped", week_number, week_start);
      }
      TrainingWeek::Entries(entries) => {
        let template = week_template(plan, entries);
        resolve_week(plan, week_number, week_start, &template, &mut events)?;
      }
    }

    week_start += Duration::days(DAYS_PER_WEEK as i64);
  }

  Ok(events)
}

/// A week whose entry count matches a library arity takes that pattern and
/// uses its entries verbatim; otherwise it is read as its own template.
fn week_template(plan: &TrainingPlan, entries: &[Option<WorkoutDescriptor>]) -> WeekTemplate {
  match plan.schedules.get(&entries.len()) {
    Some(pattern) => WeekTemplate {
      pattern: pattern.clone(),
      workouts: entries.to_vec(),
    },
    None => WeekTemplate::from_entries(entries),
  }
}

/// Emit one week's events. A pattern longer than seven days is rejected
/// rather than spilling into the following week.
fn resolve_week(
  plan: &TrainingPlan,
  week_number: usize,
  week_start: NaiveDate,
  template: &WeekTemplate,
  events: &mut Vec<TrainingEvent>,
) -> Result<(), PlanError> {
  if template.pattern.len() > DAYS_PER_WEEK {
    return Err(PlanError::WeekTooLong {
      week: week_number,
      days: template.pattern.len(),
    });
  }

  let expected = template.pattern.iter().filter(|active| **active).count();
  let mut workouts = template.workouts.iter();

  for (offset, active) in template.pattern.iter().enumerate() {
    if !active {
      continue;
    }

    let workout = workouts.next().ok_or(PlanError::NotEnoughWorkouts {
      week: week_number,
      expected,
      found: template.workouts.len(),
    })?;

    let day = week_start + Duration::days(offset as i64);
    if let Some(event) = resolve_day(plan, week_number, day, workout.as_ref())? {
      events.push(event);
    }
  }

  Ok(())
}

fn resolve_day(
  plan: &TrainingPlan,
  week_number: usize,
  day: NaiveDate,
  workout: Option<&WorkoutDescriptor>,
) -> Result<Option<TrainingEvent>, PlanError> {
  if day > plan.end_date {
    log::debug!("dropping {} after end date {}", day, plan.end_date);
    return Ok(None);
  }

  if let Some(race) = plan.race_on(day) {
    let note = workout.map(|w| format!("{} per plan", w.label()));
    let description = compose_description(&plan.name, &plan.races, week_number, day, note.as_deref());
    return Ok(Some(TrainingEvent::new(day, format!("Race Day: {}", race.name), description)));
  }

  let workout = workout.ok_or_else(|| PlanError::UnknownWorkout("null".to_string()))?;
  let description = compose_description(&plan.name, &plan.races, week_number, day, workout.note());
  Ok(Some(TrainingEvent::new(day, format!("{} Run", workout.label()), description)))
}

/// ---------------------------------------------------------------------------
/// Descriptions
/// ---------------------------------------------------------------------------

/// Build an event description: optional note, week number, one countdown
/// line per race still ahead of `event_date`, then the footer.
pub fn compose_description(
  plan_name: &str,
  races: &[RaceAnchor],
  week_number: usize,
  event_date: NaiveDate,
  extra_note: Option<&str>,
) -> String {
  let mut lines = Vec::new();

  if let Some(note) = extra_note {
    lines.push(note.to_string());
    lines.push(String::new());
  }

  lines.push(format!("Week {}", week_number));

  for race in races.iter().filter(|race| race.date > event_date) {
    let remaining = (race.date - event_date).num_days();
    lines.push(format!(
      "{} until {} (as of {})",
      format_time_remaining(remaining),
      race.name,
      event_date
    ));
  }

  lines.push(format!("{} / {}", plan_name, DESCRIPTION_FOOTER));
  lines.join("\n")
}

/// `3 weeks`, `1 week, 2 days`, `5 days`, `1 day`, `0 days`.
pub fn format_time_remaining(days: i64) -> String {
  let weeks = days.div_euclid(7);
  let remainder = days.rem_euclid(7);

  let mut parts = Vec::new();
  match weeks {
    w if w > 1 => parts.push(format!("{} weeks", w)),
    1 => parts.push("1 week".to_string()),
    _ => {}
  }
  match remainder {
    d if d > 1 => parts.push(format!("{} days", d)),
    1 => parts.push("1 day".to_string()),
    _ => {}
  }

  if parts.is_empty() {
    "0 days".to_string()
  } else {
    parts.join(", ")
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
