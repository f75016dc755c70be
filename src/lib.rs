//! Training calendar generator
//!
//! Reads a YAML training plan anchored to one or more race dates, resolves
//! every scheduled workout to a calendar date, and writes an `.ics` file.

mod config;
mod error;
mod ics;
mod models;
mod plan;
mod schedule;

#[cfg(test)]
mod test_utils;

pub use config::{CalendarConfig, Cli};
pub use error::PlanError;
pub use ics::{build_calendar, render_calendar, write_calendar};
pub use models::{RaceAnchor, TrainingEvent, WorkoutDescriptor};
pub use plan::{PlanKey, TrainingPlan, TrainingWeek, WeekTemplate};
pub use schedule::{compose_description, format_time_remaining, resolve};

use chrono::Utc;
use env_logger::Env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

pub fn run() -> ExitCode {
  // Load environment variables from .env file
  dotenvy::dotenv().ok();

  let _ = env_logger::Builder::from_env(Env::default().default_filter_or("warn")).try_init();

  let cli = match Cli::from_args(std::env::args_os()) {
    Ok(Some(cli)) => cli,
    Ok(None) => return ExitCode::SUCCESS,
    Err(e) => return bail(&e),
  };

  match generate(&cli.plan, &CalendarConfig::from_env()) {
    Ok(_) => ExitCode::SUCCESS,
    Err(e) => bail(&e),
  }
}

/// Load, resolve, report and export one plan. Returns the written path.
pub fn generate(plan_path: &Path, config: &CalendarConfig) -> Result<PathBuf, PlanError> {
  let plan = TrainingPlan::load_from_file(plan_path)?;
  let events = resolve(&plan)?;

  println!("{}", plan.name);
  println!("{} events found", events.len());
  for event in &events {
    println!("{}", event);
  }

  let output_path = config.output_path(plan_path);
  write_calendar(&output_path, &events, Utc::now())?;

  Ok(output_path)
}

fn bail(err: &PlanError) -> ExitCode {
  println!("[ERROR]: {}", err);
  ExitCode::from(1)
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
