use clap::error::ErrorKind;
use clap::Parser;
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::PlanError;

/// ---------------------------------------------------------------------------
/// Configuration Constants
/// ---------------------------------------------------------------------------

const OUTPUT_DIR_VAR: &str = "TRAINING_CALENDAR_OUTPUT_DIR";
const USAGE: &str = "Usage: training-calendar [training plan file]";

/// ---------------------------------------------------------------------------
/// Command Line
/// ---------------------------------------------------------------------------

#[derive(Debug, Parser)]
#[command(name = "training-calendar")]
#[command(version)]
#[command(about = "Turn a race-anchored YAML training plan into an iCalendar file")]
pub struct Cli {
  /// Training plan file (YAML)
  pub plan: PathBuf,
}

impl Cli {
  /// Parse arguments. `Ok(None)` means help or version was printed.
  pub fn from_args<I, T>(args: I) -> Result<Option<Self>, PlanError>
  where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
  {
    match Self::try_parse_from(args) {
      Ok(cli) => Ok(Some(cli)),
      Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
        let _ = e.print();
        Ok(None)
      }
      Err(e) => {
        log::debug!("argument error: {}", e);
        Err(PlanError::Usage(USAGE.to_string()))
      }
    }
  }
}

/// ---------------------------------------------------------------------------
/// Environment
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarConfig {
  pub output_dir: Option<PathBuf>,
}

impl CalendarConfig {
  pub fn from_env() -> Self {
    Self {
      output_dir: non_empty_var(OUTPUT_DIR_VAR).map(PathBuf::from),
    }
  }

  /// The plan path with its extension swapped for `.ics`, relocated into
  /// the output directory when one is configured.
  pub fn output_path(&self, plan_path: &Path) -> PathBuf {
    let target = plan_path.with_extension("ics");
    match (&self.output_dir, target.file_name()) {
      (Some(dir), Some(file_name)) => dir.join(file_name),
      _ => target,
    }
  }
}

fn non_empty_var(name: &str) -> Option<String> {
  env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
