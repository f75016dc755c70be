use std::process::ExitCode;

fn main() -> ExitCode {
  training_calendar_lib::run()
}
