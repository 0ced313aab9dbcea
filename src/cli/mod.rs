//! Command-line interface layer.
//!
//! ## Module Structure
//!
//! - `args`: clap argument definitions
//! - `run`: one invocation from configuration to output
//! - `report`: user-facing output lines
//! - `exit_status`: process exit codes
//! - `logging`: diagnostics subscriber setup

mod args;
mod exit_status;
mod logging;
pub mod report;
mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;
pub use logging::{LOG_ENV, init_logging};
pub use run::default_output_path;

/// Run the CLI and map any failure to an exit status after reporting it.
pub fn run_cli(args: Arguments) -> ExitStatus {
    match run::run(args) {
        Ok(status) => status,
        Err(err) => {
            report::print_error(&err);
            ExitStatus::from_error(&err)
        }
    }
}
