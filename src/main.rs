use std::process::ExitCode;

use clap::Parser;
use srgen::cli::{Arguments, init_logging, run_cli};

fn main() -> ExitCode {
    let args = Arguments::parse();
    init_logging(args.verbose);
    run_cli(args).into()
}
