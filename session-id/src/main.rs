use std::process::ExitCode;

use clap::Parser;
use hook_session_id::Cli;

fn main() -> ExitCode {
    hook_session_id::run_main(Cli::parse())
}
