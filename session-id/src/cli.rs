use clap::Parser;
use clap::ValueHint;
use std::path::PathBuf;

/// UserPromptSubmit hook that injects the current session id into the
/// model's context when the prompt asks for it.
#[derive(Parser, Debug, Default, Clone)]
#[command(version)]
pub struct Cli {
    /// Take the event payload from this JSON string instead of stdin.
    #[arg(
        long = "payload",
        value_name = "JSON",
        conflicts_with = "payload_file"
    )]
    pub payload: Option<String>,

    /// Read the event payload from this file instead of stdin. The file is
    /// removed after a successful read.
    #[arg(long = "payload-file", value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub payload_file: Option<PathBuf>,
}
