// The host pipeline treats everything on stdout as the hook response, so
// the serialized envelope must be the only thing ever written there. All
// diagnostics go to stderr.
#![deny(clippy::print_stdout)]

mod cli;
mod context;
mod triggers;

pub use cli::Cli;

use std::io::Read;
use std::io::Write;
use std::process::ExitCode;

use anyhow::Context as _;
use anyhow::Result;
use hook_protocol::HookOutput;
use hook_protocol::UserPromptSubmitEvent;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Runs the hook end to end and always reports success to the host.
///
/// The hook is a best-effort enrichment step in the host's prompt pipeline
/// and must never block or fail it: malformed input, a prompt with no
/// trigger phrase, and I/O errors all resolve to the same observable
/// outcome of "no output, exit 0".
pub fn run_main(cli: Cli) -> ExitCode {
    init_logging();

    if let Err(err) = run(cli) {
        debug!("suppressing hook error: {err:#}");
    }
    ExitCode::SUCCESS
}

/// Diagnostics are opt-in via `RUST_LOG` and land on stderr, which the
/// host ignores.
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    let raw = read_payload(cli)?;
    let Some(output) = evaluate(&raw)? else {
        return Ok(());
    };

    let json = serde_json::to_string(&output).context("failed to serialize hook output")?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}").context("failed to write hook output to stdout")?;
    Ok(())
}

/// Decides whether the event warrants a response. Parse failures bubble up
/// as errors so the caller can map every failure to the same silent
/// outcome; a well-formed event without a trigger phrase is `Ok(None)`.
pub fn evaluate(raw: &str) -> Result<Option<HookOutput>> {
    let event: UserPromptSubmitEvent =
        serde_json::from_str(raw).context("failed to parse hook payload JSON")?;

    if !triggers::prompt_requests_session_id(&event.prompt) {
        return Ok(None);
    }

    Ok(Some(HookOutput::user_prompt_submit(
        context::render_additional_context(&event),
    )))
}

fn read_payload(cli: Cli) -> Result<String> {
    if let Some(payload) = cli.payload {
        return Ok(payload);
    }

    if let Some(path) = cli.payload_file {
        let payload = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read payload file at {}", path.display()))?;
        // Best-effort cleanup to avoid cluttering temp directories.
        let _ = std::fs::remove_file(&path);
        return Ok(payload);
    }

    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("failed to read payload from stdin")?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use super::*;
    use hook_protocol::USER_PROMPT_SUBMIT_EVENT;
    use pretty_assertions::assert_eq;

    #[test]
    fn matching_prompt_produces_an_envelope() {
        let output = evaluate(r#"{"session_id":"abc-123","prompt":"What is my session id?"}"#)
            .unwrap()
            .expect("trigger phrase should produce output");

        assert_eq!(
            output.hook_specific_output.hook_event_name,
            USER_PROMPT_SUBMIT_EVENT
        );
        assert!(
            output
                .hook_specific_output
                .additional_context
                .contains("abc-123")
        );
    }

    #[test]
    fn non_matching_prompt_produces_nothing() {
        assert_eq!(evaluate(r#"{"prompt":"hello world"}"#).unwrap(), None);
    }

    #[test]
    fn empty_event_produces_nothing() {
        assert_eq!(evaluate("{}").unwrap(), None);
    }

    #[test]
    fn malformed_payload_is_an_error() {
        assert!(evaluate("not valid json at all").is_err());
    }

    #[test]
    fn wrong_typed_payload_is_an_error() {
        assert!(evaluate(r#"{"prompt":["not","a","string"]}"#).is_err());
    }
}
