//! Wire types shared between hook binaries and the host pipeline.
//!
//! The host delivers one JSON event object on the hook's stdin and reads an
//! optional JSON response object from its stdout. These types pin down both
//! shapes; the field names on the wire are the host's, not ours.

mod event;
mod output;

pub use event::UserPromptSubmitEvent;
pub use output::HookOutput;
pub use output::HookSpecificOutput;
pub use output::USER_PROMPT_SUBMIT_EVENT;
