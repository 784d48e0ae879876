use serde::Deserialize;
use serde_json::Value;

/// Payload the host pipeline writes to the hook's stdin when the user
/// submits a prompt. The host sends more fields than these; unrecognized
/// ones are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPromptSubmitEvent {
    /// Opaque per-conversation identifier. Never parsed, only echoed back.
    #[serde(default)]
    pub session_id: String,

    /// The user's submitted prompt text.
    #[serde(default)]
    pub prompt: String,

    /// Working directory of the host session, if it reported one.
    #[serde(default)]
    pub cwd: Option<String>,

    /// Tools the host has enabled for this session. Only the length is
    /// meaningful to hooks, and hosts disagree on the element shape, so
    /// this stays an untyped value. Counts as zero unless it is an array.
    #[serde(default)]
    pub allowed_tools: Value,
}

impl UserPromptSubmitEvent {
    pub fn tools_count(&self) -> usize {
        self.allowed_tools.as_array().map_or(0, Vec::len)
    }
}
