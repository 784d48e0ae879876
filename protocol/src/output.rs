use serde::Deserialize;
use serde::Serialize;

/// Event name the host expects in `hookEventName` for prompt-submit hooks.
pub const USER_PROMPT_SUBMIT_EVENT: &str = "UserPromptSubmit";

/// Response envelope the host reads from the hook's stdout. The host keys
/// off `hookSpecificOutput.hookEventName` to decide how to interpret the
/// rest, so the tag is fixed per hook kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookOutput {
    pub hook_specific_output: HookSpecificOutput,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookSpecificOutput {
    pub hook_event_name: String,
    pub additional_context: String,
}

impl HookOutput {
    /// Wraps `additional_context` in a `UserPromptSubmit` envelope.
    pub fn user_prompt_submit(additional_context: String) -> Self {
        Self {
            hook_specific_output: HookSpecificOutput {
                hook_event_name: USER_PROMPT_SUBMIT_EVENT.to_string(),
                additional_context,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn serializes_with_host_field_names() {
        let output = HookOutput::user_prompt_submit("ctx".to_string());
        let json = serde_json::to_string(&output).unwrap();
        assert_eq!(
            json,
            r#"{"hookSpecificOutput":{"hookEventName":"UserPromptSubmit","additionalContext":"ctx"}}"#
        );
    }

    #[test]
    fn round_trips() {
        let output = HookOutput::user_prompt_submit("line one\nline two".to_string());
        let json = serde_json::to_string(&output).unwrap();
        let parsed: HookOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, output);
    }
}
