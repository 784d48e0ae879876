use hook_protocol::UserPromptSubmitEvent;

/// Renders the block the host merges into the model's context for the
/// current turn. The leading and trailing newlines are part of the format.
///
/// A missing and an empty `session_id` render the same `NOT_FOUND` marker;
/// a missing `cwd` renders `N/A` but an empty one is echoed as-is.
pub(crate) fn render_additional_context(event: &UserPromptSubmitEvent) -> String {
    let session_id = if event.session_id.is_empty() {
        "NOT_FOUND"
    } else {
        event.session_id.as_str()
    };
    let cwd = event.cwd.as_deref().unwrap_or("N/A");
    let tools_count = event.tools_count();

    format!(
        r#"
SESSION ID RETRIEVED
====================
The current session ID is: {session_id}

This session ID can be used to:
- Resume this conversation later: claude -r "{session_id}"
- Track this session in telemetry
- Reference in documentation (todo.md, event-stream.md, workbook.md)

Full hook payload for debugging:
- cwd: {cwd}
- tools_count: {tools_count}
"#
    )
}
