/// Phrases that mark a prompt as a request for the session id. Matching is
/// deliberately a plain substring scan over the lower-cased prompt, not
/// word-boundary matching: "what is my session duration" matches on
/// "what is my session". The bracketed variants let users trigger the hook
/// explicitly without phrasing a question.
const TRIGGER_PHRASES: [&str; 7] = [
    "<session id>",
    "<this session>",
    "session id",
    "retrieve session",
    "get session",
    "current session id",
    "what is my session",
];

/// Returns true when the prompt contains any trigger phrase. The scan
/// short-circuits on the first hit; the response does not depend on which
/// phrase matched.
pub(crate) fn prompt_requests_session_id(prompt: &str) -> bool {
    let prompt = prompt.to_ascii_lowercase();
    TRIGGER_PHRASES.iter().any(|phrase| prompt.contains(phrase))
}
