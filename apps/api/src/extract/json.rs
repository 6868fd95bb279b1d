//! Best-effort extraction of a JSON object from free-form LLM output.

use serde_json::Value;

/// Returns the first brace-delimited JSON object in `text`, if one parses.
///
/// Takes the span from the first `{` to the last `}` (greedy, spanning
/// newlines), so completions wrapped in prose or markdown fences still
/// yield the inner object. Any failure (no braces, malformed JSON, a
/// truncated completion) returns `None`; callers decide how to surface it.
pub fn extract_json(text: &str) -> Option<Value> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    serde_json::from_str(&text[start..=end]).ok()
}
