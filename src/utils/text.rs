//! Small text helpers shared by listings and thread summaries

/// Marker appended to truncated previews
pub const ELLIPSIS: &str = "...";

/// Truncates `text` to at most `limit` characters, appending [`ELLIPSIS`] when
/// anything was cut
///
/// Counts Unicode scalar values, so multi-byte text is never split mid-character.
///
/// # Examples
///
/// ```
/// use cc_session_viewer::utils::text::truncate_with_ellipsis;
///
/// assert_eq!(truncate_with_ellipsis("hello", 10), "hello");
/// assert_eq!(truncate_with_ellipsis("hello world", 5), "hello...");
/// ```
pub fn truncate_with_ellipsis(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
        None => text.to_string(),
    }
}

/// Replaces control characters (ANSI escapes included) before text reaches a terminal
///
/// Tabs and newlines survive; everything else in the control range becomes a space,
/// which defuses escape sequences without changing character positions.
pub fn sanitize_for_terminal(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() && c != '\n' && c != '\t' { ' ' } else { c })
        .collect()
}
