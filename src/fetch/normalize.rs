//! Body normalization.

/// Undo the upstream escaping convention: every literal `\n` becomes a
/// newline, then every literal `\"` becomes `"`.
///
/// Two independent global passes with no knowledge of the surrounding
/// syntax, so an escaped sequence inside embedded script text is rewritten
/// too.
pub fn normalize(body: &str) -> String {
    body.replace("\\n", "\n").replace("\\\"", "\"")
}
