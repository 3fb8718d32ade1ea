//! Payload cleanup steps
//!
//! Each function is idempotent and allocation-free; the pipeline threads a
//! shrinking borrowed slice through them.

/// Strip markdown code fences from either end of the payload.
///
/// Handles a complete fenced block (opening delimiter with or without a
/// language tag, with or without a final newline before the closing
/// delimiter) as well as a stray fence token on only one end, which is what
/// truncated responses produce.
pub(crate) fn strip_code_fences(input: &str) -> &str {
    let mut s = input.trim();
    if let Some(rest) = s.strip_prefix("```") {
        // A language tag sits directly after the opening backticks
        s = rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric());
    }
    if let Some(rest) = s.strip_suffix("```") {
        s = rest;
    }
    s.trim()
}

/// Byte offset of the earlier of the first `{` or `[`, if either exists.
pub(crate) fn find_json_start(s: &str) -> Option<usize> {
    match (s.find('{'), s.find('[')) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}

/// Cut trailing prose after the JSON value.
///
/// First attempts a string-aware depth scan for the true terminator. When
/// the payload never closes (mid-value truncation), falls back to cutting at
/// the last closing delimiter, which tolerates trailing commentary but is
/// lossy when the commentary itself contains brace or bracket characters.
pub(crate) fn truncate_trailing_prose(s: &str) -> &str {
    match balanced_end(s) {
        Some(end) => &s[..end],
        None => {
            let close = if s.starts_with('{') { '}' } else { ']' };
            match s.rfind(close) {
                Some(i) => &s[..i + close.len_utf8()],
                None => s,
            }
        }
    }
}

/// Byte offset one past the delimiter that closes the value opening at
/// byte 0, skipping delimiters inside JSON strings. `None` when the value
/// never closes.
fn balanced_end(s: &str) -> Option<usize> {
    let (open, close) = match s.chars().next()? {
        '{' => ('{', '}'),
        '[' => ('[', ']'),
        _ => return None,
    };

    let mut depth: usize = 0;
    let mut in_string = false;
    let mut escaped = false;
    for (i, c) in s.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        if c == '"' {
            in_string = true;
        } else if c == open {
            depth += 1;
        } else if c == close {
            depth = depth.saturating_sub(1);
            if depth == 0 {
                return Some(i + c.len_utf8());
            }
        }
    }
    None
}
