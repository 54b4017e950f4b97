//! Escape Sequence Processing
//!
//! Recognized escapes: `\n`, `\r`, `\t`, `\\`, `\"`, `\'`

/// Resolve a single escape character to its replacement.
#[inline]
pub(crate) fn resolve_escape(c: char) -> Option<char> {
    match c {
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        '\\' => Some('\\'),
        '"' => Some('"'),
        '\'' => Some('\''),
        _ => None,
    }
}

/// Process string escape sequences.
///
/// Invalid escapes are preserved literally (`\q` stays `\q`).
pub(crate) fn unescape_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some(esc) => {
                if let Some(resolved) = resolve_escape(esc) {
                    result.push(resolved);
                } else {
                    result.push('\\');
                    result.push(esc);
                }
            }
            None => result.push('\\'),
        }
    }

    result
}

#[cfg(test)]
mod tests;
