//! Cursor operations over a single line of `.ini` source.
//!
//! Every function takes the line and a byte offset into it and returns the advanced offset,
//! so no state is carried between calls.

/// Inline comment delimiter.
pub(crate) const COMMENT: char = ';';

/// Token extraction policy for [`extract_token`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct TokenOptions {
    /// If `false`, any whitespace character terminates the token (in addition to the terminator).
    /// If `true`, whitespace is part of the token; unquoted tokens are trimmed at both ends.
    pub allow_space: bool,
    /// If `true` and the token starts with the terminator, the token is quoted:
    /// it extends to the matching closing terminator, which must be present,
    /// and is returned verbatim.
    pub quote: bool,
    /// If `false`, a token without any non-whitespace characters fails extraction.
    pub allow_empty: bool,
    /// If `true`, an unquoted token also ends at the comment delimiter (`';'`).
    pub stop_at_comment: bool,
}

/// Skips the whitespace starting at byte offset `pos` in the `line`.
///
/// Returns the first non-whitespace character (which is not consumed), or `None` if the end
/// of the line was reached, and the new offset.
pub fn skip_space(line: &str, pos: usize) -> (Option<char>, usize) {
    for (offset, c) in line[pos..].char_indices() {
        if !c.is_whitespace() {
            return (Some(c), pos + offset);
        }
    }

    (None, line.len())
}

/// Extracts a token starting at byte offset `pos` in the `line`, ending at the `term`inator
/// character or the end of the line, according to the `options`.
///
/// Returns the token, or `None` if the `options` reject it, and the new offset.
/// The new offset points just past the closing terminator for quoted tokens,
/// at the character which ended the token (or the end of the line) otherwise.
pub fn extract_token(
    line: &str,
    pos: usize,
    term: char,
    options: TokenOptions,
) -> (Option<&str>, usize) {
    let quoted = options.quote && line[pos..].starts_with(term);

    let (start, allow_space) = if quoted {
        (pos + term.len_utf8(), true)
    } else {
        (pos, options.allow_space)
    };

    let mut end = line.len();
    let mut terminated = false;

    for (offset, c) in line[start..].char_indices() {
        if c == term {
            end = start + offset;
            terminated = true;
            break;
        }

        if (!allow_space && c.is_whitespace())
            || (!quoted && options.stop_at_comment && c == COMMENT)
        {
            end = start + offset;
            break;
        }
    }

    if quoted {
        // Unterminated quoted string.
        if !terminated {
            return (None, end);
        }

        let token = &line[start..end];
        let pos = end + term.len_utf8();

        if token.trim().is_empty() && !options.allow_empty {
            return (None, pos);
        }

        return (Some(token), pos);
    }

    let token = line[start..end].trim();

    if token.is_empty() && !options.allow_empty {
        return (None, end);
    }

    (Some(token), end)
}
