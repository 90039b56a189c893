//! Source location mapping
//!
//! Maps a match's byte offset and length within a content buffer to 1-based
//! line and column positions. Columns are only defined for single-line
//! matches; a match spanning a line break (a PEM block, say) carries lines
//! but no columns.

/// Resolved location of one match within a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceSpan {
    /// 1-based line the match starts on
    pub start_line: usize,
    /// 1-based line the match ends on (inclusive)
    pub end_line: usize,
    /// 1-based column of the first matched byte; `None` for multi-line matches
    pub start_offset: Option<usize>,
    /// 1-based column one past the last matched byte; `None` for multi-line matches
    pub end_offset: Option<usize>,
}

/// Locate a match within the full file content.
///
/// `match_start` is the byte offset of the match and `match_text` the exact
/// matched substring. Pure and deterministic.
pub fn locate(match_text: &str, match_start: usize, content: &str) -> SourceSpan {
    let start_line = count_newlines(&content[..match_start]) + 1;
    let end_line = start_line + count_newlines(match_text);

    if start_line == end_line {
        // Column 1 is the first byte after the preceding newline (or the
        // start of the file, treated as a newline at index -1).
        let line_start = content[..match_start]
            .rfind('\n')
            .map(|i| i as isize)
            .unwrap_or(-1);
        let start_offset = (match_start as isize - line_start) as usize;
        SourceSpan {
            start_line,
            end_line,
            start_offset: Some(start_offset),
            end_offset: Some(start_offset + match_text.len()),
        }
    } else {
        SourceSpan {
            start_line,
            end_line,
            start_offset: None,
            end_offset: None,
        }
    }
}

fn count_newlines(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count()
}
