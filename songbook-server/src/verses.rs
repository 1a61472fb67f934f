//! Verse pagination for stored lyrics
//!
//! Stored lyrics carry their structure as literal escape markers rather than
//! real control characters: the four characters `\n\n` separate verses, and
//! real newlines separate lines inside a verse. Stray two-character `\n`
//! markers left at the edge of a line are dropped.

/// Verses returned when the caller gives no limit
pub const DEFAULT_VERSE_LIMIT: usize = 5;

/// Literal verse boundary marker (backslash, n, backslash, n)
const VERSE_SEPARATOR: &str = r"\n\n";

/// Literal line marker (backslash, n)
const LINE_MARKER: &str = r"\n";

/// One verse: its lines in order
pub type Verse = Vec<String>;

/// Split lyrics into verses, dropping blank blocks
pub fn split_verses(text: &str) -> Vec<Verse> {
    text.split(VERSE_SEPARATOR)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(|block| block.split('\n').map(clean_line).collect())
        .collect()
}

fn clean_line(line: &str) -> String {
    let line = line.strip_prefix(LINE_MARKER).unwrap_or(line);
    line.strip_suffix(LINE_MARKER).unwrap_or(line).to_string()
}

/// Return the verses in `[offset, offset + limit)`, clamped to what exists
///
/// `offset` defaults to 0 and `limit` to [`DEFAULT_VERSE_LIMIT`]. Never fails:
/// an offset past the end, a zero limit or empty text all give an empty page.
///
/// # Examples
/// ```
/// use songbook_server::verses::paginate_verses;
///
/// let text = r"First\n\nSecond\n\nThird";
/// let page = paginate_verses(text, Some(1), Some(1));
/// assert_eq!(page, vec![vec!["Second".to_string()]]);
/// ```
pub fn paginate_verses(text: &str, offset: Option<usize>, limit: Option<usize>) -> Vec<Verse> {
    let mut verses = split_verses(text);
    let total = verses.len();

    let start = offset.unwrap_or(0).min(total);
    let end = start
        .saturating_add(limit.unwrap_or(DEFAULT_VERSE_LIMIT))
        .min(total);

    verses.drain(start..end).collect()
}
