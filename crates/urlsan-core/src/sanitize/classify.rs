//! Raw line classification: blank, comment, or candidate entry.

/// Outcome of classifying one raw input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Empty after trimming. Counted, never validated.
    Blank,
    /// First non-whitespace character is `#` or `;`. Counted, never validated.
    Comment,
    /// Everything else; carries the trimmed text.
    Candidate(&'a str),
}

/// Classify a raw line. Pure function of the line content.
pub fn classify_line(line: &str) -> LineClass<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineClass::Blank;
    }
    if trimmed.starts_with('#') || trimmed.starts_with(';') {
        return LineClass::Comment;
    }
    LineClass::Candidate(trimmed)
}
