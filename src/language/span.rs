use miette::SourceSpan;
use std::cmp::Ordering;

/// A point in the source text.
///
/// `offset` is a byte offset and is the only field used for ordering;
/// `line` and `character` are zero-based and kept in sync with it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub character: usize,
}

impl Position {
    pub const fn new(offset: usize, line: usize, character: usize) -> Self {
        Self {
            offset,
            line,
            character,
        }
    }

    /// Position right after `ch`, starting from `self`.
    pub fn advance(self, ch: char) -> Self {
        if ch == '\n' {
            Self {
                offset: self.offset + ch.len_utf8(),
                line: self.line + 1,
                character: 0,
            }
        } else {
            Self {
                offset: self.offset + ch.len_utf8(),
                line: self.line,
                character: self.character + 1,
            }
        }
    }

    pub fn advance_str(self, text: &str) -> Self {
        text.chars().fold(self, Position::advance)
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.offset.cmp(&other.offset)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub from: Position,
    pub to: Position,
}

impl Span {
    pub const fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }

    pub const fn empty(at: Position) -> Self {
        Self { from: at, to: at }
    }

    pub fn len(&self) -> usize {
        self.to.offset.saturating_sub(self.from.offset)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            from: self.from.min(other.from),
            to: self.to.max(other.to),
        }
    }

    /// Inclusive on both ends, so a cursor sitting right after the last
    /// character still counts as inside.
    pub fn contains(&self, position: Position) -> bool {
        self.from.offset <= position.offset && position.offset <= self.to.offset
    }

    pub fn overlaps(&self, other: &Span) -> bool {
        self.contains(other.from)
            || self.contains(other.to)
            || other.contains(self.from)
            || other.contains(self.to)
    }

    pub fn to_source_span(&self) -> SourceSpan {
        (self.from.offset, self.len()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(offset: usize) -> Position {
        Position::new(offset, 0, offset)
    }

    fn span(from: usize, to: usize) -> Span {
        Span::new(pos(from), pos(to))
    }

    #[test]
    fn advance_tracks_lines() {
        let end = Position::default().advance_str("ab\ncd");
        assert_eq!(end, Position::new(5, 1, 2));
    }

    #[test]
    fn advance_counts_characters_not_bytes() {
        let end = Position::default().advance_str("é=");
        assert_eq!(end.offset, 3);
        assert_eq!(end.character, 2);
    }

    #[test]
    fn merge_takes_outer_bounds() {
        assert_eq!(span(4, 6).merge(span(1, 5)), span(1, 6));
        assert_eq!(span(1, 2).merge(span(7, 9)), span(1, 9));
    }

    #[test]
    fn contains_is_inclusive() {
        let s = span(2, 5);
        assert!(s.contains(pos(2)));
        assert!(s.contains(pos(5)));
        assert!(!s.contains(pos(6)));
        assert!(!s.contains(pos(1)));
    }

    #[test]
    fn overlap_detects_touching_and_nested_spans() {
        assert!(span(0, 3).overlaps(&span(3, 8)));
        assert!(span(0, 10).overlaps(&span(3, 4)));
        assert!(span(3, 4).overlaps(&span(0, 10)));
        assert!(!span(0, 3).overlaps(&span(4, 8)));
    }
}
