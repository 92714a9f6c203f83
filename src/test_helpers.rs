//! Marker-annotated sources for tests.
//!
//! `code("@{1}price := 10@{2}")` strips the `@{n}` markers and remembers the
//! position each one stood at, so expected spans can be written inline.

use crate::language::span::{Position, Span};
use std::collections::HashMap;

pub struct Code {
    pub value: String,
    positions: HashMap<usize, Position>,
}

impl Code {
    pub fn position(&self, marker: usize) -> Position {
        match self.positions.get(&marker) {
            Some(position) => *position,
            None => panic!("no marker @{{{marker}}} in source"),
        }
    }

    pub fn span(&self, from: usize, to: usize) -> Span {
        Span::new(self.position(from), self.position(to))
    }
}

pub fn code(content: &str) -> Code {
    let mut value = String::with_capacity(content.len());
    let mut positions = HashMap::new();
    let mut current = Position::default();
    let mut rest = content;

    while let Some(start) = rest.find("@{") {
        let after = &rest[start + 2..];
        let Some(close) = after.find('}') else {
            break;
        };
        let Ok(marker) = after[..close].parse::<usize>() else {
            break;
        };
        let text = &rest[..start];
        value.push_str(text);
        current = current.advance_str(text);
        positions.insert(marker, current);
        rest = &after[close + 1..];
    }
    value.push_str(rest);

    Code { value, positions }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_markers() {
        let content = code("@{1}256@{2}");
        assert_eq!(content.value, "256");
        assert_eq!(
            content.span(1, 2),
            Span::new(Position::new(0, 0, 0), Position::new(3, 0, 3))
        );
    }

    #[test]
    fn markers_across_newlines() {
        let content = code("@{1}256@{2} :=\n@{3}12@{4}");
        assert_eq!(content.value, "256 :=\n12");
        assert_eq!(
            content.span(3, 4),
            Span::new(Position::new(7, 1, 0), Position::new(9, 1, 2))
        );
    }
}
