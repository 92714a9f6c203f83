use crate::language::span::Position;

pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(ch) if ch.is_ascii_alphabetic() || ch == '_' => (),
        _ => return false,
    }
    chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

/// Position of byte `offset` in `text`. Offsets past the end clamp to the
/// end; offsets inside a multi-byte character clamp back to its start.
pub fn position_at(text: &str, offset: usize) -> Position {
    let mut position = Position::default();
    for (idx, ch) in text.char_indices() {
        if idx + ch.len_utf8() > offset {
            break;
        }
        position = position.advance(ch);
    }
    position
}

/// Byte offset of the zero-based `line` and `character` (counted in chars).
/// A character past the end of its line clamps to the line end, a line past
/// the end of the text clamps to the text length.
pub fn offset_at(text: &str, line: usize, character: usize) -> usize {
    let mut offset = 0usize;
    for (current_line, content) in text.split_inclusive('\n').enumerate() {
        if current_line == line {
            let content = content.strip_suffix('\n').unwrap_or(content);
            let col_bytes: usize = content
                .chars()
                .take(character)
                .map(char::len_utf8)
                .sum();
            return offset + col_bytes;
        }
        offset += content.len();
    }
    text.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers() {
        assert!(is_valid_identifier("message"));
        assert!(is_valid_identifier("_tmp2"));
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("2fast"));
        assert!(!is_valid_identifier("with space"));
        assert!(!is_valid_identifier("café"));
    }

    #[test]
    fn position_tracks_lines_and_characters() {
        let text = "a := 1\nbé := 2";
        assert_eq!(position_at(text, 0), Position::new(0, 0, 0));
        assert_eq!(position_at(text, 6), Position::new(6, 0, 6));
        assert_eq!(position_at(text, 7), Position::new(7, 1, 0));
        // after the two-byte 'é'
        assert_eq!(position_at(text, 10), Position::new(10, 1, 2));
    }

    #[test]
    fn position_clamps() {
        let text = "é";
        assert_eq!(position_at(text, 1), Position::new(0, 0, 0));
        assert_eq!(position_at(text, 99), Position::new(2, 0, 1));
    }

    #[test]
    fn offset_is_inverse_of_position() {
        let text = "price := 10\nmessage := \"ü\" + price\n";
        for offset in text.char_indices().map(|(idx, _)| idx) {
            let position = position_at(text, offset);
            assert_eq!(offset_at(text, position.line, position.character), offset);
        }
    }

    #[test]
    fn offset_clamps_to_line_and_text() {
        let text = "ab\ncd";
        assert_eq!(offset_at(text, 0, 10), 2);
        assert_eq!(offset_at(text, 1, 1), 4);
        assert_eq!(offset_at(text, 5, 0), text.len());
    }
}
