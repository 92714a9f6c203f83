use crate::language::span::Span;
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub value: Option<String>,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self {
            kind,
            span,
            value: None,
        }
    }

    pub fn with_value(kind: TokenKind, span: Span, value: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            value: Some(value.into()),
        }
    }

    pub fn text(&self) -> &str {
        self.value.as_deref().unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Ident,
    /// Identifier directly followed by `:=`, i.e. the name of a new statement.
    LeadingIdent,
    Integer,
    String,

    Assign,
    Add,
    Subtract,
    Multiply,
    Divide,

    Eof,
}

impl TokenKind {
    pub fn is_identifier(self) -> bool {
        matches!(self, TokenKind::Ident | TokenKind::LeadingIdent)
    }

    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Ident | TokenKind::LeadingIdent => "IDENT",
            TokenKind::Integer => "INTEGER",
            TokenKind::String => "STRING",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Add => "ADD",
            TokenKind::Subtract => "SUBSTRACT",
            TokenKind::Multiply => "MULTIPLY",
            TokenKind::Divide => "DIVIDE",
            TokenKind::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
