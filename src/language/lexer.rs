use crate::language::{
    errors::Reporter,
    span::{Position, Span},
    token::{Token, TokenKind},
};
use nom::{
    branch::alt,
    bytes::complete::{tag, take_till, take_while, take_while1},
    character::complete::{char, digit1, satisfy},
    combinator::{map, opt, recognize, value},
    multi::many0_count,
    sequence::pair,
    IResult,
};

/// Lexes the whole text, up to and including the first `Eof` token.
pub fn tokenize<R: Reporter>(source: &str, reporter: R) -> Vec<Token> {
    let mut lexer = Lexer::new(source, reporter);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}

/// Pull-based tokenizer. Never fails: bad input is reported and skipped.
pub struct Lexer<'src, R> {
    src: &'src str,
    position: Position,
    reporter: R,
    /// Run of unrecognized characters not reported yet.
    pending_unknown: Option<Span>,
}

#[derive(Clone, Copy, Debug)]
enum Lexeme<'a> {
    Identifier(&'a str),
    Integer(&'a str),
    String { text: &'a str, terminated: bool },
    Operator(TokenKind),
}

impl<'src, R: Reporter> Lexer<'src, R> {
    pub fn new(src: &'src str, reporter: R) -> Self {
        Self {
            src,
            position: Position::default(),
            reporter,
            pending_unknown: None,
        }
    }

    pub fn reporter(&mut self) -> &mut R {
        &mut self.reporter
    }

    pub fn next_token(&mut self) -> Token {
        loop {
            self.skip_trivia();
            let rest = self.rest();
            if rest.is_empty() {
                self.flush_unknown();
                return Token::new(TokenKind::Eof, Span::empty(self.position));
            }
            match lexeme(rest) {
                Ok((remaining, lexeme)) => {
                    self.flush_unknown();
                    let consumed = &rest[..rest.len() - remaining.len()];
                    return self.emit(lexeme, consumed, remaining);
                }
                Err(_) => self.bump_unknown(),
            }
        }
    }

    fn rest(&self) -> &'src str {
        &self.src[self.position.offset..]
    }

    fn skip_trivia(&mut self) {
        let rest = self.rest();
        if let Ok((_, skipped)) = trivia(rest) {
            self.position = self.position.advance_str(skipped);
        }
    }

    fn emit(&mut self, lexeme: Lexeme<'src>, consumed: &'src str, remaining: &'src str) -> Token {
        let start = self.position;
        let end = start.advance_str(consumed);
        self.position = end;
        let span = Span::new(start, end);
        match lexeme {
            Lexeme::Identifier(name) => {
                let kind = if starts_assignment(remaining) {
                    TokenKind::LeadingIdent
                } else {
                    TokenKind::Ident
                };
                Token::with_value(kind, span, name)
            }
            Lexeme::Integer(digits) => Token::with_value(TokenKind::Integer, span, digits),
            Lexeme::String { text, terminated } => {
                if !terminated {
                    tracing::debug!(
                        line = start.line,
                        col = start.character,
                        "lexer error: unterminated string"
                    );
                    self.reporter
                        .report_error(span, "Unterminated string".to_string());
                }
                Token::with_value(TokenKind::String, span, text)
            }
            Lexeme::Operator(kind) => Token::new(kind, span),
        }
    }

    fn bump_unknown(&mut self) {
        let Some(ch) = self.rest().chars().next() else {
            return;
        };
        let start = self.position;
        self.position = start.advance(ch);
        let span = Span::new(start, self.position);
        self.pending_unknown = Some(match self.pending_unknown {
            Some(pending) => pending.merge(span),
            None => span,
        });
    }

    fn flush_unknown(&mut self) {
        if let Some(span) = self.pending_unknown.take() {
            tracing::debug!(
                line = span.from.line,
                col = span.from.character,
                len = span.len(),
                "lexer error: unknown characters"
            );
            self.reporter
                .report_error(span, "Unknown character(s)".to_string());
        }
    }
}

fn is_ident_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_ident_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

fn trivia(input: &str) -> IResult<&str, &str> {
    recognize(many0_count(alt((
        take_while1(char::is_whitespace),
        recognize(pair(tag("//"), take_till(|ch: char| ch == '\n'))),
    ))))(input)
}

fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(satisfy(is_ident_start), take_while(is_ident_char)))(input)
}

fn string_literal(input: &str) -> IResult<&str, (&str, Option<char>)> {
    let (input, _) = char('"')(input)?;
    pair(take_till(|ch: char| ch == '"'), opt(char('"')))(input)
}

fn operator(input: &str) -> IResult<&str, TokenKind> {
    alt((
        value(TokenKind::Assign, tag(":=")),
        value(TokenKind::Add, char('+')),
        value(TokenKind::Subtract, char('-')),
        value(TokenKind::Multiply, char('*')),
        value(TokenKind::Divide, char('/')),
    ))(input)
}

fn lexeme(input: &str) -> IResult<&str, Lexeme<'_>> {
    alt((
        map(identifier, Lexeme::Identifier),
        map(digit1, Lexeme::Integer),
        map(string_literal, |(text, close)| Lexeme::String {
            text,
            terminated: close.is_some(),
        }),
        map(operator, Lexeme::Operator),
    ))(input)
}

/// True when the next non-trivia input is the assignment operator.
fn starts_assignment(input: &str) -> bool {
    match trivia(input) {
        Ok((rest, _)) => rest.starts_with(":="),
        Err(_) => false,
    }
}
