use crate::language::{
    ast::*,
    errors::Reporter,
    lexer::Lexer,
    span::{Position, Span},
    token::{Token, TokenKind},
};
use std::mem;


/// Recovery anchors, one set per grammar level.
const ASSIGNMENT_SYNC: &[TokenKind] = &[TokenKind::LeadingIdent, TokenKind::Eof];
const ADD_SUB_SYNC: &[TokenKind] = &[
    TokenKind::Add,
    TokenKind::Subtract,
    TokenKind::LeadingIdent,
    TokenKind::Eof,
];
const MUL_DIV_SYNC: &[TokenKind] = &[
    TokenKind::Add,
    TokenKind::Subtract,
    TokenKind::Multiply,
    TokenKind::Divide,
    TokenKind::LeadingIdent,
    TokenKind::Eof,
];

/// Parses `source` into a tree. Always succeeds; problems go to `reporter`
/// and show up in the tree as invalid nodes.
pub fn parse_file<R: Reporter>(source: &str, reporter: R) -> File {
    Parser::new(source, reporter).parse_file()
}

/// A failed sub-parse unwinding to its recovery point. The error has already
/// been reported when this is created.
#[derive(Debug)]
struct Unwind;

type ParseResult<T> = Result<T, Unwind>;

pub struct Parser<'src, R> {
    lexer: Lexer<'src, R>,
    token: Token,
}

impl<'src, R: Reporter> Parser<'src, R> {
    pub fn new(source: &'src str, reporter: R) -> Self {
        let mut lexer = Lexer::new(source, reporter);
        let token = lexer.next_token();
        Self { lexer, token }
    }

    pub fn parse_file(mut self) -> File {
        let mut assignments = Vec::new();

        while !self.check(TokenKind::Eof) {
            if self.token.kind.is_identifier() {
                assignments.push(self.parse_assignment());
            } else {
                self.error_here("IDENT");
                self.synchronize(ASSIGNMENT_SYNC);
            }
        }

        let span = Span::new(Position::default(), self.token.span.to);
        tracing::debug!(
            assignments = assignments.len(),
            invalid = assignments.iter().filter(|a| !a.is_valid()).count(),
            "parsed file"
        );
        File { span, assignments }
    }

    fn parse_assignment(&mut self) -> Assignment {
        let variable = self.parse_ident();
        match self.parse_assigned_value() {
            Ok(value) => Assignment::valid(variable, value),
            Err(Unwind) => {
                let span = extend(variable.span, self.synchronize(ASSIGNMENT_SYNC));
                Assignment::Invalid { span, variable }
            }
        }
    }

    fn parse_assigned_value(&mut self) -> ParseResult<Value> {
        self.expect(TokenKind::Assign)?;
        self.parse_value()
    }

    fn parse_value(&mut self) -> ParseResult<Value> {
        let mut left = self.parse_mul_div()?;
        while let Some(operator) = self.operator_in(&[TokenKind::Add, TokenKind::Subtract]) {
            self.bump();
            left = match self.parse_mul_div() {
                Ok(right) => Value::Operation(Box::new(Operation::binary(operator, left, right))),
                Err(Unwind) => self.recover_operation(operator, left, ADD_SUB_SYNC),
            };
        }
        Ok(left)
    }

    fn parse_mul_div(&mut self) -> ParseResult<Value> {
        let mut left = self.parse_atom()?;
        while let Some(operator) = self.operator_in(&[TokenKind::Multiply, TokenKind::Divide]) {
            self.bump();
            left = match self.parse_atom() {
                Ok(right) => Value::Operation(Box::new(Operation::binary(operator, left, right))),
                Err(Unwind) => self.recover_operation(operator, left, MUL_DIV_SYNC),
            };
        }
        Ok(left)
    }

    fn parse_atom(&mut self) -> ParseResult<Value> {
        match self.token.kind {
            TokenKind::Integer => {
                let token = self.bump();
                Ok(Value::Integer(IntegerLiteral {
                    span: token.span,
                    value: token.text().parse().unwrap_or_default(),
                }))
            }
            TokenKind::Ident => Ok(Value::Variable(self.parse_ident())),
            _ => {
                let token = self.expect(TokenKind::String)?;
                Ok(Value::String(StringLiteral {
                    span: token.span,
                    value: token.value.unwrap_or_default(),
                }))
            }
        }
    }

    fn parse_ident(&mut self) -> Ident {
        let token = self.bump();
        Ident {
            span: token.span,
            name: token.value.unwrap_or_default(),
        }
    }

    fn recover_operation(&mut self, operator: Operator, left: Value, sync: &[TokenKind]) -> Value {
        let span = extend(left.span(), self.synchronize(sync));
        Value::Operation(Box::new(Operation::Invalid {
            span,
            operator,
            left,
        }))
    }

    fn operator_in(&self, kinds: &[TokenKind]) -> Option<Operator> {
        if kinds.contains(&self.token.kind) {
            Operator::from_token(self.token.kind)
        } else {
            None
        }
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.token.kind == kind
    }

    fn bump(&mut self) -> Token {
        let next = self.lexer.next_token();
        mem::replace(&mut self.token, next)
    }

    fn expect(&mut self, kind: TokenKind) -> ParseResult<Token> {
        if self.check(kind) {
            Ok(self.bump())
        } else {
            Err(self.error_here(kind.name()))
        }
    }

    fn error_here(&mut self, expected: &str) -> Unwind {
        let message = format!("Expecting {}, got {}", expected, self.token.kind);
        let span = self.token.span;
        self.lexer.reporter().report_error(span, message);
        Unwind
    }

    /// Skips tokens until one in `sync` is current. `Eof` is in every set.
    /// Returns the span covering the skipped tokens, if any.
    fn synchronize(&mut self, sync: &[TokenKind]) -> Option<Span> {
        let mut skipped: Option<Span> = None;
        let mut count = 0usize;
        while !sync.contains(&self.token.kind) && !self.check(TokenKind::Eof) {
            let span = self.bump().span;
            skipped = Some(skipped.map_or(span, |prev| prev.merge(span)));
            count += 1;
        }
        tracing::trace!(skipped = count, resume = %self.token.kind, "parser recovered");
        skipped
    }
}

/// Span of an invalid node: its start, grown over whatever recovery skipped.
fn extend(start: Span, skipped: Option<Span>) -> Span {
    match skipped {
        Some(skipped) => start.merge(skipped),
        None => start,
    }
}
