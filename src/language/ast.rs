use crate::language::{span::Span, token::TokenKind};
use std::mem;

#[derive(Clone, Debug, PartialEq)]
pub struct File {
    pub span: Span,
    pub assignments: Vec<Assignment>,
}

/// `name := value`. The invalid form keeps the name but has no value: the
/// parser never makes one up.
#[derive(Clone, Debug, PartialEq)]
pub enum Assignment {
    Valid {
        span: Span,
        variable: Ident,
        value: Value,
    },
    Invalid {
        span: Span,
        variable: Ident,
    },
}

impl Assignment {
    pub fn valid(variable: Ident, value: Value) -> Self {
        Assignment::Valid {
            span: variable.span.merge(value.span()),
            variable,
            value,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Assignment::Valid { span, .. } | Assignment::Invalid { span, .. } => *span,
        }
    }

    pub fn variable(&self) -> &Ident {
        match self {
            Assignment::Valid { variable, .. } | Assignment::Invalid { variable, .. } => variable,
        }
    }

    pub fn value(&self) -> Option<&Value> {
        match self {
            Assignment::Valid { value, .. } => Some(value),
            Assignment::Invalid { .. } => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Assignment::Valid { .. })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ident {
    pub span: Span,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct IntegerLiteral {
    pub span: Span,
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StringLiteral {
    pub span: Span,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Integer(IntegerLiteral),
    String(StringLiteral),
    Variable(Ident),
    Operation(Box<Operation>),
}

impl Value {
    pub fn span(&self) -> Span {
        match self {
            Value::Integer(lit) => lit.span,
            Value::String(lit) => lit.span,
            Value::Variable(ident) => ident.span,
            Value::Operation(op) => op.span(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Add => Some(Operator::Add),
            TokenKind::Subtract => Some(Operator::Subtract),
            TokenKind::Multiply => Some(Operator::Multiply),
            TokenKind::Divide => Some(Operator::Divide),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }
}

/// Binary operation. When the right operand could not be parsed the node is
/// `Invalid` and only the left side survives.
#[derive(Clone, Debug, PartialEq)]
pub enum Operation {
    Valid {
        span: Span,
        operator: Operator,
        left: Value,
        right: Value,
    },
    Invalid {
        span: Span,
        operator: Operator,
        left: Value,
    },
}

impl Operation {
    pub fn binary(operator: Operator, left: Value, right: Value) -> Self {
        Operation::Valid {
            span: left.span().merge(right.span()),
            operator,
            left,
            right,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Operation::Valid { span, .. } | Operation::Invalid { span, .. } => *span,
        }
    }

    pub fn operator(&self) -> Operator {
        match self {
            Operation::Valid { operator, .. } | Operation::Invalid { operator, .. } => *operator,
        }
    }

    pub fn left(&self) -> &Value {
        match self {
            Operation::Valid { left, .. } | Operation::Invalid { left, .. } => left,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Operation::Valid { .. })
    }

    /// Detaches a nested left operation, leaving a placeholder literal behind.
    fn take_left_operation(&mut self) -> Option<Box<Operation>> {
        let left = match self {
            Operation::Valid { left, .. } | Operation::Invalid { left, .. } => left,
        };
        if !matches!(left, Value::Operation(_)) {
            return None;
        }
        let placeholder = Value::Integer(IntegerLiteral {
            span: left.span(),
            value: 0.0,
        });
        match mem::replace(left, placeholder) {
            Value::Operation(op) => Some(op),
            _ => None,
        }
    }
}

// Chains like `a + b + c + ...` nest to the left; unlink them with a loop so
// dropping a long expression does not recurse once per operator.
impl Drop for Operation {
    fn drop(&mut self) {
        let mut next = self.take_left_operation();
        while let Some(mut op) = next {
            next = op.take_left_operation();
        }
    }
}
