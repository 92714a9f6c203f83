use crate::language::ast::Operator;

/// Static value category of an expression. `Unknown` absorbs errors so they
/// are reported once and not again by every enclosing expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Integer,
    String,
    Unknown,
}

impl Kind {
    /// True when a value of this kind fits where `expected` is wanted.
    /// `Unknown` as the expectation accepts everything.
    pub fn satisfies(self, expected: Kind) -> bool {
        expected == Kind::Unknown || self == expected
    }
}

/// Operands of an arithmetic operator that only works on integers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OperandMismatch;

impl Operator {
    /// Kind produced by `left <op> right`.
    ///
    /// `+` concatenates as soon as one side is a string. The other operators
    /// need two integers.
    pub fn result_kind(self, left: Kind, right: Kind) -> Result<Kind, OperandMismatch> {
        if left == Kind::Unknown || right == Kind::Unknown {
            return Ok(Kind::Unknown);
        }
        match self {
            Operator::Add if left == Kind::String || right == Kind::String => Ok(Kind::String),
            Operator::Add => Ok(Kind::Integer),
            Operator::Subtract | Operator::Multiply | Operator::Divide => {
                if left == Kind::Integer && right == Kind::Integer {
                    Ok(Kind::Integer)
                } else {
                    Err(OperandMismatch)
                }
            }
        }
    }

    /// Kind an operand of this operator is expected to have.
    pub fn operand_kind(self) -> Kind {
        match self {
            Operator::Add => Kind::Unknown,
            Operator::Subtract | Operator::Multiply | Operator::Divide => Kind::Integer,
        }
    }
}
