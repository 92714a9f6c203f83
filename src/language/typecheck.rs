use crate::config::AnalysisConfig;
use crate::language::{
    ast::*,
    errors::{Reporter, CODE_UNUSED_DEFINITION},
    span::Span,
    types::{Kind, OperandMismatch},
};
use std::collections::HashMap;


/// What the checker knows about a name at a given point of the file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Definition {
    /// Span of the assignment that introduced it.
    pub span: Span,
    pub kind: Kind,
    pub used: bool,
}

pub type Definitions = HashMap<String, Definition>;

/// Checks `file` with the default configuration.
pub fn check<R: Reporter>(file: &File, reporter: R) -> Definitions {
    check_with(file, reporter, &AnalysisConfig::default())
}

/// Single forward pass over the assignments: infers kinds, records
/// definitions and uses, then reports a missing output variable and unused
/// definitions. Returns the final definition table.
pub fn check_with<R: Reporter>(file: &File, reporter: R, config: &AnalysisConfig) -> Definitions {
    let mut inference = KindInference::new(reporter);
    for assignment in &file.assignments {
        inference.define(assignment);
    }

    let (definitions, mut reporter) = inference.into_parts();

    if !definitions.contains_key(&config.output_variable) {
        let span = file
            .assignments
            .last()
            .map(Assignment::span)
            .unwrap_or(file.span);
        reporter.report_error(
            span,
            format!("Missing '{}' variable", config.output_variable),
        );
    }

    if config.report_unused {
        let mut unused: Vec<_> = definitions
            .iter()
            .filter(|(name, def)| !def.used && **name != config.output_variable)
            .map(|(_, def)| def.span)
            .collect();
        unused.sort_by_key(|span| span.from.offset);
        for span in unused {
            reporter.report_hint(
                span,
                "Unused definition".to_string(),
                CODE_UNUSED_DEFINITION,
            );
        }
    }

    tracing::debug!(definitions = definitions.len(), "checked file");
    definitions
}

/// Kind inference over values, driven by the definitions seen so far.
///
/// The checker runs it over a whole file; completion runs it over the
/// assignments before the cursor with a silent reporter.
pub struct KindInference<R> {
    definitions: Definitions,
    reporter: R,
}

impl<R: Reporter> KindInference<R> {
    pub fn new(reporter: R) -> Self {
        Self {
            definitions: Definitions::new(),
            reporter,
        }
    }

    pub fn definitions(&self) -> &Definitions {
        &self.definitions
    }

    pub fn into_parts(self) -> (Definitions, R) {
        (self.definitions, self.reporter)
    }

    /// Infers the assigned value and records the definition, replacing any
    /// earlier one with the same name.
    pub fn define(&mut self, assignment: &Assignment) -> Kind {
        let kind = match assignment.value() {
            Some(value) => self.infer(value),
            None => Kind::Unknown,
        };
        self.definitions.insert(
            assignment.variable().name.clone(),
            Definition {
                span: assignment.span(),
                kind,
                used: false,
            },
        );
        kind
    }

    pub fn infer(&mut self, value: &Value) -> Kind {
        match value {
            Value::Integer(_) => Kind::Integer,
            Value::String(_) => Kind::String,
            Value::Variable(ident) => self.lookup(ident),
            Value::Operation(op) => self.infer_operation(op),
        }
    }

    fn lookup(&mut self, ident: &Ident) -> Kind {
        match self.definitions.get_mut(&ident.name) {
            Some(def) => {
                def.used = true;
                def.kind
            }
            None => {
                self.reporter
                    .report_error(ident.span, format!("Unknown variable '{}'", ident.name));
                Kind::Unknown
            }
        }
    }

    /// Operations nest to the left, so the left spine is walked with a loop
    /// and folded back up. A right operand is at most a `*`/`/` chain.
    fn infer_operation(&mut self, op: &Operation) -> Kind {
        let mut spine = vec![op];
        let mut leftmost = op.left();
        while let Value::Operation(inner) = leftmost {
            spine.push(inner);
            leftmost = inner.left();
        }

        let mut kind = self.infer(leftmost);
        for op in spine.into_iter().rev() {
            kind = self.apply(op, kind);
        }
        kind
    }

    fn apply(&mut self, op: &Operation, left: Kind) -> Kind {
        let Operation::Valid {
            span,
            operator,
            right,
            ..
        } = op
        else {
            return Kind::Unknown;
        };
        let right = self.infer(right);
        match operator.result_kind(left, right) {
            Ok(kind) => kind,
            Err(OperandMismatch) => {
                self.reporter.report_error(
                    *span,
                    format!("Cannot use '{}' on strings", operator.symbol()),
                );
                Kind::Unknown
            }
        }
    }
}
