use crate::language::{
    ast::{Assignment, Operation, Value},
    errors::SilentReporter,
    parser::parse_file,
    span::Position,
    typecheck::{Definitions, KindInference},
    types::Kind,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionItem {
    pub name: String,
}

/// Names that could replace the identifier under `position`.
///
/// Only names bound by assignments before the one being edited are offered,
/// and only those whose kind fits where the identifier sits: operands of
/// `-`, `*` and `/` must be integers, anything else goes.
#[tracing::instrument(skip(text))]
pub fn complete(text: &str, position: Position) -> Vec<CompletionItem> {
    let file = parse_file(text, SilentReporter);
    let mut inference = KindInference::new(SilentReporter);

    let mut items = Vec::new();
    for assignment in &file.assignments {
        if assignment.span().contains(position) {
            if let Assignment::Valid { value, .. } = assignment {
                collect(value, position, Kind::Unknown, inference.definitions(), &mut items);
            }
            break;
        }
        inference.define(assignment);
    }

    items.sort_by(|a, b| a.name.cmp(&b.name));
    tracing::debug!(items = items.len(), "completed");
    items
}

fn collect(
    mut value: &Value,
    position: Position,
    mut context: Kind,
    definitions: &Definitions,
    items: &mut Vec<CompletionItem>,
) {
    loop {
        if !value.span().contains(position) {
            return;
        }
        match value {
            Value::Variable(ident) => {
                let typed = position.offset.saturating_sub(ident.span.from.offset);
                let prefix = ident.name.get(..typed).unwrap_or(&ident.name);
                items.extend(
                    definitions
                        .iter()
                        .filter(|(name, def)| {
                            name.starts_with(prefix) && def.kind.satisfies(context)
                        })
                        .map(|(name, _)| CompletionItem { name: name.clone() }),
                );
                return;
            }
            Value::Operation(op) => {
                context = op.operator().operand_kind();
                value = match op.as_ref() {
                    Operation::Valid { left, right, .. } => {
                        if left.span().contains(position) {
                            left
                        } else {
                            right
                        }
                    }
                    Operation::Invalid { left, .. } => left,
                };
            }
            Value::Integer(_) | Value::String(_) => return,
        }
    }
}
