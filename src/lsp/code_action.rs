use crate::language::{
    errors::{CollectingReporter, Diagnostic, CODE_UNUSED_DEFINITION},
    parser::parse_file,
    span::Span,
    typecheck::check,
};

/// Hint codes that have a quick fix.
const KNOWN_ACTIONS: &[&str] = &[CODE_UNUSED_DEFINITION];

/// A text edit offered to the user: replace `span` with `new_text`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeAction {
    pub title: String,
    pub span: Span,
    pub new_text: String,
}

/// Quick fixes for every hint overlapping `span`.
#[tracing::instrument(skip(text))]
pub fn find_code_actions(text: &str, span: Span) -> Vec<CodeAction> {
    let mut reporter = CollectingReporter::new();
    let file = parse_file(text, &mut reporter);
    check(&file, &mut reporter);

    let actions: Vec<_> = reporter
        .hints()
        .filter(|hint| hint.span().overlaps(&span))
        .filter_map(|hint| match hint {
            Diagnostic::Hint { span, code, .. } if KNOWN_ACTIONS.contains(&code.as_str()) => {
                make_action(*span, code)
            }
            _ => None,
        })
        .collect();
    tracing::debug!(actions = actions.len(), "found code actions");
    actions
}

fn make_action(span: Span, code: &str) -> Option<CodeAction> {
    match code {
        CODE_UNUSED_DEFINITION => Some(CodeAction {
            title: "Remove unused definition".to_string(),
            span,
            new_text: String::new(),
        }),
        _ => None,
    }
}
