//! End-to-end runs of the public queries over small documents.

use crate::{
    analyze, complete, find_code_actions,
    language::{
        ast::{Assignment, Operation, Operator, Value},
        errors::{CollectingReporter, Diagnostic, Severity, CODE_UNUSED_DEFINITION},
        parser::parse_file,
        types::Kind,
    },
    lsp::CodeAction,
    test_helpers::code,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn hello_world_is_clean() {
    init_tracing();
    let analysis = analyze("message := \"hello world\"");
    assert!(analysis.diagnostics().is_empty());
    assert!(analysis.file.assignments.iter().all(Assignment::is_valid));
    assert_eq!(analysis.definitions["message"].kind, Kind::String);
}

#[test]
fn stray_operator_invalidates_only_the_inner_operation() {
    init_tracing();
    let content = code("price := 20 - @{1}+@{2} \"10\"");
    let mut reporter = CollectingReporter::new();
    let file = parse_file(&content.value, &mut reporter);
    assert_eq!(
        reporter.diagnostics(),
        &[Diagnostic::error(
            content.span(1, 2),
            "Expecting STRING, got ADD"
        )]
    );

    let Some(Value::Operation(outer)) = file.assignments[0].value() else {
        panic!("expected an operation, got {:?}", file.assignments[0]);
    };
    assert!(outer.is_valid());
    assert_eq!(outer.operator(), Operator::Add);
    let Value::Operation(inner) = outer.left() else {
        panic!("expected an operation, got {:?}", outer.left());
    };
    assert!(matches!(
        inner.as_ref(),
        Operation::Invalid {
            operator: Operator::Subtract,
            ..
        }
    ));

    let analysis = analyze(&content.value);
    assert_eq!(analysis.definitions["price"].kind, Kind::Unknown);
}

#[test]
fn unused_definition_is_a_hint() {
    init_tracing();
    let content = code("@{1}price := 10@{2}\nmessage := \"hello\"");
    let analysis = analyze(&content.value);
    assert_eq!(
        analysis.diagnostics(),
        &[Diagnostic::hint(
            content.span(1, 2),
            "Unused definition",
            CODE_UNUSED_DEFINITION
        )]
    );
}

#[test]
fn missing_output_variable() {
    init_tracing();
    let content = code("@{1}quantity := 30@{2}\n@{3}price := 20@{4}");
    let analysis = analyze(&content.value);
    assert_eq!(
        analysis.diagnostics(),
        &[
            Diagnostic::error(content.span(3, 4), "Missing 'message' variable"),
            Diagnostic::hint(content.span(1, 2), "Unused definition", CODE_UNUSED_DEFINITION),
            Diagnostic::hint(content.span(3, 4), "Unused definition", CODE_UNUSED_DEFINITION),
        ]
    );
    assert_eq!(analysis.errors().count(), 1);
    assert!(analysis
        .hints()
        .all(|hint| hint.severity() == Severity::Hint));
}

#[test]
fn completion_offers_earlier_names() {
    init_tracing();
    let content = code("my_var := 10\nmy_second_var := \"10\"\nmy_other_var := my@{1}stic");
    let names: Vec<_> = complete(&content.value, content.position(1))
        .into_iter()
        .map(|item| item.name)
        .collect();
    assert_eq!(names, vec!["my_second_var", "my_var"]);
}

#[test]
fn code_action_removes_unused_assignment() {
    init_tracing();
    let content = code("@{1}price := 10@{2}\nmessage := \"hello\"");
    assert_eq!(
        find_code_actions(&content.value, content.span(1, 1)),
        vec![CodeAction {
            title: "Remove unused definition".to_string(),
            span: content.span(1, 2),
            new_text: String::new(),
        }]
    );
}

#[test]
fn queries_tolerate_garbage() {
    init_tracing();
    let text = "@@ := := \"open\n+ 12 x := * / 3\n";
    let analysis = analyze(text);
    assert!(analysis.has_errors());
    for diag in analysis.diagnostics() {
        assert!(analysis.file.span.contains(diag.span().to), "{diag:?}");
    }
    for offset in 0..=text.len() {
        let _ = complete(text, crate::lsp::position_at(text, offset));
    }
    assert!(find_code_actions(text, analysis.file.span)
        .iter()
        .all(|action| action.new_text.is_empty()));
}

#[test]
fn long_expression_is_analyzed_and_dropped() {
    init_tracing();
    let text = format!("message := 1{}", " + 1".repeat(50_000));
    let analysis = analyze(&text);
    assert!(analysis.diagnostics().is_empty());
    assert_eq!(analysis.definitions["message"].kind, Kind::Integer);
    drop(analysis);
}
