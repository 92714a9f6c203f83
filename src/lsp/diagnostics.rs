use crate::{
    config::AnalysisConfig,
    language::{
        ast::File,
        errors::{CollectingReporter, Diagnostic, Severity},
        parser::parse_file,
        typecheck::{check_with, Definitions},
    },
};

/// Everything a full analysis of one document produces.
#[derive(Clone, Debug)]
pub struct Analysis {
    pub file: File,
    pub definitions: Definitions,
    diagnostics: Vec<Diagnostic>,
}

impl Analysis {
    /// Errors and hints in the order they were reported.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.with_severity(Severity::Error)
    }

    pub fn hints(&self) -> impl Iterator<Item = &Diagnostic> {
        self.with_severity(Severity::Hint)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(move |diag| diag.severity() == severity)
    }
}

pub fn analyze(text: &str) -> Analysis {
    analyze_with(text, &AnalysisConfig::default())
}

/// Lexes, parses and checks `text`, collecting every report.
#[tracing::instrument(skip(text))]
pub fn analyze_with(text: &str, config: &AnalysisConfig) -> Analysis {
    let mut reporter = CollectingReporter::new();
    let file = parse_file(text, &mut reporter);
    let definitions = check_with(&file, &mut reporter, config);
    let diagnostics = reporter.into_diagnostics();
    tracing::debug!(diagnostics = diagnostics.len(), "analyzed document");
    Analysis {
        file,
        definitions,
        diagnostics,
    }
}
