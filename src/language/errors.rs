use crate::language::span::Span;

/// Refactor code attached to hints about definitions that are never read.
pub const CODE_UNUSED_DEFINITION: &str = "unused definition";

/// Sink for everything the lexer, parser and checker have to say.
///
/// None of those components keeps diagnostics around; whatever is passed in
/// here decides whether they are dropped, collected or printed.
pub trait Reporter {
    fn report_error(&mut self, span: Span, message: String);
    fn report_hint(&mut self, span: Span, message: String, code: &str);
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report_error(&mut self, span: Span, message: String) {
        (**self).report_error(span, message)
    }

    fn report_hint(&mut self, span: Span, message: String, code: &str) {
        (**self).report_hint(span, message, code)
    }
}

/// Drops everything. Used where a query only needs the tree.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn report_error(&mut self, _span: Span, _message: String) {}

    fn report_hint(&mut self, _span: Span, _message: String, _code: &str) {}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Hint,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    Error {
        span: Span,
        message: String,
    },
    Hint {
        span: Span,
        message: String,
        code: String,
    },
}

impl Diagnostic {
    pub fn error(span: Span, message: impl Into<String>) -> Self {
        Diagnostic::Error {
            span,
            message: message.into(),
        }
    }

    pub fn hint(span: Span, message: impl Into<String>, code: impl Into<String>) -> Self {
        Diagnostic::Hint {
            span,
            message: message.into(),
            code: code.into(),
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Diagnostic::Error { .. } => Severity::Error,
            Diagnostic::Hint { .. } => Severity::Hint,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Diagnostic::Error { span, .. } | Diagnostic::Hint { span, .. } => *span,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Diagnostic::Error { message, .. } | Diagnostic::Hint { message, .. } => message,
        }
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            Diagnostic::Error { .. } => None,
            Diagnostic::Hint { code, .. } => Some(code),
        }
    }
}

/// Keeps every report, in the order it was made.
#[derive(Clone, Debug, Default)]
pub struct CollectingReporter {
    diagnostics: Vec<Diagnostic>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|diag| diag.severity() == Severity::Error)
    }

    pub fn hints(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|diag| diag.severity() == Severity::Hint)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }
}

impl Reporter for CollectingReporter {
    fn report_error(&mut self, span: Span, message: String) {
        self.diagnostics.push(Diagnostic::Error { span, message });
    }

    fn report_hint(&mut self, span: Span, message: String, code: &str) {
        self.diagnostics.push(Diagnostic::Hint {
            span,
            message,
            code: code.to_string(),
        });
    }
}
