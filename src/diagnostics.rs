use crate::language::{
    errors::{Diagnostic, Reporter, CODE_UNUSED_DEFINITION},
    span::Span,
};
use miette::{GraphicalReportHandler, GraphicalTheme, NamedSource, SourceSpan};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, miette::Diagnostic, Clone)]
#[error("{message}")]
pub struct ErrorDiagnostic {
    #[source_code]
    src: NamedSource<String>,
    #[label("here")]
    span: SourceSpan,
    message: String,
}

#[derive(Debug, Error, miette::Diagnostic, Clone)]
#[error("{message}")]
#[diagnostic(severity(Advice))]
pub struct HintDiagnostic {
    #[source_code]
    src: NamedSource<String>,
    #[label("{code}")]
    span: SourceSpan,
    #[help]
    help: Option<String>,
    message: String,
    code: String,
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to render diagnostic: {0}")]
    Format(#[from] fmt::Error),
}

/// Collects reports for one named source and renders them the way a terminal
/// user expects to see them.
pub struct ConsoleReporter {
    src: NamedSource<String>,
    diagnostics: Vec<Diagnostic>,
    handler: GraphicalReportHandler,
}

impl ConsoleReporter {
    pub fn new(name: impl AsRef<str>, source: impl Into<String>) -> Self {
        Self {
            src: NamedSource::new(name, source.into()),
            diagnostics: Vec::new(),
            handler: GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor()),
        }
    }

    /// Renders with the given theme, e.g. `GraphicalTheme::unicode()` for a tty.
    pub fn with_theme(mut self, theme: GraphicalTheme) -> Self {
        self.handler = GraphicalReportHandler::new_themed(theme);
        self
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn render(&self) -> Result<String, RenderError> {
        let mut out = String::new();
        for diag in &self.diagnostics {
            match diag {
                Diagnostic::Error { span, message } => {
                    let report = ErrorDiagnostic {
                        src: self.src.clone(),
                        span: span.to_source_span(),
                        message: message.clone(),
                    };
                    self.handler.render_report(&mut out, &report)?;
                }
                Diagnostic::Hint {
                    span,
                    message,
                    code,
                } => {
                    let report = HintDiagnostic {
                        src: self.src.clone(),
                        span: span.to_source_span(),
                        help: fix_hint(code),
                        message: message.clone(),
                        code: code.clone(),
                    };
                    self.handler.render_report(&mut out, &report)?;
                }
            }
        }
        Ok(out)
    }

    /// Renders everything to stderr.
    pub fn emit(&self) -> Result<(), RenderError> {
        let out = self.render()?;
        eprint!("{out}");
        Ok(())
    }
}

fn fix_hint(code: &str) -> Option<String> {
    match code {
        CODE_UNUSED_DEFINITION => {
            Some("remove the assignment or read the variable".to_string())
        }
        _ => None,
    }
}

impl Reporter for ConsoleReporter {
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
