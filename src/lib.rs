pub mod config;
pub mod diagnostics;
pub mod language;
pub mod lsp;

#[cfg(test)]
mod test_helpers;
#[cfg(test)]
mod tests;

pub use config::{AnalysisConfig, ConfigError};
pub use language::{errors::Reporter, parser::parse_file, typecheck::check};
pub use lsp::{analyze, complete, find_code_actions};
