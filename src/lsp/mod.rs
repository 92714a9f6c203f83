pub mod code_action;
pub mod completion;
pub mod diagnostics;
pub mod text;

pub use code_action::{find_code_actions, CodeAction};
pub use completion::{complete, CompletionItem};
pub use diagnostics::{analyze, analyze_with, Analysis};
pub use text::{offset_at, position_at};
