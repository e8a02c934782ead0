//! Syntax highlighting
//!
//! Raw code goes in, `AnnotatedText` comes out. Each language is a
//! data-only table of ordered passes; the engine that folds them over the
//! text is shared by every table, including the generic fallback.

mod annotated;
mod builtin;
mod language;
mod manager;
mod rules;
mod style;
mod tokens;

pub use annotated::{AnnotatedText, Segment};
pub use language::LanguageDefinition;
pub use manager::SyntaxManager;
pub use rules::{is_ident_char, HighlightPass};
pub use style::{Color, Style};
pub use tokens::TokenType;

/// Highlight raw code using the table selected by `language`
///
/// Unrecognised labels use the generic table. Never fails.
pub fn annotate(code: &str, language: &str) -> AnnotatedText {
    SyntaxManager::global().annotate(code, language)
}
