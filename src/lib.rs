//! snipkit - code snippet pattern tagging and highlighting
//!
//! Takes raw snippet text plus a free-text language label and produces
//! highlighted markup, detected idiom patterns and derived tags. Nothing
//! here touches storage; every entry point is a pure function of its
//! input.
//!
//! ```
//! let tags = snipkit::synthesize_tags("items.map(x => x * 2)", "JavaScript");
//! assert!(tags.iter().any(|t| t.name == "array-methods"));
//! ```

pub mod config;
pub mod error;
pub mod markup;
pub mod patterns;
pub mod render;
pub mod syntax;
pub mod tags;

pub use markup::DecorateOptions;
pub use patterns::DetectedPattern;
pub use render::{render_snippet, RenderOptions};
pub use syntax::AnnotatedText;
pub use tags::{Tag, TagKind};

/// Detect the idioms a snippet uses, in catalog order
pub fn detect_patterns(code: &str) -> Vec<DetectedPattern> {
    patterns::detect(code)
}

/// Derive the deduplicated tag list for a snippet
pub fn synthesize_tags(code: &str, language: &str) -> Vec<Tag> {
    tags::synthesize(code, language)
}

/// Highlight raw code into HTML markup
///
/// The input is always treated as raw text. Feeding the output back in
/// highlights the markup itself, so the result is not idempotent.
pub fn highlight(code: &str, language: &str) -> String {
    markup::to_html(&syntax::annotate(code, language), &[])
}

/// Apply line numbering and emphasis to highlighted markup
pub fn decorate_markup(markup: &str, options: &DecorateOptions) -> String {
    markup::decorate_markup(markup, options)
}
