//! Language definitions for syntax highlighting
//!
//! A LanguageDefinition is pure data: the language keys it answers to
//! and its ordered rule table. `annotate` folds the passes over the text
//! left to right, and knows nothing about any particular language.

use tracing::trace;

use super::annotated::AnnotatedText;
use super::rules::HighlightPass;

/// A rule table for one language (or the generic fallback)
pub struct LanguageDefinition {
    /// Language name (e.g., "JavaScript", "Python")
    pub name: String,
    /// Lower-case labels that select this table (e.g., ["javascript", "typescript"])
    pub keys: Vec<String>,
    /// File extensions used when no label is given (e.g., ["js", "jsx"])
    pub extensions: Vec<String>,
    /// Passes, applied strictly in declared order
    pub passes: Vec<HighlightPass>,
}

impl LanguageDefinition {
    /// Create a new empty language definition
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            keys: Vec::new(),
            extensions: Vec::new(),
            passes: Vec::new(),
        }
    }

    /// Add a language label
    pub fn add_key(&mut self, key: &str) {
        self.keys.push(key.to_lowercase());
    }

    /// Add a file extension
    pub fn add_extension(&mut self, ext: &str) {
        self.extensions.push(ext.to_lowercase());
    }

    /// Append a pass; invalid passes (None) are skipped
    pub fn add_pass(&mut self, pass: Option<HighlightPass>) {
        if let Some(pass) = pass {
            self.passes.push(pass);
        }
    }

    /// Run every pass over the text in declared order
    pub fn annotate(&self, code: &str) -> AnnotatedText {
        self.passes
            .iter()
            .fold(AnnotatedText::plain(code), |mut text, pass| {
                let styled = text.apply(pass);
                trace!(language = %self.name, pass = %pass.name, styled, "applied pass");
                text
            })
    }
}
