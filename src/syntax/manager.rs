//! Syntax highlighting manager
//!
//! This module provides the SyntaxManager that owns the compiled rule
//! tables and dispatches a language label to one of them.

use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use tracing::debug;

use super::annotated::AnnotatedText;
use super::builtin;
use super::language::LanguageDefinition;

static GLOBAL: LazyLock<SyntaxManager> = LazyLock::new(SyntaxManager::new);

/// Main syntax highlighting manager
pub struct SyntaxManager {
    /// Built-in language definitions
    languages: Vec<LanguageDefinition>,
    /// Lower-case label -> index into `languages`
    key_map: HashMap<String, usize>,
    /// Extension -> index into `languages`
    extension_map: HashMap<String, usize>,
    /// Table used for any unrecognised label
    generic: LanguageDefinition,
}

impl SyntaxManager {
    /// Create a new syntax manager with built-in languages
    pub fn new() -> Self {
        let mut manager = Self {
            languages: Vec::new(),
            key_map: HashMap::new(),
            extension_map: HashMap::new(),
            generic: builtin::generic_language(),
        };

        for lang in builtin::all_languages() {
            manager.add_language(lang);
        }

        manager
    }

    /// Shared manager; rule tables are compiled once per process
    pub fn global() -> &'static SyntaxManager {
        &GLOBAL
    }

    /// Add a language definition
    pub fn add_language(&mut self, lang: LanguageDefinition) {
        let idx = self.languages.len();
        for key in &lang.keys {
            self.key_map.insert(key.clone(), idx);
        }
        for ext in &lang.extensions {
            self.extension_map.insert(ext.clone(), idx);
        }
        self.languages.push(lang);
    }

    /// Get the table for a language label, falling back to the generic one
    pub fn resolve(&self, language: &str) -> &LanguageDefinition {
        match self.key_map.get(&language.to_lowercase()) {
            Some(&idx) => &self.languages[idx],
            None => {
                debug!(language, "no rule table for language, using generic");
                &self.generic
            }
        }
    }

    /// Check if a label selects a dedicated rule table
    pub fn is_supported(&self, language: &str) -> bool {
        self.key_map.contains_key(&language.to_lowercase())
    }

    /// Guess a language label from a filename
    pub fn detect_language(&self, filename: &Path) -> Option<&str> {
        let ext = filename.extension()?.to_str()?.to_lowercase();
        let idx = *self.extension_map.get(&ext)?;
        self.languages[idx].keys.first().map(|k| k.as_str())
    }

    /// Highlight raw code with the table selected by `language`
    pub fn annotate(&self, code: &str, language: &str) -> AnnotatedText {
        self.resolve(language).annotate(code)
    }

    /// List available languages
    pub fn list_languages(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.languages.iter().map(|l| l.name.as_str()).collect();
        names.sort();
        names
    }
}

impl Default for SyntaxManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_supported() {
        let manager = SyntaxManager::new();
        assert_eq!(manager.resolve("JavaScript").name, "JavaScript");
        assert_eq!(manager.resolve("typescript").name, "TypeScript");
        assert_eq!(manager.resolve("Python").name, "Python");
        assert_eq!(manager.resolve("SCSS").name, "SCSS");
        assert_eq!(manager.resolve("html").name, "HTML");
        assert_eq!(manager.resolve("SQL").name, "SQL");
    }

    #[test]
    fn test_resolve_fallback() {
        let manager = SyntaxManager::new();
        assert_eq!(manager.resolve("unknown-lang-xyz").name, "Generic");
        assert_eq!(manager.resolve("").name, "Generic");
        assert!(!manager.is_supported("Rust"));
        assert!(manager.is_supported("Python"));
    }

    #[test]
    fn test_detect_language() {
        let manager = SyntaxManager::new();

        assert_eq!(manager.detect_language(Path::new("app.js")), Some("javascript"));
        assert_eq!(manager.detect_language(Path::new("App.TSX")), Some("typescript"));
        assert_eq!(manager.detect_language(Path::new("main.py")), Some("python"));
        assert_eq!(manager.detect_language(Path::new("site.scss")), Some("scss"));
        assert_eq!(manager.detect_language(Path::new("index.htm")), Some("html"));
        assert_eq!(manager.detect_language(Path::new("schema.sql")), Some("sql"));
        assert_eq!(manager.detect_language(Path::new("main.rs")), None);
        assert_eq!(manager.detect_language(Path::new("no_extension")), None);
    }

    #[test]
    fn test_list_languages() {
        let manager = SyntaxManager::new();
        assert_eq!(manager.list_languages(), vec!["CSS", "HTML", "JavaScript", "Python", "SCSS", "SQL", "TypeScript"]);
    }

    #[test]
    fn test_global_is_shared() {
        assert!(std::ptr::eq(SyntaxManager::global(), SyntaxManager::global()));
    }
}
