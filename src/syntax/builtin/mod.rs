//! Built-in language definitions
//!
//! This module provides the rule tables for the supported languages
//! and the generic fallback.

mod css;
mod generic;
mod html;
mod javascript;
mod python;
mod sql;

use super::language::LanguageDefinition;

pub use generic::generic_language;

/// Get all built-in language definitions
pub fn all_languages() -> Vec<LanguageDefinition> {
    vec![
        javascript::javascript_language(),
        javascript::typescript_language(),
        python::python_language(),
        css::css_language(),
        css::scss_language(),
        html::html_language(),
        sql::sql_language(),
    ]
}
