//! SQL language definition
//!
//! Keywords and word operators match case-insensitively.

use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::HighlightPass;
use crate::syntax::tokens::TokenType;

/// Create SQL language definition
pub fn sql_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("SQL");
    lang.add_key("sql");
    lang.add_extension("sql");

    lang.add_pass(HighlightPass::with_captures(
        "comment_or_string",
        r"(--[^\n]*|/\*[\s\S]*?\*/)|('(?:''|\\.|[^'\\])*')",
        &[(1, TokenType::Comment), (2, TokenType::String)],
    ));

    // Multi-word keywords come first so `GROUP BY` is one token
    let keywords = r"(?i)\b(GROUP\s+BY|ORDER\s+BY|PRIMARY\s+KEY|FOREIGN\s+KEY|SELECT|DISTINCT|FROM|WHERE|JOIN|LEFT|RIGHT|INNER|OUTER|FULL|CROSS|ON|AS|HAVING|LIMIT|OFFSET|INSERT|INTO|VALUES|UPDATE|SET|DELETE|CREATE|ALTER|DROP|TABLE|VIEW|INDEX|TRIGGER|PROCEDURE|FUNCTION|CONSTRAINT|REFERENCES|UNIQUE|DEFAULT|UNION|ALL|CASE|WHEN|THEN|ELSE|END|ASC|DESC|WITH|RETURNING)\b";
    lang.add_pass(HighlightPass::new("keyword", keywords, TokenType::Keyword));

    lang.add_pass(HighlightPass::new("number", r"\d+\.?\d*|\.\d+", TokenType::Number).map(HighlightPass::bounded));

    lang.add_pass(HighlightPass::new(
        "operator",
        r"(?i)\b(?:IS\s+NOT\s+NULL|IS\s+NULL|NOT|IN|LIKE|BETWEEN|AND|OR|EXISTS)\b|<=|>=|!=|<>|=|<|>",
        TokenType::Operator,
    ));

    lang.add_pass(HighlightPass::new("punctuation", r"[(),;.*]", TokenType::Punctuation));

    lang
}
