//! CSS / SCSS language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::HighlightPass;
use crate::syntax::tokens::TokenType;

/// Create CSS language definition
pub fn css_language() -> LanguageDefinition {
    style_language("CSS", "css", &["css"], r"/\*[\s\S]*?\*/")
}

/// Create SCSS language definition
pub fn scss_language() -> LanguageDefinition {
    // SCSS also allows `//` line comments
    style_language("SCSS", "scss", &["scss", "sass"], r"/\*[\s\S]*?\*/|//[^\n]*")
}

fn style_language(name: &str, key: &str, extensions: &[&str], comment: &str) -> LanguageDefinition {
    let mut lang = LanguageDefinition::new(name);
    lang.add_key(key);
    for ext in extensions {
        lang.add_extension(ext);
    }

    lang.add_pass(HighlightPass::with_captures(
        "comment_or_string",
        &format!(r#"({})|("[^"\n]*"|'[^'\n]*')"#, comment),
        &[(1, TokenType::Comment), (2, TokenType::String)],
    ));

    lang.add_pass(HighlightPass::new(
        "at_rule",
        r"@(?:media|keyframes|import|font-face|supports|charset|namespace|page|layer|container|mixin|include|extend|use)\b",
        TokenType::AtRule,
    ));

    // A property is a name followed by `:` whose value runs to `;`, `}` or
    // end of line. `a:hover {` never reaches a terminator, so it is skipped.
    lang.add_pass(HighlightPass::group(
        "property",
        r"(?m)(-{0,2}[A-Za-z][\w-]*)\s*:[^;{}\n]*(?:;|\}|$)",
        1,
        TokenType::Property,
    ));

    lang.add_pass(HighlightPass::group(
        "selector",
        r"([.#][A-Za-z_-][\w-]*)[\s,{]",
        1,
        TokenType::Selector,
    ));

    // Pseudo-classes directly after a selector word (a:hover, li::before)
    lang.add_pass(HighlightPass::group(
        "pseudo_selector",
        r"[\w)\]](::?[A-Za-z-]+(?:\([^)\n]*\))?)",
        1,
        TokenType::Selector,
    ));

    lang.add_pass(HighlightPass::new("hex_color", r"#[a-fA-F0-9]{3,8}", TokenType::HexColor).map(HighlightPass::bounded));

    lang.add_pass(
        HighlightPass::new(
            "unit",
            r"\d*\.?\d+(?:px|rem|em|vh|vw|vmin|vmax|ms|s|deg|fr|ch|%)",
            TokenType::Unit,
        )
        .map(HighlightPass::bounded),
    );

    lang.add_pass(HighlightPass::new("number", r"\d*\.?\d+", TokenType::Number).map(HighlightPass::bounded));

    lang.add_pass(HighlightPass::group("value", r":\s*([A-Za-z-][\w-]*)", 1, TokenType::Value));

    lang.add_pass(HighlightPass::new("punctuation", r"[{};:,()]", TokenType::Punctuation));

    lang
}
