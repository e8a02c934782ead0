//! Generic fallback definition
//!
//! Used for every label without a dedicated table. Only constructs that
//! look the same across most C-like and scripting languages.

use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::HighlightPass;
use crate::syntax::tokens::TokenType;

/// Create the generic language definition
pub fn generic_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("Generic");

    lang.add_pass(HighlightPass::with_captures(
        "comment_or_string",
        r#"(//[^\n]*|/\*[\s\S]*?\*/|#[^\n]*)|("(?:\\.|[^"\\\n])*"|'(?:\\.|[^'\\\n])*')"#,
        &[(1, TokenType::Comment), (2, TokenType::String)],
    ));

    let keywords = r"\b(if|else|for|while|do|switch|case|break|continue|function|fn|def|return|class|struct|enum|interface|public|private|protected|static|final|const|let|var|void|int|string|bool|true|false|null|nil|new|import|package)\b";
    lang.add_pass(HighlightPass::new("keyword", keywords, TokenType::Keyword));

    lang.add_pass(HighlightPass::new("number", r"\d+\.?\d*|\.\d+", TokenType::Number).map(HighlightPass::bounded));

    lang
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_common_constructs() {
        let lang = generic_language();
        let text = lang.annotate("func main() {\n  if x > 10 { return \"big\" } // done\n}");

        let tokens: Vec<_> = text.tokens().collect();
        assert!(tokens.contains(&("if", TokenType::Keyword)));
        assert!(tokens.contains(&("return", TokenType::Keyword)));
        assert!(tokens.contains(&("10", TokenType::Number)));
        assert!(tokens.contains(&("\"big\"", TokenType::String)));
        assert!(tokens.contains(&("// done", TokenType::Comment)));
    }

    #[test]
    fn test_generic_hash_comment() {
        let text = generic_language().annotate("x = 1 # note");
        assert!(text.tokens().any(|(t, k)| t == "# note" && k == TokenType::Comment));
    }

    #[test]
    fn test_generic_no_match() {
        let text = generic_language().annotate("αβγ + δ");
        assert!(text.is_unstyled());
        assert_eq!(text.plain_text(), "αβγ + δ");
    }
}
