//! HTML language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::HighlightPass;
use crate::syntax::tokens::TokenType;

/// Create HTML language definition
pub fn html_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("HTML");
    lang.add_key("html");
    lang.add_extension("html");
    lang.add_extension("htm");

    lang.add_pass(HighlightPass::new("comment", r"<!--[\s\S]*?-->", TokenType::Comment));
    lang.add_pass(HighlightPass::new("doctype", r"<![A-Za-z][^>\n]*>", TokenType::Keyword));

    // Attributes only inside an opening tag; text like `x="y"` between
    // tags is left alone
    let open_tag_parts = HighlightPass::with_captures(
        "open_tag_parts",
        r#"(<[A-Za-z][\w-]*)|\s([A-Za-z_:][\w:.-]*)=("[^"]*"|'[^']*')|(/?>)"#,
        &[
            (1, TokenType::Tag),
            (2, TokenType::Attribute),
            (3, TokenType::String),
            (4, TokenType::Operator),
        ],
    );
    lang.add_pass(
        HighlightPass::with_captures(
            "open_tag",
            r#"<[A-Za-z][\w-]*(?:\s+[A-Za-z_:][\w:.-]*(?:=(?:"[^"]*"|'[^']*'|[^\s"'=<>`]+))?)*\s*/?>"#,
            &[],
        )
        .zip(open_tag_parts)
        .map(|(pass, inner)| pass.nest(0, inner)),
    );

    lang.add_pass(HighlightPass::new("tag", r"</?[A-Za-z][\w-]*", TokenType::Tag));

    lang.add_pass(HighlightPass::new("bracket", r"/?>|<", TokenType::Operator));

    lang
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(code: &str) -> Vec<(String, TokenType)> {
        html_language()
            .annotate(code)
            .tokens()
            .map(|(t, k)| (t.to_string(), k))
            .collect()
    }

    fn has(tokens: &[(String, TokenType)], text: &str, token: TokenType) -> bool {
        tokens.iter().any(|(t, k)| t == text && *k == token)
    }

    #[test]
    fn test_html_tags_and_attributes() {
        let found = tokens(r#"<a href="/home" class='nav'>Home</a>"#);
        assert!(has(&found, "<a", TokenType::Tag));
        assert!(has(&found, "</a", TokenType::Tag));
        assert!(has(&found, "href", TokenType::Attribute));
        assert!(has(&found, r#""/home""#, TokenType::String));
        assert!(has(&found, "class", TokenType::Attribute));
        assert!(has(&found, "'nav'", TokenType::String));
        assert!(has(&found, ">", TokenType::Operator));
    }

    #[test]
    fn test_text_between_tags_is_not_attribute() {
        let found = tokens(r#"<p>set x="y" first</p>"#);
        assert!(has(&found, "<p", TokenType::Tag));
        assert!(!found.iter().any(|(_, k)| *k == TokenType::Attribute));
        assert!(!has(&found, r#""y""#, TokenType::String));
    }

    #[test]
    fn test_html_comment_hides_tags() {
        let found = tokens("<!-- <div> -->\n<p>x</p>");
        assert!(has(&found, "<!-- <div> -->", TokenType::Comment));
        assert!(!has(&found, "<div", TokenType::Tag));
        assert!(has(&found, "<p", TokenType::Tag));
    }

    #[test]
    fn test_html_doctype_and_self_closing() {
        let found = tokens("<!DOCTYPE html>\n<br/>");
        assert!(has(&found, "<!DOCTYPE html>", TokenType::Keyword));
        assert!(has(&found, "<br", TokenType::Tag));
        assert!(has(&found, "/>", TokenType::Operator));
    }
}
