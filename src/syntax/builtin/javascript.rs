//! JavaScript / TypeScript language definition
//!
//! Both labels share one rule table; they differ only in name, key and
//! file extensions.

use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::HighlightPass;
use crate::syntax::tokens::TokenType;

/// Create JavaScript language definition
pub fn javascript_language() -> LanguageDefinition {
    script_language("JavaScript", "javascript", &["js", "jsx", "mjs", "cjs"])
}

/// Create TypeScript language definition
pub fn typescript_language() -> LanguageDefinition {
    script_language("TypeScript", "typescript", &["ts", "tsx", "mts"])
}

fn script_language(name: &str, key: &str, extensions: &[&str]) -> LanguageDefinition {
    let mut lang = LanguageDefinition::new(name);
    lang.add_key(key);
    for ext in extensions {
        lang.add_extension(ext);
    }

    // Attributes are only styled inside a JSX opening tag
    let jsx_open_tag = HighlightPass::with_captures(
        "jsx_open_tag",
        r#"(<[A-Za-z][\w.]*)|\s([A-Za-z_][\w-]*)=("[^"\n]*"|'[^'\n]*')"#,
        &[
            (1, TokenType::Tag),
            (2, TokenType::Attribute),
            (3, TokenType::String),
        ],
    );

    // Comments, opening tags and strings in one pass so the leftmost
    // construct wins ("http://x" stays a string, // don't stays a comment)
    lang.add_pass(
        HighlightPass::with_captures(
            "comment_tag_string",
            r#"(//[^\n]*|/\*[\s\S]*?\*/)|(<[A-Za-z][\w.]*(?:\s+[A-Za-z_][\w-]*(?:=(?:"[^"\n]*"|'[^'\n]*'|\{[^{}\n]*\}))?)*\s*/?>)|("(?:\\.|[^"\\\n])*"|'(?:\\.|[^'\\\n])*'|`(?:\\.|[^`\\])*`)"#,
            &[(1, TokenType::Comment), (3, TokenType::String)],
        )
        .zip(jsx_open_tag)
        .map(|(pass, inner)| pass.nest(2, inner)),
    );

    // Closing tags and opening tags split across lines, before the
    // operator pass takes the angle brackets
    lang.add_pass(HighlightPass::new("jsx_tag", r"</?[A-Za-z][\w.]*", TokenType::Tag));

    let keywords = r"\b(const|let|var|function|return|if|else|for|while|do|switch|case|break|continue|new|delete|class|import|export|from|default|async|await|try|catch|throw|finally|typeof|instanceof|of|in|this|null|undefined|true|false|yield)\b";
    lang.add_pass(HighlightPass::new("keyword", keywords, TokenType::Keyword));

    let types = r"\b(string|number|boolean|any|void|never|unknown|interface|type|extends|implements|namespace|enum|readonly)\b";
    lang.add_pass(HighlightPass::new("type", types, TokenType::Type));

    lang.add_pass(HighlightPass::new(
        "error_type",
        r"\b(?:Error|TypeError|SyntaxError|RangeError|ReferenceError)\b",
        TokenType::ErrorType,
    ));

    lang.add_pass(HighlightPass::new(
        "network",
        r"\b(?:fetch|axios|XMLHttpRequest)\b",
        TokenType::Network,
    ));

    // Browser globals; only the name is styled, the dot is left for operators
    lang.add_pass(HighlightPass::group(
        "browser_global",
        r"\b(document|window|localStorage|sessionStorage|navigator|console)\.",
        1,
        TokenType::Global,
    ));

    // React hooks (useState, useEffect, ...)
    lang.add_pass(HighlightPass::new("hook", r"\buse[A-Z]\w*", TokenType::Function));

    lang.add_pass(HighlightPass::new(
        "array_method",
        r"\.(?:map|filter|reduce|forEach|find|some|every|includes|flatMap|sort|slice|splice)\b",
        TokenType::Function,
    ));

    lang.add_pass(HighlightPass::new("number", r"\d+\.?\d*|\.\d+", TokenType::Number).map(HighlightPass::bounded));

    lang.add_pass(HighlightPass::new(
        "operator",
        r"=>|===|!==|==|!=|>=|<=|&&|\|\||[{}()\[\]=+\-*/%|^!?:;,.<>&]",
        TokenType::Operator,
    ));

    lang
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(code: &str) -> Vec<(String, TokenType)> {
        javascript_language()
            .annotate(code)
            .tokens()
            .map(|(t, k)| (t.to_string(), k))
            .collect()
    }

    fn has(tokens: &[(String, TokenType)], text: &str, token: TokenType) -> bool {
        tokens.iter().any(|(t, k)| t == text && *k == token)
    }

    #[test]
    fn test_js_keywords() {
        let found = tokens("const x = 5;");
        assert!(has(&found, "const", TokenType::Keyword));
        assert!(has(&found, "5", TokenType::Number));
        assert!(has(&found, "=", TokenType::Operator));
    }

    #[test]
    fn test_js_string_beats_comment() {
        let found = tokens(r#"const url = "http://example.com"; // fetch it"#);
        assert!(has(&found, r#""http://example.com""#, TokenType::String));
        assert!(has(&found, "// fetch it", TokenType::Comment));
    }

    #[test]
    fn test_js_comment_beats_string() {
        let found = tokens("// don't panic\nlet a = 'ok';");
        assert!(has(&found, "// don't panic", TokenType::Comment));
        assert!(has(&found, "'ok'", TokenType::String));
    }

    #[test]
    fn test_js_idioms() {
        let found = tokens("const [v, setV] = useState(0);\nitems.map(x => x);\nconsole.log(v);\nfetch(url);\nthrow new TypeError('x');");
        assert!(has(&found, "useState", TokenType::Function));
        assert!(has(&found, ".map", TokenType::Function));
        assert!(has(&found, "console", TokenType::Global));
        assert!(has(&found, "fetch", TokenType::Network));
        assert!(has(&found, "TypeError", TokenType::ErrorType));
    }

    #[test]
    fn test_jsx_tags_and_attributes() {
        let found = tokens(r#"return <div className="box">{x}</div>;"#);
        assert!(has(&found, "<div", TokenType::Tag));
        assert!(has(&found, "</div", TokenType::Tag));
        assert!(has(&found, "className", TokenType::Attribute));
        assert!(has(&found, r#""box""#, TokenType::String));
    }

    #[test]
    fn test_jsx_expression_attributes() {
        let found = tokens(r#"<Button onClick={go} label='Go' disabled />"#);
        assert!(has(&found, "<Button", TokenType::Tag));
        assert!(has(&found, "label", TokenType::Attribute));
        assert!(has(&found, "'Go'", TokenType::String));
        assert!(has(&found, "/", TokenType::Operator));
    }

    #[test]
    fn test_assignment_is_not_attribute() {
        let found = tokens(r#"let name="Bob";"#);
        assert!(!found.iter().any(|(_, k)| *k == TokenType::Attribute));
        assert!(has(&found, "let", TokenType::Keyword));
        assert!(has(&found, r#""Bob""#, TokenType::String));
    }

    #[test]
    fn test_string_containing_markup() {
        let found = tokens(r#"const s = "<a href='x'>";"#);
        assert!(has(&found, r#""<a href='x'>""#, TokenType::String));
        assert!(!found.iter().any(|(_, k)| matches!(k, TokenType::Tag | TokenType::Attribute)));
    }

    #[test]
    fn test_ts_types() {
        let found = tokens("interface User { name: string; age: number }");
        assert!(has(&found, "interface", TokenType::Type));
        assert!(has(&found, "string", TokenType::Type));
        assert!(has(&found, "number", TokenType::Type));
    }

    #[test]
    fn test_template_literal_spans_lines() {
        let found = tokens("const s = `a\nb`;");
        assert!(has(&found, "`a\nb`", TokenType::String));
    }

    #[test]
    fn test_number_inside_identifier() {
        let found = tokens("var1 = 123abc");
        assert!(!found.iter().any(|(_, k)| *k == TokenType::Number));
        assert!(!has(&found, "var", TokenType::Keyword));
    }

    #[test]
    fn test_typescript_shares_table() {
        let ts = typescript_language();
        assert_eq!(ts.keys, vec!["typescript".to_string()]);
        assert_eq!(ts.passes.len(), javascript_language().passes.len());
    }
}
