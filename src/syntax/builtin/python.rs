//! Python language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::HighlightPass;
use crate::syntax::tokens::TokenType;

/// Create Python language definition
pub fn python_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("Python");
    lang.add_key("python");
    lang.add_extension("py");
    lang.add_extension("pyw");
    lang.add_extension("pyi");

    // Comments and strings; triple quotes are tried before single ones
    lang.add_pass(HighlightPass::with_captures(
        "comment_or_string",
        r#"(#[^\n]*)|((?:\b[rRbBuUfF]{1,2})?(?:"""[\s\S]*?"""|'''[\s\S]*?'''|"(?:\\.|[^"\\\n])*"|'(?:\\.|[^'\\\n])*'))"#,
        &[(1, TokenType::Comment), (2, TokenType::String)],
    ));

    lang.add_pass(HighlightPass::new("decorator", r"@[A-Za-z_][\w.]*", TokenType::Decorator));

    let keywords = r"\b(False|None|True|and|as|assert|async|await|break|class|continue|def|del|elif|else|except|finally|for|from|global|if|import|in|is|lambda|nonlocal|not|or|pass|raise|return|try|while|with|yield)\b";
    lang.add_pass(HighlightPass::new("keyword", keywords, TokenType::Keyword));

    lang.add_pass(HighlightPass::new("self", r"\b(?:self|cls)\b", TokenType::SelfParam));

    // Built-ins only when called
    let builtins = r"\b(print|len|str|int|float|bool|list|dict|tuple|set|sum|min|max|abs|any|all|sorted|reversed|range|enumerate|zip|map|filter|open|isinstance|super|type|repr|input)(\s*\()";
    lang.add_pass(HighlightPass::group("builtin", builtins, 1, TokenType::Function));

    lang.add_pass(
        HighlightPass::new(
            "number",
            r"0[xXbBoO][0-9a-fA-F_]+|\d[\d_]*\.?\d*(?:[eE][+-]?\d+)?j?|\.\d+",
            TokenType::Number,
        )
        .map(HighlightPass::bounded),
    );

    lang.add_pass(HighlightPass::new("operator", r"->|[+\-*/%&|^!<>=~]+", TokenType::Operator));
    lang.add_pass(HighlightPass::new("punctuation", r"[()\[\]{}:,.;]", TokenType::Punctuation));

    lang
}
