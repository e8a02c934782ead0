//! Token types for syntax highlighting
//!
//! This module defines the semantic token categories the rule tables
//! assign, and how each one looks in HTML and in a terminal.

use super::style::{Color, Style};

/// Semantic token types for syntax highlighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// Reserved words (const, def, SELECT, ...)
    Keyword,
    /// Declared-type keywords (string, interface, ...)
    Type,
    /// String literals, including triple-quoted and template strings
    String,
    /// Numeric literals
    Number,
    /// Operators and brackets
    Operator,
    /// Separators that get a muted colour
    Punctuation,
    /// Line and block comments
    Comment,
    /// Hooks, array methods, built-in functions
    Function,
    /// Browser globals (document, window, console, ...)
    Global,
    /// Network call identifiers (fetch, axios)
    Network,
    /// Error type names
    ErrorType,
    /// Markup tags and JSX element names
    Tag,
    /// Markup and JSX attribute names
    Attribute,
    /// CSS property names
    Property,
    /// CSS keyword values
    Value,
    /// CSS numbers with units
    Unit,
    /// Hex colours
    HexColor,
    /// CSS at-rules
    AtRule,
    /// CSS class and id selectors
    Selector,
    /// Python decorators
    Decorator,
    /// Python `self` / `cls`
    SelfParam,
}

impl TokenType {
    /// Get the terminal style for this token type
    pub fn default_style(&self) -> Style {
        match self {
            TokenType::Keyword => Style::fg(Color::Magenta).with_bold(),
            TokenType::Type => Style::fg(Color::Yellow),
            TokenType::String => Style::fg(Color::Green),
            TokenType::Number => Style::fg(Color::BrightYellow),
            TokenType::Operator => Style::fg(Color::Cyan),
            TokenType::Punctuation => Style::default(),
            TokenType::Comment => Style::fg(Color::Grey).with_italic(),
            TokenType::Function => Style::fg(Color::Blue),
            TokenType::Global => Style::fg(Color::Red),
            TokenType::Network => Style::fg(Color::Cyan).with_underline(),
            TokenType::ErrorType => Style::fg(Color::Red).with_bold(),
            TokenType::Tag => Style::fg(Color::Red),
            TokenType::Attribute => Style::fg(Color::BrightYellow),
            TokenType::Property => Style::fg(Color::Red),
            TokenType::Value => Style::fg(Color::Green),
            TokenType::Unit => Style::fg(Color::BrightYellow),
            TokenType::HexColor => Style::fg(Color::Cyan),
            TokenType::AtRule => Style::fg(Color::Magenta).with_bold(),
            TokenType::Selector => Style::fg(Color::Blue),
            TokenType::Decorator => Style::fg(Color::BrightBlue),
            TokenType::SelfParam => Style::fg(Color::Red),
        }
    }

    /// Hex colour used in HTML markup (one-dark palette)
    pub fn hex_color(&self) -> &'static str {
        match self {
            TokenType::Keyword | TokenType::AtRule => "#C678DD",
            TokenType::Type => "#E5C07B",
            TokenType::String | TokenType::Value => "#98C379",
            TokenType::Number | TokenType::Attribute | TokenType::Unit => "#D19A66",
            TokenType::Operator | TokenType::Network | TokenType::HexColor => "#56B6C2",
            TokenType::Punctuation => "#ABB2BF",
            TokenType::Comment => "#5C6370",
            TokenType::Function | TokenType::Decorator | TokenType::Selector => "#61AFEF",
            TokenType::Global
            | TokenType::ErrorType
            | TokenType::Tag
            | TokenType::Property
            | TokenType::SelfParam => "#E06C75",
        }
    }

    /// Get a human-readable name for this token type
    pub fn name(&self) -> &'static str {
        match self {
            TokenType::Keyword => "keyword",
            TokenType::Type => "type",
            TokenType::String => "string",
            TokenType::Number => "number",
            TokenType::Operator => "operator",
            TokenType::Punctuation => "punctuation",
            TokenType::Comment => "comment",
            TokenType::Function => "function",
            TokenType::Global => "global",
            TokenType::Network => "network",
            TokenType::ErrorType => "error-type",
            TokenType::Tag => "tag",
            TokenType::Attribute => "attribute",
            TokenType::Property => "property",
            TokenType::Value => "value",
            TokenType::Unit => "unit",
            TokenType::HexColor => "hex-color",
            TokenType::AtRule => "at-rule",
            TokenType::Selector => "selector",
            TokenType::Decorator => "decorator",
            TokenType::SelfParam => "self",
        }
    }

    /// CSS class emitted on the token's span
    pub fn class_name(&self) -> String {
        format!("tok-{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_styles() {
        assert!(!TokenType::Comment.default_style().is_default());
        assert!(!TokenType::String.default_style().is_default());
        assert!(!TokenType::Keyword.default_style().is_default());
        assert!(TokenType::Punctuation.default_style().is_default());
    }

    #[test]
    fn test_hex_colors() {
        assert_eq!(TokenType::Keyword.hex_color(), "#C678DD");
        assert_eq!(TokenType::Comment.hex_color(), "#5C6370");
        assert_eq!(TokenType::Number.hex_color(), "#D19A66");
        assert!(TokenType::Tag.hex_color().starts_with('#'));
    }

    #[test]
    fn test_class_name() {
        assert_eq!(TokenType::ErrorType.class_name(), "tok-error-type");
        assert_eq!(TokenType::Keyword.class_name(), "tok-keyword");
    }
}
