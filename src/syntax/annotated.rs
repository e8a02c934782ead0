//! Annotated text
//!
//! Highlighting output is kept as a run of literal and styled segments
//! rather than a markup string. Passes split literal segments only, so a
//! later pass can never re-match text an earlier one styled. Markup is
//! produced at the render boundary (see `crate::markup`).

use super::rules::HighlightPass;
use super::tokens::TokenType;

/// One run of source text, styled or not
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub token: Option<TokenType>,
}

impl Segment {
    fn literal(text: &str) -> Self {
        Self {
            text: text.to_string(),
            token: None,
        }
    }

    fn styled(text: &str, token: TokenType) -> Self {
        Self {
            text: text.to_string(),
            token: Some(token),
        }
    }
}

/// Source text split into literal and styled segments
///
/// Invariant: concatenating the segment texts yields the original input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotatedText {
    segments: Vec<Segment>,
}

impl AnnotatedText {
    /// Wrap raw text as a single literal segment
    pub fn plain(text: &str) -> Self {
        let segments = if text.is_empty() {
            Vec::new()
        } else {
            vec![Segment::literal(text)]
        };
        Self { segments }
    }

    /// All segments in document order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The original text, without any styling
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Styled segments as (text, token) pairs
    pub fn tokens(&self) -> impl Iterator<Item = (&str, TokenType)> {
        self.segments
            .iter()
            .filter_map(|s| s.token.map(|t| (s.text.as_str(), t)))
    }

    /// Check if no pass styled anything
    pub fn is_unstyled(&self) -> bool {
        self.segments.iter().all(|s| s.token.is_none())
    }

    /// Apply one pass to every literal segment
    ///
    /// Returns the number of regions styled.
    pub fn apply(&mut self, pass: &HighlightPass) -> usize {
        let old = std::mem::take(&mut self.segments);
        let mut styled = 0;

        for (idx, segment) in old.iter().enumerate() {
            if segment.token.is_some() {
                self.segments.push(segment.clone());
                continue;
            }

            let before = idx
                .checked_sub(1)
                .and_then(|i| old[i].text.chars().next_back());
            let after = old.get(idx + 1).and_then(|s| s.text.chars().next());

            let ranges = pass.find_in(&segment.text, before, after);
            if ranges.is_empty() {
                self.segments.push(segment.clone());
                continue;
            }

            let mut pos = 0;
            for (range, token) in ranges {
                if range.start < pos {
                    // Overlapping groups within one match; first one wins
                    continue;
                }
                if range.start > pos {
                    self.segments.push(Segment::literal(&segment.text[pos..range.start]));
                }
                self.segments.push(Segment::styled(&segment.text[range.clone()], token));
                pos = range.end;
                styled += 1;
            }
            if pos < segment.text.len() {
                self.segments.push(Segment::literal(&segment.text[pos..]));
            }
        }

        styled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number_pass() -> HighlightPass {
        HighlightPass::new("number", r"\d+", TokenType::Number).unwrap().bounded()
    }

    #[test]
    fn test_plain() {
        let text = AnnotatedText::plain("hello");
        assert_eq!(text.segments().len(), 1);
        assert!(text.is_unstyled());
        assert!(AnnotatedText::plain("").segments().is_empty());
    }

    #[test]
    fn test_apply_splits_literal() {
        let mut text = AnnotatedText::plain("x = 42;");
        assert_eq!(text.apply(&number_pass()), 1);

        let segments = text.segments();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].text, "x = ");
        assert_eq!(segments[1], Segment::styled("42", TokenType::Number));
        assert_eq!(segments[2].text, ";");
        assert_eq!(text.plain_text(), "x = 42;");
    }

    #[test]
    fn test_styled_segments_not_rematched() {
        let string_pass = HighlightPass::new("string", r#""[^"]*""#, TokenType::String).unwrap();
        let mut text = AnnotatedText::plain(r#"a = "7" + 8"#);
        text.apply(&string_pass);
        text.apply(&number_pass());

        let tokens: Vec<_> = text.tokens().collect();
        assert_eq!(tokens, vec![(r#""7""#, TokenType::String), ("8", TokenType::Number)]);
    }

    #[test]
    fn test_boundary_checked_across_segments() {
        let word_pass = HighlightPass::new("word", r"abc", TokenType::Keyword).unwrap();
        let mut text = AnnotatedText::plain("abc12");
        text.apply(&word_pass);
        // "12" sits right after a styled identifier run
        assert_eq!(text.apply(&number_pass()), 0);
    }

    #[test]
    fn test_plain_text_preserved() {
        let mut text = AnnotatedText::plain("a 1 b 22 c 333");
        text.apply(&number_pass());
        assert_eq!(text.plain_text(), "a 1 b 22 c 333");
        assert_eq!(text.tokens().count(), 3);
    }
}
