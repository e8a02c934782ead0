//! Highlight passes
//!
//! A pass is one find-and-wrap step: a regex plus the capture groups it
//! styles. Passes never see text an earlier pass already styled; the
//! engine in `annotated` only hands them unstyled runs.

use std::ops::Range;

use regex::Regex;
use tracing::warn;

use super::tokens::TokenType;

/// A single ordered find-and-wrap pass
pub struct HighlightPass {
    /// Name for debugging
    pub name: String,
    /// Compiled regex pattern
    pub pattern: Regex,
    /// Capture group index -> token type. Group 0 styles the whole match.
    pub captures: Vec<(usize, TokenType)>,
    /// Reject matches touching identifier characters on either side
    pub bounded: bool,
    /// Capture group index -> pass run over that group's text only
    pub nested: Vec<(usize, HighlightPass)>,
}

impl HighlightPass {
    /// Create a pass that styles the whole match
    pub fn new(name: &str, pattern: &str, token_type: TokenType) -> Option<Self> {
        Self::with_captures(name, pattern, &[(0, token_type)])
    }

    /// Create a pass that styles a single capture group
    pub fn group(name: &str, pattern: &str, group: usize, token_type: TokenType) -> Option<Self> {
        Self::with_captures(name, pattern, &[(group, token_type)])
    }

    /// Create a pass that styles several capture groups
    ///
    /// Alternatives in one regex let the leftmost construct win, which is
    /// how comments and strings are kept from eating each other.
    pub fn with_captures(name: &str, pattern: &str, captures: &[(usize, TokenType)]) -> Option<Self> {
        match Regex::new(pattern) {
            Ok(regex) => Some(Self {
                name: name.to_string(),
                pattern: regex,
                captures: captures.to_vec(),
                bounded: false,
                nested: Vec::new(),
            }),
            Err(e) => {
                warn!(pass = name, error = %e, "dropping highlight pass with invalid pattern");
                None
            }
        }
    }

    /// Builder: require non-identifier characters around each match
    pub fn bounded(mut self) -> Self {
        self.bounded = true;
        self
    }

    /// Builder: style a capture group by running `inner` over its text
    ///
    /// Scopes constructs such as markup attributes to the tag they sit in.
    /// Parts of the group `inner` leaves alone stay unstyled.
    pub fn nest(mut self, group: usize, inner: HighlightPass) -> Self {
        self.nested.push((group, inner));
        self
    }

    /// Find the styled ranges in an unstyled run
    ///
    /// `before` and `after` are the characters adjacent to the run in the
    /// full document, used for the identifier boundary check.
    pub fn find_in(
        &self,
        text: &str,
        before: Option<char>,
        after: Option<char>,
    ) -> Vec<(Range<usize>, TokenType)> {
        let mut found = Vec::new();

        for caps in self.pattern.captures_iter(text) {
            let Some(whole) = caps.get(0) else { continue };
            if whole.start() == whole.end() {
                continue;
            }

            if self.bounded {
                let prev = text[..whole.start()].chars().next_back().or(before);
                let next = text[whole.end()..].chars().next().or(after);
                if prev.is_some_and(is_ident_char) || next.is_some_and(is_ident_char) {
                    continue;
                }
            }

            let mut ranges: Vec<(Range<usize>, TokenType)> = self
                .captures
                .iter()
                .filter_map(|&(group, token)| caps.get(group).map(|m| (m.range(), token)))
                .filter(|(range, _)| !range.is_empty())
                .collect();
            for (group, inner) in &self.nested {
                let Some(scope) = caps.get(*group) else { continue };
                ranges.extend(
                    inner
                        .find_in(scope.as_str(), None, None)
                        .into_iter()
                        .map(|(range, token)| (range.start + scope.start()..range.end + scope.start(), token)),
                );
            }
            ranges.sort_by_key(|(range, _)| range.start);
            found.extend(ranges);
        }

        found
    }
}

/// Characters that continue an identifier
pub fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
