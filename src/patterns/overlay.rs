//! Pattern overlay
//!
//! Locates idiom regions (loop headers, API calls, ...) in raw code so the
//! renderer can wrap them in an outer annotation span. Unlike detection
//! this is positional. Earlier kinds claim text first; ranges never
//! overlap.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

/// Category of an overlay region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayKind {
    Loop,
    Api,
    Error,
    Debug,
    Array,
    Hook,
}

impl OverlayKind {
    /// Suffix used in the `pattern-highlight-<kind>` class
    pub fn class_suffix(&self) -> &'static str {
        match self {
            OverlayKind::Loop => "loop",
            OverlayKind::Api => "api",
            OverlayKind::Error => "error",
            OverlayKind::Debug => "debug",
            OverlayKind::Array => "array",
            OverlayKind::Hook => "hook",
        }
    }

    /// Full class attribute value for the overlay span
    pub fn class_attr(&self) -> String {
        format!("pattern-highlight pattern-highlight-{}", self.class_suffix())
    }
}

/// A located idiom, as byte offsets into the raw code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayRange {
    pub range: Range<usize>,
    pub kind: OverlayKind,
}

static OVERLAY_PATTERNS: LazyLock<Vec<(OverlayKind, Regex)>> = LazyLock::new(|| {
    [
        (OverlayKind::Loop, r"\bfor\s*\([^)]*\)|\bwhile\s*\([^)]*\)"),
        (
            OverlayKind::Api,
            r"\bfetch\s*\(|\baxios\.|XMLHttpRequest|\.get\(|\.post\(|\brequest\s*\(",
        ),
        (
            OverlayKind::Error,
            r"\btry\s*\{|\bcatch\s*\([^)]*\)|\bthrow\s+new\s+Error|\bthrow\s+|\bfinally\s*\{|\bexcept\s+|\braise\s+",
        ),
        (
            OverlayKind::Debug,
            r"console\.(?:log|error|debug)|\bdebugger\b|\bprint\s*\(",
        ),
        (
            OverlayKind::Array,
            r"\.\s*(?:map|filter|reduce|forEach|find)\s*\(",
        ),
        (OverlayKind::Hook, r"\buse[A-Z][a-zA-Z]*\s*\("),
    ]
    .into_iter()
    .filter_map(|(kind, pattern)| match Regex::new(pattern) {
        Ok(regex) => Some((kind, regex)),
        Err(e) => {
            warn!(kind = kind.class_suffix(), error = %e, "dropping overlay pattern");
            None
        }
    })
    .collect()
});

/// Locate overlay regions in raw code, sorted by start offset
pub fn pattern_overlay(code: &str) -> Vec<OverlayRange> {
    let mut claimed: Vec<OverlayRange> = Vec::new();

    for (kind, regex) in OVERLAY_PATTERNS.iter() {
        for m in regex.find_iter(code) {
            let range = m.range();
            let overlaps = claimed
                .iter()
                .any(|c| c.range.start < range.end && range.start < c.range.end);
            if !overlaps {
                claimed.push(OverlayRange { range, kind: *kind });
            }
        }
    }

    claimed.sort_by_key(|c| c.range.start);
    claimed
}
