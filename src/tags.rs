//! Tag synthesis
//!
//! Derived tags come from three independent sources: detected patterns,
//! the declared language, and framework hints sniffed from the code.
//! They are collected into a name-keyed set so each name appears once;
//! the first source to emit a name wins and fixes its position.

use std::collections::HashSet;

use tracing::debug;

use crate::patterns;

/// Where a tag came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    /// Computed from code and language; regenerated on every call
    Derived,
    /// Entered by the user; owned by the host
    Manual,
}

/// A snippet tag
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag {
    /// Trimmed, lower-case name
    pub name: String,
    pub kind: TagKind,
}

impl Tag {
    pub fn derived(name: &str) -> Self {
        Self {
            name: normalize_tag_name(name),
            kind: TagKind::Derived,
        }
    }

    pub fn manual(name: &str) -> Self {
        Self {
            name: normalize_tag_name(name),
            kind: TagKind::Manual,
        }
    }
}

/// Framework tag and the substrings that suggest it
const FRAMEWORK_HINTS: &[(&str, &[&str])] = &[
    ("react", &["react", "jsx", "tsx"]),
    ("vue", &["vue"]),
    ("angular", &["angular"]),
    ("node", &["express", "koa", "next"]),
];

/// Canonical form used for comparison and storage
pub fn normalize_tag_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Ordered, name-unique tag accumulator
#[derive(Default)]
struct TagSet {
    seen: HashSet<String>,
    tags: Vec<Tag>,
}

impl TagSet {
    /// Insert unless a tag with the same name is present; empty names are dropped
    fn insert(&mut self, tag: Tag) -> bool {
        if tag.name.is_empty() || !self.seen.insert(tag.name.clone()) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    fn into_vec(self) -> Vec<Tag> {
        self.tags
    }
}

/// Derive the tag list for a snippet
pub fn synthesize(code: &str, language: &str) -> Vec<Tag> {
    let mut set = TagSet::default();

    for pattern in patterns::detect(code) {
        set.insert(Tag::derived(pattern.tag));
    }

    set.insert(Tag::derived(language));

    let lowered = code.to_lowercase();
    for (name, hints) in FRAMEWORK_HINTS {
        if hints.iter().any(|h| lowered.contains(h)) && !set.insert(Tag::derived(name)) {
            debug!(tag = name, "framework tag already present");
        }
    }

    let tags = set.into_vec();
    debug!(count = tags.len(), language, "synthesized tags");
    tags
}

/// Combine host-owned manual tags with freshly derived ones
///
/// Manual tags come first; a derived tag whose name a manual tag already
/// uses is dropped.
pub fn merge_tags(manual: &[Tag], derived: &[Tag]) -> Vec<Tag> {
    let mut set = TagSet::default();
    for tag in manual.iter().chain(derived) {
        set.insert(tag.clone());
    }
    set.into_vec()
}

/// Tooltip text for well-known derived tags
pub fn tag_description(name: &str) -> Option<&'static str> {
    let name = name.to_lowercase();
    let has = |needles: &[&str]| needles.iter().any(|n| name.contains(n));

    if has(&["debug", "log"]) {
        Some("Contains debugging statements like console.log")
    } else if has(&["api", "fetch", "axios"]) {
        Some("Contains API or data fetching operations")
    } else if has(&["loop", "for", "while"]) {
        Some("Contains loop structures (for, while, forEach)")
    } else if has(&["error", "try", "catch"]) {
        Some("Contains error handling with try/catch")
    } else if has(&["array", "map", "filter"]) {
        Some("Contains array manipulation methods")
    } else {
        None
    }
}
