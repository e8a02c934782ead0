//! Code pattern recognition
//!
//! `catalog` holds the fixed rule table, `detector` answers "which idioms
//! does this snippet use", and `overlay` answers "where are they".

mod catalog;
mod detector;
mod overlay;

pub use catalog::{rule_by_id, PatternRule, PATTERN_RULES};
pub use detector::{detect, detect_with, DetectedPattern};
pub use overlay::{pattern_overlay, OverlayKind, OverlayRange};
