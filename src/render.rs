//! View-time rendering pipeline
//!
//! Composes highlighting, the optional pattern overlay, HTML rendering and
//! line decoration into one call.

use std::collections::BTreeSet;

use tracing::debug;

use crate::config::Config;
use crate::markup::{decorate_markup, preview, to_html, DecorateOptions};
use crate::patterns::pattern_overlay;
use crate::syntax::annotate;

/// How a snippet is rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub line_numbers: bool,
    pub emphasized_lines: BTreeSet<usize>,
    /// Wrap recognised idioms in overlay spans
    pub detect_patterns: bool,
    /// Card view: keep only the first `preview_lines` lines, undecorated
    pub preview: bool,
    pub preview_lines: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            line_numbers: true,
            emphasized_lines: BTreeSet::new(),
            detect_patterns: false,
            preview: false,
            preview_lines: 3,
        }
    }
}

impl From<&Config> for RenderOptions {
    fn from(config: &Config) -> Self {
        Self {
            line_numbers: config.line_numbers,
            detect_patterns: config.detect_patterns,
            preview_lines: config.preview_lines,
            ..Self::default()
        }
    }
}

/// Render a snippet to decorated HTML markup
pub fn render_snippet(code: &str, language: &str, options: &RenderOptions) -> String {
    let code = if options.preview {
        preview(code, options.preview_lines)
    } else {
        code
    };

    let text = annotate(code, language);
    let overlays = if options.detect_patterns {
        pattern_overlay(code)
    } else {
        Vec::new()
    };
    debug!(
        language,
        segments = text.segments().len(),
        overlays = overlays.len(),
        "rendering snippet"
    );

    let markup = to_html(&text, &overlays);
    if options.preview {
        return markup;
    }

    decorate_markup(
        &markup,
        &DecorateOptions {
            line_numbers: options.line_numbers,
            emphasized_lines: options.emphasized_lines.clone(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_numbers_lines() {
        let html = render_snippet("a\nb", "generic", &RenderOptions::default());
        assert_eq!(html.matches("code-line-number").count(), 2);
    }

    #[test]
    fn test_plain_options() {
        let options = RenderOptions {
            line_numbers: false,
            ..RenderOptions::default()
        };
        assert_eq!(render_snippet("a < b", "text", &options), "a &lt; b");
    }

    #[test]
    fn test_emphasis() {
        let options = RenderOptions {
            line_numbers: false,
            emphasized_lines: BTreeSet::from([2]),
            ..RenderOptions::default()
        };
        assert_eq!(
            render_snippet("a\nb", "text", &options),
            "a\n<div class=\"line-emphasis\">b</div>"
        );
    }

    #[test]
    fn test_preview_truncates_and_skips_decoration() {
        let options = RenderOptions {
            preview: true,
            emphasized_lines: BTreeSet::from([1]),
            ..RenderOptions::default()
        };
        let html = render_snippet("a\nb\nc\nd\ne", "text", &options);
        assert_eq!(html, "a\nb\nc");
    }

    #[test]
    fn test_detect_patterns_overlay() {
        let options = RenderOptions {
            detect_patterns: true,
            ..RenderOptions::default()
        };
        let html = render_snippet("fetch(url)", "javascript", &options);
        assert!(html.contains("pattern-highlight-api"));

        let html = render_snippet("fetch(url)", "javascript", &RenderOptions::default());
        assert!(!html.contains("pattern-highlight"));
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            line_numbers: false,
            detect_patterns: true,
            preview_lines: 5,
            ansi: true,
        };
        let options = RenderOptions::from(&config);
        assert!(!options.line_numbers);
        assert!(options.detect_patterns);
        assert_eq!(options.preview_lines, 5);
        assert!(!options.preview);
    }
}
