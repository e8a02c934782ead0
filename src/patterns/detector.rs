//! Pattern detector
//!
//! Purely lexical: the code is lower-cased once and every rule is tested
//! for substring hits. The declared language is never consulted.

use super::catalog::{PatternRule, PATTERN_RULES};

/// A rule that matched a snippet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectedPattern {
    pub rule_id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub tag: &'static str,
}

impl From<&'static PatternRule> for DetectedPattern {
    fn from(rule: &'static PatternRule) -> Self {
        Self {
            rule_id: rule.id,
            label: rule.label,
            icon: rule.icon,
            tag: rule.tag,
        }
    }
}

/// Detect catalog patterns in a snippet, in catalog order
pub fn detect(code: &str) -> Vec<DetectedPattern> {
    detect_with(PATTERN_RULES, code)
}

/// Detect patterns from an arbitrary rule table
pub fn detect_with(rules: &'static [PatternRule], code: &str) -> Vec<DetectedPattern> {
    if code.is_empty() {
        return Vec::new();
    }

    let lowered = code.to_lowercase();
    rules
        .iter()
        .filter(|rule| rule.matches(&lowered))
        .map(DetectedPattern::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(code: &str) -> Vec<&'static str> {
        detect(code).iter().map(|p| p.label).collect()
    }

    #[test]
    fn test_loop_and_debugging() {
        let found = labels("for (let i=0;i<10;i++) { console.log(i); }");
        assert!(found.contains(&"Loops"));
        assert!(found.contains(&"Debugging"));
    }

    #[test]
    fn test_api_error_debugging() {
        let found = labels("try { fetch(url) } catch(e) { console.error(e) }");
        assert!(found.contains(&"API calls"));
        assert!(found.contains(&"Error handling"));
        assert!(found.contains(&"Debugging"));
    }

    #[test]
    fn test_case_insensitive() {
        let found = labels("const XHR = new XMLHttpRequest();");
        assert!(found.contains(&"API calls"));
    }

    #[test]
    fn test_python_patterns() {
        let found = labels("try:\n    for x in xs:\n        print(x)\nexcept ValueError:\n    pass");
        assert_eq!(found, vec!["Loops", "Error handling", "Debugging"]);
    }

    #[test]
    fn test_catalog_order() {
        let found = detect("const s = new Set(); document.body; await x; if (a) {}");
        let ids: Vec<_> = found.iter().map(|p| p.rule_id).collect();
        assert_eq!(
            ids,
            vec!["conditional-logic", "async-operations", "dom-manipulation", "data-structures"]
        );
    }

    #[test]
    fn test_empty_and_plain() {
        assert!(detect("").is_empty());
        assert!(detect("x = 1").is_empty());
    }

    #[test]
    fn test_custom_table() {
        const RULES: &[PatternRule] = &[PatternRule {
            id: "todo",
            triggers: &["todo"],
            label: "Todo",
            icon: "check",
            tag: "todo",
        }];

        let found = detect_with(RULES, "// TODO: later");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].tag, "todo");
        assert!(detect_with(RULES, "done").is_empty());
    }

    #[test]
    fn test_deterministic() {
        let code = "async function f() { const r = await fetch(u); return r.json(); }";
        assert_eq!(detect(code), detect(code));
    }
}
