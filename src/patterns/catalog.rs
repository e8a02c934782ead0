//! Pattern rule catalog
//!
//! Data only. Each rule fires when any of its trigger fragments occurs
//! as a plain substring of the lower-cased snippet. Rules are independent
//! and evaluated in declaration order.

/// One recognisable code idiom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternRule {
    /// Stable identifier
    pub id: &'static str,
    /// Lower-case substrings, any one of which triggers the rule
    pub triggers: &'static [&'static str],
    /// Label shown next to the snippet
    pub label: &'static str,
    /// Icon name for the host UI
    pub icon: &'static str,
    /// Machine-friendly tag derived from this pattern
    pub tag: &'static str,
}

impl PatternRule {
    /// Check the rule against already lower-cased code
    pub fn matches(&self, lowered: &str) -> bool {
        self.triggers.iter().any(|t| lowered.contains(t))
    }
}

/// The fixed rule catalog, in emission order
pub const PATTERN_RULES: &[PatternRule] = &[
    PatternRule {
        id: "api-calls",
        triggers: &[
            "fetch(", "axios", "xmlhttprequest", "http.get", "http.post", "api.", "request(",
            "ajax(",
        ],
        label: "API calls",
        icon: "arrow-right",
        tag: "api",
    },
    PatternRule {
        id: "loops",
        triggers: &[
            "for (", "for(", "while (", "while(", "foreach", "for ", "while ", "do {", "do{",
            "for...of", "for...in",
        ],
        label: "Loops",
        icon: "arrow-up",
        tag: "loop",
    },
    PatternRule {
        id: "error-handling",
        triggers: &[
            "try {", "try{", "catch (", "catch(", "try:", "except:", "throw ", "finally",
            "raise ",
        ],
        label: "Error handling",
        icon: "shield",
        tag: "error-handling",
    },
    PatternRule {
        id: "debugging",
        triggers: &[
            "console.log", "print(", "debug(", "console.error", "console.warn", "console.info",
            "debugger", "logger.", "log(",
        ],
        label: "Debugging",
        icon: "bug",
        tag: "debugging",
    },
    PatternRule {
        id: "array-operations",
        triggers: &[
            ".map(", ".filter(", ".reduce(", ".foreach(", ".find(", ".some(", ".every(",
            ".flatmap(", ".sort(", ".reverse(", ".slice(", ".splice(",
        ],
        label: "Array operations",
        icon: "list",
        tag: "array-methods",
    },
    PatternRule {
        id: "conditional-logic",
        triggers: &[
            "if (", "if(", "else if", "else {", "else{", "switch (", "switch(", "case ", "?:",
            "ternary", "if:", "elif",
        ],
        label: "Conditional logic",
        icon: "arrow-right",
        tag: "conditional",
    },
    PatternRule {
        id: "async-operations",
        triggers: &[
            "async", "await", "promise", ".then(", ".catch(", "settimeout", "setinterval",
        ],
        label: "Async operations",
        icon: "arrow-right",
        tag: "async",
    },
    PatternRule {
        id: "dom-manipulation",
        triggers: &[
            "document.", "queryselector", "getelement", "addeventlistener", "innerhtml",
            "appendchild", "createelement", "classlist",
        ],
        label: "DOM manipulation",
        icon: "list",
        tag: "dom",
    },
    PatternRule {
        id: "regular-expressions",
        triggers: &[
            "regex", "regexp", "/[a-z]/", "match(", "replace(", "test(", "exec(", "search(",
        ],
        label: "Regular expressions",
        icon: "list",
        tag: "regex",
    },
    PatternRule {
        id: "data-structures",
        triggers: &[
            "map(", "set(", "weakmap", "weakset", "object.entries", "object.keys",
            "object.values", "new map", "new set",
        ],
        label: "Data structures",
        icon: "list",
        tag: "data-structures",
    },
];

/// Look up a rule by id
pub fn rule_by_id(id: &str) -> Option<&'static PatternRule> {
    PATTERN_RULES.iter().find(|r| r.id == id)
}
