//! Priority-ordered tag rules for Sector and Category

use serde::Deserialize;
use std::collections::HashSet;

/// Built-in Sector rules as `(token, canonical value, priority)`
pub const SECTOR_RULES: &[(&str, &str, u32)] = &[
    ("Software, Media & Technology", "Software & Technology", 1),
    ("Manufacturing & Industrial", "Manufacturing & Industrial", 2),
    ("construction", "Manufacturing & Industrial", 2),
    ("Manufacturing & Distribution", "Manufacturing & Industrial", 2),
    ("Healthcare & Education", "Healthcare & Education", 3),
    ("Health & Education", "Healthcare & Education", 3),
    ("Software & Technology", "Software & Technology", 4),
    ("Food & Leisure", "Food & Leisure", 5),
    ("Sustainability", "Sustainability", 6),
    ("Business Services", "Business Services", 7),
];

/// Built-in Category rules as `(token, canonical value, priority)`
pub const CATEGORY_RULES: &[(&str, &str, u32)] = &[
    ("Corporate", "Corporate", 1),
    ("Private Equity", "Private Equity", 2),
    ("Legal Services", "Legal Services", 3),
    ("Law Firm", "Legal Services", 3),
    ("Consultancy", "Consultancy", 4),
    ("Debt", "Debt", 5),
    ("Equity", "Equity", 6),
    ("Accountants", "Accountants", 7),
    ("Financial Services", "Financial Services", 8),
    ("Wealth Manager", "Wealth Manager", 9),
    ("Orion Network", "Wealth Manager", 9),
    ("Competitor", "Competitor", 10),
    ("Venture and Capital Growth", "Venture and Capital Growth", 11),
    ("Other", "Other", 99),
];

/// A single tag rule: when `token` occurs in the tags, the field becomes `value`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Rule {
    pub token: String,
    pub value: String,
    pub priority: u32,
}

impl Rule {
    pub fn new(token: impl Into<String>, value: impl Into<String>, priority: u32) -> Self {
        Rule {
            token: token.into(),
            value: value.into(),
            priority,
        }
    }
}

/// Rules for one field, sorted by ascending priority
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
    lowered_tokens: Vec<String>,
    valid_values: HashSet<String>,
}

impl RuleSet {
    /// Build a rule set. Rules with equal priority keep their given order.
    pub fn new(mut rules: Vec<Rule>) -> Self {
        rules.sort_by_key(|rule| rule.priority);

        let lowered_tokens = rules.iter().map(|r| r.token.to_lowercase()).collect();
        let valid_values = rules.iter().map(|r| r.value.clone()).collect();

        RuleSet {
            rules,
            lowered_tokens,
            valid_values,
        }
    }

    fn from_table(table: &[(&str, &str, u32)]) -> Self {
        Self::new(
            table
                .iter()
                .map(|&(token, value, priority)| Rule::new(token, value, priority))
                .collect(),
        )
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Whether `value` is one of this set's canonical values
    pub fn is_canonical(&self, value: &str) -> bool {
        self.valid_values.contains(value)
    }

    /// Canonical value of the first rule whose token occurs in `lowered_tags`.
    ///
    /// `lowered_tags` must already be lowercase. Matching is a plain substring
    /// test, so a token also matches inside longer words.
    pub fn first_match(&self, lowered_tags: &str) -> Option<&str> {
        self.lowered_tokens
            .iter()
            .position(|token| lowered_tags.contains(token.as_str()))
            .map(|idx| self.rules[idx].value.as_str())
    }
}

/// The Sector and Category rule sets used by the classifier
#[derive(Debug, Clone)]
pub struct RuleBook {
    pub sector: RuleSet,
    pub category: RuleSet,
}

impl RuleBook {
    pub fn new(sector: RuleSet, category: RuleSet) -> Self {
        RuleBook { sector, category }
    }

    /// The rule tables compiled into the binary
    pub fn builtin() -> Self {
        RuleBook {
            sector: RuleSet::from_table(SECTOR_RULES),
            category: RuleSet::from_table(CATEGORY_RULES),
        }
    }
}

impl Default for RuleBook {
    fn default() -> Self {
        Self::builtin()
    }
}
