//! Rule table configuration

use crate::domain::{Rule, RuleBook, RuleSet};
use crate::error::{Result, TidyError};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// On-disk layout of a rules file
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RulesFile {
    pub sector: Vec<Rule>,
    pub category: Vec<Rule>,
}

impl RulesFile {
    /// Parse rules from TOML text
    pub fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| TidyError::Rules(format!("Failed to parse rules file: {}", e)))
    }

    /// Validate and turn into the rule book used by the classifier
    pub fn into_rule_book(self) -> Result<RuleBook> {
        let sector = build_set("sector", self.sector)?;
        let category = build_set("category", self.category)?;
        Ok(RuleBook::new(sector, category))
    }
}

fn build_set(field: &str, rules: Vec<Rule>) -> Result<RuleSet> {
    if rules.is_empty() {
        return Err(TidyError::Rules(format!("No {} rules defined", field)));
    }

    if let Some(rule) = rules.iter().find(|r| r.token.trim().is_empty()) {
        return Err(TidyError::Rules(format!(
            "Empty token in {} rule for value '{}'",
            field, rule.value
        )));
    }

    if let Some(rule) = rules.iter().find(|r| r.value.trim().is_empty()) {
        return Err(TidyError::Rules(format!(
            "Empty value in {} rule for token '{}'",
            field, rule.token
        )));
    }

    Ok(RuleSet::new(rules))
}

/// Load the rule book: from `path` when given, otherwise the built-in tables
pub fn load_rule_book(path: Option<&Path>) -> Result<RuleBook> {
    let Some(path) = path else {
        return Ok(RuleBook::builtin());
    };

    let contents = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            TidyError::FileNotFound(path.to_path_buf())
        } else {
            TidyError::Rules(format!("Failed to read {}: {}", path.display(), e))
        }
    })?;

    let book = RulesFile::parse(&contents)?.into_rule_book()?;
    tracing::info!(
        path = %path.display(),
        sector_rules = book.sector.rules().len(),
        category_rules = book.category.rules().len(),
        "loaded rules file"
    );
    Ok(book)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const RULES: &str = r#"
[[sector]]
token = "retail"
value = "Food & Leisure"
priority = 5

[[sector]]
token = "factory"
value = "Manufacturing & Industrial"
priority = 1

[[category]]
token = "bank"
value = "Financial Services"
priority = 1
"#;

    #[test]
    fn test_parse_and_sort_rules() {
        let book = RulesFile::parse(RULES).unwrap().into_rule_book().unwrap();

        let tokens: Vec<&str> = book.sector.rules().iter().map(|r| r.token.as_str()).collect();
        assert_eq!(tokens, vec!["factory", "retail"]);
        assert!(book.category.is_canonical("Financial Services"));
        assert!(!book.category.is_canonical("Corporate"));
    }

    #[test]
    fn test_missing_table_is_rejected() {
        let err = RulesFile::parse("[[sector]]\ntoken = \"a\"\nvalue = \"A\"\npriority = 1\n")
            .unwrap_err();
        assert!(matches!(err, TidyError::Rules(_)));
    }

    #[test]
    fn test_empty_token_is_rejected() {
        let file = RulesFile {
            sector: vec![Rule::new("  ", "A", 1)],
            category: vec![Rule::new("b", "B", 1)],
        };
        let err = file.into_rule_book().unwrap_err();
        assert!(err.to_string().contains("Empty token in sector rule"));
    }

    #[test]
    fn test_empty_rule_list_is_rejected() {
        let file = RulesFile {
            sector: vec![Rule::new("a", "A", 1)],
            category: vec![],
        };
        let err = file.into_rule_book().unwrap_err();
        assert!(err.to_string().contains("No category rules"));
    }

    #[test]
    fn test_load_defaults_without_path() {
        let book = load_rule_book(None).unwrap();
        assert_eq!(book.sector.rules().len(), 10);
        assert_eq!(book.category.rules().len(), 14);
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("rules.toml");
        fs::write(&path, RULES).unwrap();

        let book = load_rule_book(Some(path.as_path())).unwrap();
        assert_eq!(book.sector.rules().len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = load_rule_book(Some(temp.path().join("nope.toml").as_path())).unwrap_err();
        assert!(matches!(err, TidyError::FileNotFound(_)));
    }
}
