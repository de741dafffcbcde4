//! Sector/Category classification from the Tags column

use super::rules::{RuleBook, RuleSet};
use super::table::{Table, CATEGORY, SECTOR, TAGS};

/// Fills Sector and Category from each row's tags
pub struct TagClassifier<'a> {
    rules: &'a RuleBook,
}

impl<'a> TagClassifier<'a> {
    pub fn new(rules: &'a RuleBook) -> Self {
        TagClassifier { rules }
    }

    /// Classify every row in place and return the number of rows changed.
    ///
    /// Sector and Category columns are appended when missing. A table without
    /// a Tags column is left otherwise untouched.
    pub fn classify_table(&self, table: &mut Table) -> usize {
        let tags_idx = table.column(TAGS);
        let sector_idx = table.ensure_column(SECTOR);
        let category_idx = table.ensure_column(CATEGORY);

        let Some(tags_idx) = tags_idx else {
            return 0;
        };

        let mut updated = 0usize;
        for row in table.rows_mut() {
            if row[tags_idx].is_empty() {
                continue;
            }
            let lowered_tags = row[tags_idx].to_lowercase();

            let sector_changed =
                apply_rules(&mut row[sector_idx], &self.rules.sector, &lowered_tags);
            let category_changed =
                apply_rules(&mut row[category_idx], &self.rules.category, &lowered_tags);

            if sector_changed || category_changed {
                updated += 1;
            }
        }

        updated
    }
}

/// Update one cell from the rule set. Returns true when the value changed.
fn apply_rules(cell: &mut String, rules: &RuleSet, lowered_tags: &str) -> bool {
    let current = cell.trim();
    if rules.is_canonical(current) {
        return false;
    }

    match rules.first_match(lowered_tags) {
        Some(value) if value != current => {
            *cell = value.to_string();
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> Table {
        Table::new(
            headers.iter().map(|h| h.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    fn cell<'t>(table: &'t Table, row: usize, column: &str) -> &'t str {
        &table.rows()[row][table.column(column).unwrap()]
    }

    #[test]
    fn test_fills_empty_fields_from_tags() {
        let rules = RuleBook::builtin();
        let mut t = table(
            &["Name", "Tags", "Sector", "Category"],
            &[&["Acme", "construction, Law Firm", "", ""]],
        );

        let updated = TagClassifier::new(&rules).classify_table(&mut t);

        assert_eq!(updated, 1);
        assert_eq!(cell(&t, 0, SECTOR), "Manufacturing & Industrial");
        assert_eq!(cell(&t, 0, CATEGORY), "Legal Services");
    }

    #[test]
    fn test_priority_beats_listing_position_in_tags() {
        let rules = RuleBook::builtin();
        let mut t = table(&["Tags"], &[&["Software & Technology; construction"]]);

        TagClassifier::new(&rules).classify_table(&mut t);

        assert_eq!(cell(&t, 0, SECTOR), "Manufacturing & Industrial");
    }

    #[test]
    fn test_canonical_values_are_never_replaced() {
        let rules = RuleBook::builtin();
        let mut t = table(
            &["Tags", "Sector", "Category"],
            &[&["construction", " Food & Leisure ", "Debt"]],
        );

        let updated = TagClassifier::new(&rules).classify_table(&mut t);

        assert_eq!(updated, 0);
        assert_eq!(cell(&t, 0, SECTOR), " Food & Leisure ");
        assert_eq!(cell(&t, 0, CATEGORY), "Debt");
    }

    #[test]
    fn test_non_canonical_values_are_replaced() {
        let rules = RuleBook::builtin();
        let mut t = table(&["Tags", "Sector"], &[&["construction", "Legacy"]]);

        let updated = TagClassifier::new(&rules).classify_table(&mut t);

        assert_eq!(updated, 1);
        assert_eq!(cell(&t, 0, SECTOR), "Manufacturing & Industrial");
    }

    #[test]
    fn test_unmatched_field_keeps_its_value() {
        let rules = RuleBook::builtin();
        let mut t = table(&["Tags", "Sector", "Category"], &[&["Debt", "Legacy", ""]]);

        let updated = TagClassifier::new(&rules).classify_table(&mut t);

        assert_eq!(updated, 1);
        assert_eq!(cell(&t, 0, SECTOR), "Legacy");
        assert_eq!(cell(&t, 0, CATEGORY), "Debt");
    }

    #[test]
    fn test_empty_tags_pass_through() {
        let rules = RuleBook::builtin();
        let mut t = table(&["Tags", "Sector"], &[&["", ""], &["Corporate", ""]]);

        let updated = TagClassifier::new(&rules).classify_table(&mut t);

        assert_eq!(updated, 1);
        assert_eq!(cell(&t, 0, SECTOR), "");
        assert_eq!(cell(&t, 0, CATEGORY), "");
        assert_eq!(cell(&t, 1, CATEGORY), "Corporate");
    }

    #[test]
    fn test_missing_tags_column_only_adds_columns() {
        let rules = RuleBook::builtin();
        let mut t = table(&["Name"], &[&["Acme"]]);

        let updated = TagClassifier::new(&rules).classify_table(&mut t);

        assert_eq!(updated, 0);
        assert_eq!(t.headers(), ["Name", "Sector", "Category"]);
        assert_eq!(t.rows()[0], ["Acme", "", ""]);
    }

    #[test]
    fn test_second_pass_changes_nothing() {
        let rules = RuleBook::builtin();
        let mut t = table(
            &["Tags"],
            &[
                &["Orion Network member"],
                &["health & education, equity"],
                &["Business Services"],
            ],
        );

        let classifier = TagClassifier::new(&rules);
        assert_eq!(classifier.classify_table(&mut t), 3);
        let first_pass = t.clone();

        assert_eq!(classifier.classify_table(&mut t), 0);
        assert_eq!(t, first_pass);
        assert_eq!(cell(&t, 0, CATEGORY), "Wealth Manager");
        assert_eq!(cell(&t, 1, SECTOR), "Healthcare & Education");
        assert_eq!(cell(&t, 1, CATEGORY), "Equity");
    }

    #[test]
    fn test_whitespace_only_value_is_replaced() {
        let rules = RuleBook::builtin();
        let mut t = table(&["Tags", "Sector"], &[&["construction", "   "]]);

        assert_eq!(TagClassifier::new(&rules).classify_table(&mut t), 1);
        assert_eq!(cell(&t, 0, SECTOR), "Manufacturing & Industrial");
    }
}
