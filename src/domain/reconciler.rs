//! Fill missing Sector/Category on target rows from the knowledge base

use super::knowledge_base::KnowledgeBase;
use super::table::{Table, CATEGORY, ORGANISATION, SECTOR};

/// Enrich every row in place and return the number of rows that gained a value.
///
/// Only blank fields are filled. A populated field is kept even when it
/// disagrees with the master.
pub fn reconcile_table(table: &mut Table, kb: &KnowledgeBase) -> usize {
    let organisation_idx = table.column(ORGANISATION);
    let sector_idx = table.ensure_column(SECTOR);
    let category_idx = table.ensure_column(CATEGORY);

    let Some(organisation_idx) = organisation_idx else {
        return 0;
    };

    let mut updated = 0usize;
    for row in table.rows_mut() {
        let organisation = row[organisation_idx].trim();
        if organisation.is_empty() {
            continue;
        }
        let Some(master) = kb.lookup(organisation) else {
            continue;
        };

        let sector_filled = fill_if_empty(&mut row[sector_idx], &master.sector);
        let category_filled = fill_if_empty(&mut row[category_idx], &master.category);

        if sector_filled || category_filled {
            updated += 1;
        }
    }

    updated
}

fn fill_if_empty(cell: &mut String, master_value: &str) -> bool {
    if !cell.trim().is_empty() || master_value.trim().is_empty() {
        return false;
    }
    *cell = master_value.to_string();
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::knowledge_base::OrganisationRecord;

    fn kb(entries: &[(&str, &str, &str)]) -> KnowledgeBase {
        let mut kb = KnowledgeBase::new();
        for &(name, sector, category) in entries {
            kb.insert(OrganisationRecord {
                name: name.to_string(),
                sector: sector.to_string(),
                category: category.to_string(),
            });
        }
        kb
    }

    fn target(headers: &[&str], rows: &[&[&str]]) -> Table {
        Table::new(
            headers.iter().map(|h| h.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_fills_only_empty_fields() {
        let kb = kb(&[("Acme", "X", "Corporate")]);
        let mut t = target(
            &["First", "Organisation", "Sector", "Category"],
            &[&["Ann", "Acme", "Y", ""]],
        );

        let updated = reconcile_table(&mut t, &kb);

        assert_eq!(updated, 1);
        assert_eq!(t.rows()[0], ["Ann", "Acme", "Y", "Corporate"]);
    }

    #[test]
    fn test_case_insensitive_exact_match() {
        let kb = kb(&[("Acme Corp", "Debt", "")]);
        let mut t = target(
            &["Organisation"],
            &[&["ACME corp"], &["Acme Corp."], &[""], &["Unknown Ltd"]],
        );

        let updated = reconcile_table(&mut t, &kb);

        assert_eq!(updated, 1);
        assert_eq!(t.headers(), ["Organisation", "Sector", "Category"]);
        assert_eq!(t.rows()[0], ["ACME corp", "Debt", ""]);
        assert_eq!(t.rows()[1], ["Acme Corp.", "", ""]);
        assert_eq!(t.rows()[2], ["", "", ""]);
        assert_eq!(t.rows()[3], ["Unknown Ltd", "", ""]);
    }

    #[test]
    fn test_blank_master_values_are_not_copied() {
        let kb = kb(&[("Acme", "  ", "")]);
        let mut t = target(&["Organisation", "Sector"], &[&["Acme", ""]]);

        assert_eq!(reconcile_table(&mut t, &kb), 0);
        assert_eq!(t.rows()[0], ["Acme", "", ""]);
    }

    #[test]
    fn test_whitespace_cell_counts_as_empty() {
        let kb = kb(&[("Acme", "Sustainability", "Debt")]);
        let mut t = target(
            &["Organisation", "Sector", "Category"],
            &[&[" acme ", " ", "Equity"]],
        );

        assert_eq!(reconcile_table(&mut t, &kb), 1);
        assert_eq!(t.rows()[0], [" acme ", "Sustainability", "Equity"]);
    }

    #[test]
    fn test_missing_organisation_column_passes_through() {
        let kb = kb(&[("Acme", "Debt", "Debt")]);
        let mut t = target(&["Name"], &[&["Acme"]]);

        assert_eq!(reconcile_table(&mut t, &kb), 0);
        assert_eq!(t.rows()[0], ["Acme", "", ""]);
    }
}
