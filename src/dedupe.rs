// src/dedupe.rs
use std::collections::HashMap;

use crate::table::Row;

/// Raw opening-hours strings mapped to the ordered list of row identities
/// that share them. Keys are exact, case-sensitive strings in first-encounter
/// order; no whitespace or case normalization is applied, so two values
/// differing by a single character form distinct groups. That keeps grouping
/// trivially predictable at the cost of a few redundant rewrite requests.
#[derive(Debug, Default)]
pub struct HoursGroups {
    keys: Vec<String>,
    members: Vec<Vec<String>>,
    index: HashMap<String, usize>,
}

impl HoursGroups {
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Unique raw hours strings in first-encounter order. This order is the
    /// positional contract the rewrite and reconcile stages align on.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Identities of the rows that shared the key at `idx`, in row order.
    pub fn members(&self, idx: usize) -> &[String] {
        &self.members[idx]
    }

    fn insert(&mut self, key: &str, identity: &str) {
        let idx = match self.index.get(key) {
            Some(&idx) => idx,
            None => {
                self.keys.push(key.to_string());
                self.members.push(Vec::new());
                self.index.insert(key.to_string(), self.keys.len() - 1);
                self.keys.len() - 1
            }
        };
        self.members[idx].push(identity.to_string());
    }
}

/// Group rows by their exact `opening_hours` value, recording which row
/// identities share each value. Rows with empty or absent hours are skipped,
/// as are rows with neither `name` nor `name_en`; both kinds still pass
/// through to the output unmodified.
pub fn group_by_hours(rows: &[Row]) -> HoursGroups {
    let mut groups = HoursGroups::default();
    for row in rows {
        let hours = match row.opening_hours() {
            Some(h) if !h.is_empty() => h,
            _ => continue,
        };
        let Some(identity) = row.identity() else {
            continue;
        };
        groups.insert(hours, identity);
    }
    groups
}
