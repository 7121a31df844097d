//! Genre set reconciliation.
//!
//! Editing an entity's genres touches only what changed: names present on
//! both sides are left alone, the rest become targeted inserts and deletes.
//! Names are compared exactly (case and whitespace significant).

use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenreDelta {
    pub to_keep: BTreeSet<String>,
    pub to_remove: BTreeSet<String>,
    pub to_add: BTreeSet<String>,
}

impl GenreDelta {
    pub fn reconcile(existing: &BTreeSet<String>, desired: &BTreeSet<String>) -> Self {
        Self {
            to_keep: existing.intersection(desired).cloned().collect(),
            to_remove: existing.difference(desired).cloned().collect(),
            to_add: desired.difference(existing).cloned().collect(),
        }
    }

    /// True when applying the delta would not write anything.
    pub fn is_noop(&self) -> bool {
        self.to_remove.is_empty() && self.to_add.is_empty()
    }
}

/// Collapse a submitted list of names into a set.
pub fn distinct<I, S>(names: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(Into::into).collect()
}
