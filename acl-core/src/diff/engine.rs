use std::collections::BTreeSet;

use crate::diff::result::EntryChange;
use crate::entry::{Entry, EntryMap};

/// Configures entry comparison.
#[derive(Debug, Clone, Default)]
pub struct DiffOptions {
    /// Include [`EntryChange::Unchanged`] rows.
    pub include_unchanged: bool,
    /// Treat the `log` flag as insignificant.
    pub ignore_log: bool,
}

/// Compare two collections with default options.
pub fn diff(current: &EntryMap, desired: &EntryMap) -> Vec<EntryChange> {
    diff_with_options(current, desired, &DiffOptions::default())
}

/// Compare two collections, returning one change per seqno in ascending order.
pub fn diff_with_options(
    current: &EntryMap,
    desired: &EntryMap,
    opts: &DiffOptions,
) -> Vec<EntryChange> {
    let seqnos: BTreeSet<u32> = current.keys().chain(desired.keys()).copied().collect();
    let mut out = Vec::with_capacity(seqnos.len());

    for seqno in seqnos {
        match (current.get(&seqno), desired.get(&seqno)) {
            (Some(cur), Some(want)) if same_rule(cur, want, opts) => {
                if opts.include_unchanged {
                    out.push(EntryChange::Unchanged { seqno });
                }
            }
            (Some(cur), Some(want)) => out.push(EntryChange::Changed {
                seqno,
                current: cur.clone(),
                desired: want.clone(),
            }),
            (Some(cur), None) => out.push(EntryChange::Removed {
                seqno,
                entry: cur.clone(),
            }),
            (None, Some(want)) => out.push(EntryChange::Added {
                seqno,
                entry: want.clone(),
            }),
            (None, None) => {}
        }
    }

    out
}

/// Rule equality ignoring the seqno field, which the map key already carries.
fn same_rule(a: &Entry, b: &Entry, opts: &DiffOptions) -> bool {
    a.action == b.action
        && a.srcaddr == b.srcaddr
        && a.srcprefixlen == b.srcprefixlen
        && (opts.ignore_log || a.log == b.log)
}
