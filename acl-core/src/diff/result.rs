use serde::Serialize;

use crate::entry::Entry;

/// A single comparison outcome for one seqno.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum EntryChange {
    /// Seqno present on both sides with the same entry.
    Unchanged { seqno: u32 },
    /// Seqno present on both sides but the entries differ.
    Changed {
        seqno: u32,
        current: Entry,
        desired: Entry,
    },
    /// Seqno only in the current collection.
    Removed { seqno: u32, entry: Entry },
    /// Seqno only in the desired collection.
    Added { seqno: u32, entry: Entry },
}

impl EntryChange {
    pub fn seqno(&self) -> u32 {
        match self {
            EntryChange::Unchanged { seqno }
            | EntryChange::Changed { seqno, .. }
            | EntryChange::Removed { seqno, .. }
            | EntryChange::Added { seqno, .. } => *seqno,
        }
    }
}
