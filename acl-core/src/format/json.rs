use crate::entry::EntryMap;

/// Format an entry collection as JSON keyed by seqno.
pub fn format_json(entries: &EntryMap) -> String {
    serde_json::to_string_pretty(entries).unwrap_or_else(|_| "{}".to_string())
}

