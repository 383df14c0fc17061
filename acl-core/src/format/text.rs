use crate::builder::render;
use crate::diff::result::EntryChange;
use crate::entry::EntryMap;
use crate::translator::heading;

/// Indent the device uses for lines inside an ACL block.
const BLOCK_INDENT: &str = "   ";

/// Format an ACL as the configuration block the device would print.
pub fn format_block(name: &str, entries: &EntryMap) -> String {
    let mut lines = Vec::with_capacity(entries.len() + 1);
    lines.push(heading(name));
    for entry in entries.values() {
        lines.push(format!("{BLOCK_INDENT}{}", render(entry)));
    }
    lines.join("\n")
}

/// Format comparison results as plain text.
pub fn format_text(changes: &[EntryChange]) -> String {
    let mut lines = Vec::with_capacity(changes.len());
    for change in changes {
        match change {
            EntryChange::Unchanged { seqno } => lines.push(format!("= {seqno}")),
            EntryChange::Changed {
                seqno,
                current,
                desired,
            } => {
                lines.push(format!("~ {seqno}"));
                lines.push(format!("  current: {}", render(current)));
                lines.push(format!("  desired: {}", render(desired)));
            }
            EntryChange::Removed { entry, .. } => lines.push(format!("- {}", render(entry))),
            EntryChange::Added { entry, .. } => lines.push(format!("+ {}", render(entry))),
        }
    }
    lines.join("\n")
}

/// Format a simple summary of change counts.
pub fn format_summary(changes: &[EntryChange]) -> String {
    let mut unchanged = 0;
    let mut changed = 0;
    let mut removed = 0;
    let mut added = 0;

    for change in changes {
        match change {
            EntryChange::Unchanged { .. } => unchanged += 1,
            EntryChange::Changed { .. } => changed += 1,
            EntryChange::Removed { .. } => removed += 1,
            EntryChange::Added { .. } => added += 1,
        }
    }

    format!("unchanged={unchanged} changed={changed} removed={removed} added={added}")
}
