use acl_core::{format_summary, format_text, heading, prefix_len_to_mask, Action, EntryMap};
use colored::Colorize;

use crate::plan::SyncPlan;

/// Render one ACL's entries for terminal output.
pub fn render_acl(name: &str, entries: &EntryMap) -> String {
    let mut out = vec![heading(name).bold().to_string()];
    if entries.is_empty() {
        out.push("  (no entries)".to_string());
    }
    for (seqno, entry) in entries {
        let action = match entry.action {
            Action::Permit => entry.action.as_str().green().to_string(),
            Action::Deny => entry.action.as_str().red().to_string(),
            _ => entry.action.as_str().yellow().to_string(),
        };
        let mask = prefix_len_to_mask(entry.srcprefixlen)
            .map(|m| m.to_string())
            .unwrap_or_else(|_| "?".to_string());
        let mut line = format!(
            "  {seqno:>5} {action} {}/{} mask={mask}",
            entry.srcaddr, entry.srcprefixlen
        );
        if entry.log {
            line.push_str(&format!(" {}", "log".cyan()));
        }
        out.push(line);
    }
    out.join("\n")
}

/// Render several ACLs separated by blank lines.
pub fn render_acl_list(acls: &[(String, EntryMap)]) -> String {
    if acls.is_empty() {
        return "no standard access lists".to_string();
    }
    acls.iter()
        .map(|(name, entries)| render_acl(name, entries))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Render a sync plan: colored change lines, counts, then the commands.
pub fn render_plan(plan: &SyncPlan) -> String {
    let mut out = Vec::new();
    if plan.create {
        out.push(format!("+ {}", heading(&plan.name)).green().to_string());
    }
    for line in format_text(&plan.changes).lines() {
        let colored = if line.starts_with('+') {
            line.green().to_string()
        } else if line.starts_with('-') {
            line.red().to_string()
        } else if line.starts_with('~') {
            line.yellow().to_string()
        } else {
            line.to_string()
        };
        out.push(colored);
    }
    out.push(render_plan_summary(plan));
    if !plan.commands.is_empty() {
        out.push(String::new());
        out.push("commands".to_string());
        out.extend(plan.commands.iter().cloned());
    }
    out.join("\n")
}

/// One-line counts for a sync plan.
pub fn render_plan_summary(plan: &SyncPlan) -> String {
    format!(
        "acl={} create={} {}",
        plan.name,
        plan.create,
        format_summary(&plan.changes)
    )
    .cyan()
    .to_string()
}
