//! Lookups over a device's running configuration text.
//!
//! The running configuration is a flat list of top-level commands, each
//! followed by its indented sub-commands. These helpers only slice that text;
//! parsing ACL entries is left to `acl_core`.

use acl_core::translator::heading;

/// Prefix of every standard ACL heading line.
const STANDARD_ACL_PREFIX: &str = "ip access-list standard ";

/// Return the block that starts with `heading_line`.
///
/// The block is the heading itself plus every following line indented deeper
/// than it. Blank lines inside the block are kept. Returns `None` when no
/// line matches the heading exactly (ignoring surrounding whitespace).
pub fn get_block(config: &str, heading_line: &str) -> Option<String> {
    let wanted = heading_line.trim();
    let mut lines = config.lines();

    let start = lines.by_ref().find(|line| line.trim() == wanted)?;
    let base_indent = indent_of(start);

    let mut block = vec![start.trim_end()];
    for line in lines {
        if line.trim().is_empty() {
            block.push("");
            continue;
        }
        if indent_of(line) <= base_indent {
            break;
        }
        block.push(line.trim_end());
    }

    while block.last() == Some(&"") {
        block.pop();
    }
    Some(block.join("\n"))
}

/// Return the block of the standard ACL called `name`.
pub fn get_acl_block(config: &str, name: &str) -> Option<String> {
    get_block(config, &heading(name))
}

/// Names of all standard ACLs in the order they first appear.
pub fn acl_names(config: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for line in config.lines() {
        let Some(rest) = line.trim_start().strip_prefix(STANDARD_ACL_PREFIX) else {
            continue;
        };
        let Some(name) = rest.split_whitespace().next() else {
            continue;
        };
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

fn indent_of(line: &str) -> usize {
    line.len() - line.trim_start().len()
}
