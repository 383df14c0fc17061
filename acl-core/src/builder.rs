use crate::entry::Entry;

/// Render one entry as the command line the device expects.
///
/// The entry is trusted as-is; nothing here checks the address or prefix.
pub fn render(entry: &Entry) -> String {
    let mut line = String::new();
    if let Some(seqno) = entry.seqno {
        line.push_str(&format!("{seqno} "));
    }
    line.push_str(&format!(
        "{} {}/{}",
        entry.action, entry.srcaddr, entry.srcprefixlen
    ));
    if entry.log {
        line.push_str(" log");
    }
    line
}
