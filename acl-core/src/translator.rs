//! Translation between ACL configuration blocks and device commands.
//!
//! [`AclTranslator`] ties the parser and the builder together. Reads go
//! through [`AclTranslator::get`]; every mutation is expressed as an ordered
//! list of command lines for the device to run as one batch. An update is
//! "remove the old seqno, add the new rendering", never an in-place edit.

use crate::builder::render;
use crate::entry::{Entry, EntryMap};
use crate::parser::{parse_with_options, ParseError, ParseOptions};

/// Command that leaves the ACL configuration context.
pub const EXIT: &str = "exit";

/// Heading line of a standard ACL; also the key used to look up its block.
pub fn heading(name: &str) -> String {
    format!("ip access-list standard {name}")
}

/// Parses ACL blocks and builds the commands that change them.
#[derive(Debug, Clone, Default)]
pub struct AclTranslator {
    opts: ParseOptions,
}

impl AclTranslator {
    pub fn new(opts: ParseOptions) -> Self {
        Self { opts }
    }

    /// Parse a block fetched upstream; `None` means the ACL does not exist.
    pub fn get(&self, block: Option<&str>) -> Result<Option<EntryMap>, ParseError> {
        block
            .map(|block| parse_with_options(block, &self.opts))
            .transpose()
    }

    /// Render a single entry line.
    pub fn render(&self, entry: &Entry) -> String {
        render(entry)
    }

    /// Commands that create an empty ACL. Succeeds on the device if it exists.
    pub fn build_create_command(&self, name: &str) -> Vec<String> {
        vec![heading(name)]
    }

    /// Commands that delete an ACL.
    pub fn build_delete_command(&self, name: &str) -> Vec<String> {
        vec![format!("no {}", heading(name))]
    }

    /// Commands that reset an ACL to its default, which removes it.
    pub fn build_default_command(&self, name: &str) -> Vec<String> {
        vec![format!("default {}", heading(name))]
    }

    pub fn build_add_command(&self, name: &str, entry: &Entry) -> Vec<String> {
        vec![heading(name), render(entry), EXIT.to_string()]
    }

    /// Replace the entry at `seqno` with `entry`, rendered under that seqno.
    pub fn build_update_command(&self, name: &str, seqno: u32, entry: &Entry) -> Vec<String> {
        let entry = entry.clone().with_seqno(seqno);
        vec![
            heading(name),
            format!("no {seqno}"),
            render(&entry),
            EXIT.to_string(),
        ]
    }

    pub fn build_remove_command(&self, name: &str, seqno: u32) -> Vec<String> {
        vec![heading(name), format!("no {seqno}"), EXIT.to_string()]
    }
}
