//! Standard IP access-list parsing and rendering.
//!
//! Converts the free-text configuration block of an ACL into seqno-keyed
//! [`Entry`] values and back into the command lines a device expects.

pub mod builder;
pub mod diff;
pub mod entry;
pub mod format;
pub mod grammar;
pub mod parser;
pub mod prefix;
pub mod translator;

pub use builder::render;
pub use diff::{diff, diff_with_options, DiffOptions, EntryChange};
pub use entry::{Action, Entry, EntryMap, ANY_ADDR};
pub use format::{format_block, format_json, format_summary, format_text};
pub use grammar::LineError;
pub use parser::{parse, parse_with_options, MalformedPolicy, ParseError, ParseOptions};
pub use prefix::{mask_to_prefix_len, prefix_len_to_mask, MaskError};
pub use translator::{heading, AclTranslator, EXIT};
