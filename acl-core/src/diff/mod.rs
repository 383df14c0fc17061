//! Seqno-keyed comparison of two entry collections.

pub mod engine;
pub mod result;

pub use engine::{diff, diff_with_options, DiffOptions};
pub use result::EntryChange;
