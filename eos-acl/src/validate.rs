//! Checks on entries this crate renders into device commands.
//!
//! Parsed entries already satisfy the line grammar, but entries built from
//! CLI flags or desired-state JSON do not, and the renderer trusts its input.

use std::net::Ipv4Addr;

use acl_core::{Action, Entry};
use thiserror::Error;

/// Reasons an entry cannot be rendered as a single command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    #[error("prefix length {0} is out of range 0-32")]
    PrefixOutOfRange(u8),
    #[error("source address '{0}' is not a dotted-decimal IPv4 address")]
    BadAddress(String),
    #[error("action '{0}' must be one of permit, deny, remark")]
    BadAction(String),
}

pub fn validate_entry(entry: &Entry) -> Result<(), EntryError> {
    if let Action::Other(verb) = &entry.action {
        return Err(EntryError::BadAction(verb.clone()));
    }
    if entry.srcaddr.parse::<Ipv4Addr>().is_err() {
        return Err(EntryError::BadAddress(entry.srcaddr.clone()));
    }
    if entry.srcprefixlen > 32 {
        return Err(EntryError::PrefixOutOfRange(entry.srcprefixlen));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use acl_core::{Action, Entry};

    use super::{validate_entry, EntryError};

    #[test]
    fn accepts_plain_entries() {
        let entry = Entry::new(Action::Remark, "0.0.0.0").with_prefix_len(0);
        assert_eq!(validate_entry(&entry), Ok(()));
    }

    #[test]
    fn rejects_unknown_or_multi_word_actions() {
        let entry = Entry::new(Action::from("permit 1.1.1.1/32\nexit"), "1.1.1.1");
        assert!(matches!(
            validate_entry(&entry),
            Err(EntryError::BadAction(_))
        ));
        let entry = Entry::new(Action::from("dynamic"), "1.1.1.1");
        assert!(matches!(
            validate_entry(&entry),
            Err(EntryError::BadAction(_))
        ));
    }

    #[test]
    fn rejects_addresses_that_are_not_ipv4() {
        for addr in ["10.0.0.0/8", "host", "1.1.1.1 log", "300.1.1.1"] {
            let entry = Entry::new(Action::Permit, addr);
            assert_eq!(
                validate_entry(&entry),
                Err(EntryError::BadAddress(addr.to_string()))
            );
        }
    }

    #[test]
    fn rejects_prefix_over_32() {
        let entry = Entry::new(Action::Deny, "10.0.0.0").with_prefix_len(33);
        assert_eq!(
            validate_entry(&entry),
            Err(EntryError::PrefixOutOfRange(33))
        );
    }
}
