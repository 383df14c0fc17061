use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Source address used when a rule says `any` or names no address.
pub const ANY_ADDR: &str = "0.0.0.0";

/// Entries of one ACL keyed by sequence number.
pub type EntryMap = BTreeMap<u32, Entry>;

/// Verb of an ACL rule line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Action {
    Permit,
    Deny,
    Remark,
    /// Any other verb the device printed, kept verbatim.
    Other(String),
}

impl Action {
    pub fn as_str(&self) -> &str {
        match self {
            Action::Permit => "permit",
            Action::Deny => "deny",
            Action::Remark => "remark",
            Action::Other(verb) => verb,
        }
    }
}

impl From<&str> for Action {
    fn from(verb: &str) -> Self {
        match verb {
            "permit" => Action::Permit,
            "deny" => Action::Deny,
            "remark" => Action::Remark,
            other => Action::Other(other.to_string()),
        }
    }
}

impl From<String> for Action {
    fn from(verb: String) -> Self {
        Action::from(verb.as_str())
    }
}

impl From<Action> for String {
    fn from(action: Action) -> Self {
        action.as_str().to_string()
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rule line of a standard ACL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Sequence number; `None` lets the device assign one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seqno: Option<u32>,
    pub action: Action,
    pub srcaddr: String,
    pub srcprefixlen: u8,
    #[serde(default)]
    pub log: bool,
}

impl Entry {
    /// Create an entry matching a single host address.
    pub fn new(action: Action, srcaddr: impl Into<String>) -> Self {
        Self {
            seqno: None,
            action,
            srcaddr: srcaddr.into(),
            srcprefixlen: 32,
            log: false,
        }
    }

    pub fn with_seqno(mut self, seqno: u32) -> Self {
        self.seqno = Some(seqno);
        self
    }

    pub fn with_prefix_len(mut self, prefix_len: u8) -> Self {
        self.srcprefixlen = prefix_len;
        self
    }

    pub fn with_log(mut self, log: bool) -> Self {
        self.log = log;
        self
    }
}
