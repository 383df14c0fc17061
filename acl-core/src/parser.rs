use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::entry::{Action, Entry, EntryMap, ANY_ADDR};
use crate::grammar::{is_candidate, match_line, LineError, LineMatch};
use crate::prefix::{mask_to_prefix_len, MaskError};

/// Errors that abort parsing of an ACL block.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A rule line passed the line filter but not the full grammar.
    #[error("malformed entry line '{line}': {reason}")]
    MalformedLine {
        line: String,
        #[source]
        reason: LineError,
    },
    /// A rule line carried a mask that could not be converted.
    #[error("bad mask in entry line '{line}': {source}")]
    Mask {
        line: String,
        #[source]
        source: MaskError,
    },
}

/// What to do with a rule line that fails the full grammar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Abort the whole parse.
    #[default]
    Fail,
    /// Drop the line and log a warning.
    Skip,
}

/// Options controlling [`parse_with_options`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    #[serde(default)]
    pub on_malformed: MalformedPolicy,
}

/// Parse the raw text of one ACL configuration block into entries keyed by seqno.
pub fn parse(block: &str) -> Result<EntryMap, ParseError> {
    parse_with_options(block, &ParseOptions::default())
}

/// Parse an ACL block with explicit options.
///
/// Lines that are not rule lines (the heading, remarks, `!` separators) are
/// ignored. A repeated seqno replaces the earlier entry.
pub fn parse_with_options(block: &str, opts: &ParseOptions) -> Result<EntryMap, ParseError> {
    let mut entries = EntryMap::new();

    for line in block.lines().filter(|line| is_candidate(line)) {
        let line = line.trim();
        let captures = match match_line(line) {
            Ok(captures) => captures,
            Err(reason) => match opts.on_malformed {
                MalformedPolicy::Fail => {
                    return Err(ParseError::MalformedLine {
                        line: line.to_string(),
                        reason,
                    })
                }
                MalformedPolicy::Skip => {
                    warn!(line, %reason, "skipping malformed ACL entry line");
                    continue;
                }
            },
        };

        let seqno = captures.seqno;
        let entry = entry_from_match(captures).map_err(|source| ParseError::Mask {
            line: line.to_string(),
            source,
        })?;
        if entries.insert(seqno, entry).is_some() {
            debug!(seqno, "later entry replaced earlier one with the same seqno");
        }
    }

    debug!(count = entries.len(), "parsed ACL entries");
    Ok(entries)
}

/// Apply defaults to raw line captures.
fn entry_from_match(captures: LineMatch) -> Result<Entry, MaskError> {
    let srcprefixlen = match captures.prefix_len {
        Some(len) => len,
        None => mask_to_prefix_len(captures.mask.as_deref())?,
    };

    Ok(Entry {
        seqno: Some(captures.seqno),
        action: Action::from(captures.action),
        srcaddr: captures.address.unwrap_or_else(|| ANY_ADDR.to_string()),
        srcprefixlen,
        log: captures.log,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{parse, parse_with_options, MalformedPolicy, ParseError, ParseOptions};
    use crate::entry::{Action, Entry};
    use crate::grammar::LineError;
    use crate::prefix::MaskError;

    #[test]
    fn any_defaults_to_zero_address_full_prefix() {
        let entries = parse("10 permit any").expect("parse");
        assert_eq!(
            entries[&10],
            Entry::new(Action::Permit, "0.0.0.0").with_seqno(10)
        );
    }

    #[test]
    fn cidr_suffix_wins_over_mask() {
        let entries = parse("20 permit 10.0.0.0/8 255.255.255.1").expect("parse");
        assert_eq!(entries[&20].srcaddr, "10.0.0.0");
        assert_eq!(entries[&20].srcprefixlen, 8);
    }

    #[test]
    fn mask_is_converted_when_no_suffix() {
        let entries = parse("30 deny 192.168.0.0 255.255.0.0 log").expect("parse");
        assert_eq!(entries[&30].srcprefixlen, 16);
        assert!(entries[&30].log);
    }

    #[test]
    fn repeated_seqno_keeps_last_line() {
        let entries = parse("10 permit 1.1.1.1\n10 deny 2.2.2.0/24\n").expect("parse");
        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries[&10],
            Entry::new(Action::Deny, "2.2.2.0")
                .with_seqno(10)
                .with_prefix_len(24)
        );
    }

    #[test]
    fn malformed_line_fails_by_default() {
        let err = parse("10 permit any\n20 permit 1.1.1.1 bogus\n").expect_err("should fail");
        assert_eq!(
            err,
            ParseError::MalformedLine {
                line: "20 permit 1.1.1.1 bogus".to_string(),
                reason: LineError::UnexpectedToken("bogus".to_string()),
            }
        );
    }

    #[test]
    fn malformed_line_is_skipped_when_asked() {
        let opts = ParseOptions {
            on_malformed: MalformedPolicy::Skip,
        };
        let entries =
            parse_with_options("10 permit any\n20 permit 1.1.1.1 bogus\n", &opts).expect("parse");
        assert_eq!(entries.keys().copied().collect::<Vec<_>>(), vec![10]);
    }

    #[test]
    fn bad_mask_aborts_even_when_skipping() {
        let opts = ParseOptions {
            on_malformed: MalformedPolicy::Skip,
        };
        let err = parse_with_options("10 permit 1.1.1.0 255.0.255.0", &opts).expect_err("fail");
        assert!(matches!(
            err,
            ParseError::Mask {
                source: MaskError::NonContiguous(_),
                ..
            }
        ));
    }

    #[test]
    fn policy_reads_from_lowercase_names() {
        let opts: ParseOptions = serde_json::from_str(r#"{"on_malformed":"skip"}"#).expect("json");
        assert_eq!(opts.on_malformed, MalformedPolicy::Skip);
    }
}
