//! Token grammar for a single standard ACL rule line.
//!
//! A rule line is `<seqno> <action> [any] [host] [<addr>[/<len>]] [<mask>] [log]`.
//! Every field after the action is optional but the order is fixed, so the
//! matcher walks the tokens once and moves through [`Field`] states. A line
//! that leaves tokens unconsumed is rejected instead of being partially read.

use std::str::SplitWhitespace;

use thiserror::Error;

/// Reasons a candidate line fails the detailed grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("missing sequence number")]
    MissingSeqno,
    #[error("sequence number '{0}' is not a 32-bit integer")]
    BadSeqno(String),
    #[error("missing action")]
    MissingAction,
    #[error("'{0}' is not a permit/deny action")]
    BadAction(String),
    #[error("prefix length in '{0}' must be 0-32")]
    BadPrefix(String),
    #[error("unexpected token '{0}'")]
    UnexpectedToken(String),
}

/// Raw captures of one rule line, before defaults are applied.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineMatch {
    pub seqno: u32,
    pub action: String,
    pub any: bool,
    /// Captured for completeness; prefix derivation ignores it.
    pub host: bool,
    pub address: Option<String>,
    pub prefix_len: Option<u8>,
    pub mask: Option<String>,
    pub log: bool,
}

/// Optional fields in the order they may appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Field {
    Any,
    Host,
    Address,
    Mask,
    Log,
}

/// Coarse filter: digits, whitespace, then a token starting with `p` or `d`.
pub fn is_candidate(line: &str) -> bool {
    let line = line.trim_start();
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return false;
    }
    let rest = &line[digits..];
    let trimmed = rest.trim_start();
    if trimmed.len() == rest.len() {
        return false;
    }
    matches!(trimmed.as_bytes().first(), Some(b'p' | b'd'))
}

/// Match one candidate line against the full grammar.
pub fn match_line(line: &str) -> Result<LineMatch, LineError> {
    let mut tokens = line.split_whitespace();

    let seqno_raw = tokens.next().ok_or(LineError::MissingSeqno)?;
    let seqno = parse_seqno(seqno_raw)?;
    let action = tokens.next().ok_or(LineError::MissingAction)?;
    if !is_action(action) {
        return Err(LineError::BadAction(action.to_string()));
    }

    let mut out = LineMatch {
        seqno,
        action: action.to_string(),
        ..LineMatch::default()
    };
    match_optional_fields(&mut tokens, &mut out)?;
    Ok(out)
}

fn match_optional_fields(
    tokens: &mut SplitWhitespace<'_>,
    out: &mut LineMatch,
) -> Result<(), LineError> {
    let mut next_field = Some(Field::Any);

    for token in tokens {
        let field = next_field
            .and_then(|from| classify(token, from))
            .ok_or_else(|| LineError::UnexpectedToken(token.to_string()))?;
        match field {
            Field::Any => out.any = true,
            Field::Host => out.host = true,
            Field::Address => {
                let (addr, prefix_len) = split_prefix(token)?;
                out.address = Some(addr.to_string());
                out.prefix_len = prefix_len;
            }
            Field::Mask => out.mask = Some(token.to_string()),
            Field::Log => out.log = true,
        }
        next_field = successor(field);
    }

    Ok(())
}

/// Pick the first field at or after `from` that accepts `token`.
fn classify(token: &str, from: Field) -> Option<Field> {
    if from <= Field::Any && token == "any" {
        return Some(Field::Any);
    }
    if from <= Field::Host && token == "host" {
        return Some(Field::Host);
    }
    if from <= Field::Address && is_address_with_prefix(token) {
        return Some(Field::Address);
    }
    if from <= Field::Mask && is_dotted_quad(token) {
        return Some(Field::Mask);
    }
    if from <= Field::Log && token == "log" {
        return Some(Field::Log);
    }
    None
}

/// Field allowed after `field`; nothing may follow `log`.
fn successor(field: Field) -> Option<Field> {
    match field {
        Field::Any => Some(Field::Host),
        Field::Host => Some(Field::Address),
        Field::Address => Some(Field::Mask),
        Field::Mask => Some(Field::Log),
        Field::Log => None,
    }
}

fn parse_seqno(raw: &str) -> Result<u32, LineError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LineError::BadSeqno(raw.to_string()));
    }
    raw.parse()
        .map_err(|_| LineError::BadSeqno(raw.to_string()))
}

/// Action verbs are a word of two or more characters starting with `p` or `d`.
fn is_action(token: &str) -> bool {
    matches!(token.as_bytes().first(), Some(b'p' | b'd'))
        && token.len() > 1
        && token.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

/// Four dot-separated runs of digits. Octet ranges are not checked.
fn is_dotted_quad(token: &str) -> bool {
    let mut parts = 0;
    for part in token.split('.') {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        parts += 1;
    }
    parts == 4
}

fn is_address_with_prefix(token: &str) -> bool {
    match token.split_once('/') {
        Some((addr, len)) => {
            is_dotted_quad(addr)
                && (1..=2).contains(&len.len())
                && len.bytes().all(|b| b.is_ascii_digit())
        }
        None => is_dotted_quad(token),
    }
}

fn split_prefix(token: &str) -> Result<(&str, Option<u8>), LineError> {
    let Some((addr, len)) = token.split_once('/') else {
        return Ok((token, None));
    };
    let prefix_len: u8 = len
        .parse()
        .map_err(|_| LineError::BadPrefix(token.to_string()))?;
    if prefix_len > 32 {
        return Err(LineError::BadPrefix(token.to_string()));
    }
    Ok((addr, Some(prefix_len)))
}

#[cfg(test)]
mod tests {
    use super::{is_candidate, match_line, LineError, LineMatch};

    #[test]
    fn candidate_filter_selects_rule_lines_only() {
        assert!(is_candidate("10 permit any"));
        assert!(is_candidate("   20 deny 10.0.0.0/8"));
        assert!(is_candidate("30 p"));
        assert!(!is_candidate("ip access-list standard test1"));
        assert!(!is_candidate("40 remark lab hosts"));
        assert!(!is_candidate("50permit any"));
        assert!(!is_candidate("!"));
    }

    #[test]
    fn matches_every_optional_field_in_order() {
        let m = match_line("10 permit any host 1.2.3.4/24 255.255.255.0 log").expect("match");
        assert_eq!(
            m,
            LineMatch {
                seqno: 10,
                action: "permit".to_string(),
                any: true,
                host: true,
                address: Some("1.2.3.4".to_string()),
                prefix_len: Some(24),
                mask: Some("255.255.255.0".to_string()),
                log: true,
            }
        );
    }

    #[test]
    fn single_dotted_token_is_the_address() {
        let m = match_line("20 deny 10.10.10.0 0.0.0.0").expect("match");
        assert_eq!(m.address.as_deref(), Some("10.10.10.0"));
        assert_eq!(m.mask.as_deref(), Some("0.0.0.0"));
        assert_eq!(m.prefix_len, None);
    }

    #[test]
    fn host_is_captured_without_address() {
        let m = match_line("30 permit host 192.168.1.1").expect("match");
        assert!(m.host);
        assert!(!m.any);
        assert_eq!(m.address.as_deref(), Some("192.168.1.1"));
    }

    #[test]
    fn log_must_be_last() {
        assert_eq!(
            match_line("40 permit log 1.1.1.1"),
            Err(LineError::UnexpectedToken("1.1.1.1".to_string()))
        );
    }

    #[test]
    fn fields_out_of_order_are_rejected() {
        assert_eq!(
            match_line("40 permit host any"),
            Err(LineError::UnexpectedToken("any".to_string()))
        );
        assert_eq!(
            match_line("40 permit 1.1.1.1 255.0.0.0 2.2.2.2"),
            Err(LineError::UnexpectedToken("2.2.2.2".to_string()))
        );
    }

    #[test]
    fn rejects_bad_seqno_action_and_prefix() {
        assert_eq!(
            match_line("99999999999 permit any"),
            Err(LineError::BadSeqno("99999999999".to_string()))
        );
        assert_eq!(
            match_line("10 p any"),
            Err(LineError::BadAction("p".to_string()))
        );
        assert_eq!(
            match_line("10 permit 10.0.0.0/40"),
            Err(LineError::BadPrefix("10.0.0.0/40".to_string()))
        );
        assert_eq!(
            match_line("10 permit 10.0.0.0/123"),
            Err(LineError::UnexpectedToken("10.0.0.0/123".to_string()))
        );
    }

    #[test]
    fn bare_action_matches_with_no_captures() {
        let m = match_line("50 deny").expect("match");
        assert_eq!(m.action, "deny");
        assert_eq!(m.address, None);
        assert!(!m.log);
    }
}
