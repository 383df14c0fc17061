use std::net::Ipv4Addr;

use ipnet::{ipv4_mask_to_prefix, Ipv4Net};
use thiserror::Error;

/// Mask assumed when a rule carries no mask at all.
pub const FULL_MASK: &str = "255.255.255.255";

/// Errors produced while converting between dotted masks and prefix lengths.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaskError {
    /// The mask text is not a dotted-decimal IPv4 value.
    #[error("invalid subnet mask '{0}'")]
    Invalid(String),
    /// The mask parsed but its one-bits are not contiguous.
    #[error("subnet mask '{0}' is not contiguous")]
    NonContiguous(String),
    /// Prefix length outside 0..=32.
    #[error("prefix length {0} is out of range")]
    PrefixOutOfRange(u8),
}

/// Convert a dotted-decimal subnet mask into a prefix length.
///
/// `None` is treated as [`FULL_MASK`]. The mask is read as the netmask of the
/// all-zeros network, so the result is the count of leading one-bits.
pub fn mask_to_prefix_len(mask: Option<&str>) -> Result<u8, MaskError> {
    let raw = mask.unwrap_or(FULL_MASK);
    let addr: Ipv4Addr = raw
        .parse()
        .map_err(|_| MaskError::Invalid(raw.to_string()))?;
    ipv4_mask_to_prefix(addr).map_err(|_| MaskError::NonContiguous(raw.to_string()))
}

/// Convert a prefix length back into its dotted-decimal mask.
pub fn prefix_len_to_mask(prefix_len: u8) -> Result<Ipv4Addr, MaskError> {
    Ipv4Net::new(Ipv4Addr::UNSPECIFIED, prefix_len)
        .map(|net| net.netmask())
        .map_err(|_| MaskError::PrefixOutOfRange(prefix_len))
}
