//! Substrate address decoding (SS58 or raw hex public key).
//!
//! SS58 layout: `prefix (1 or 2 bytes) ++ payload ++ checksum`, where the checksum is the leading
//! bytes of `blake2b_512("SS58PRE" ++ prefix ++ payload)`. Any network prefix is accepted.

use blake2::{Blake2b512, Digest};
use thiserror::Error;

const SS58_CONTEXT: &[u8] = b"SS58PRE";

/// Decoded lengths (prefix + payload + checksum) an SS58 string may have.
const ALLOWED_ENCODED_LENGTHS: [usize; 8] = [3, 4, 6, 10, 35, 36, 37, 38];

#[derive(Error, Debug, PartialEq)]
pub enum AddressError {
    #[error("invalid hex public key: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("invalid base58: {0}")]
    Base58(String),

    #[error("invalid decoded length {0}")]
    InvalidLength(usize),

    #[error("invalid ss58 prefix byte {0}")]
    InvalidPrefix(u8),

    #[error("invalid checksum")]
    InvalidChecksum,
}

/// Decodes an address and returns its public key bytes.
///
/// `0x`-prefixed input is taken as a hex-encoded public key; anything else must be valid SS58.
pub fn decode_address(input: &str) -> Result<Vec<u8>, AddressError> {
    if let Some(hex_part) = input.strip_prefix("0x") {
        let bytes = hex::decode(hex_part)?;
        if bytes.is_empty() {
            return Err(AddressError::InvalidLength(0));
        }
        return Ok(bytes);
    }

    let decoded = bs58::decode(input)
        .into_vec()
        .map_err(|e| AddressError::Base58(e.to_string()))?;

    if !ALLOWED_ENCODED_LENGTHS.contains(&decoded.len()) {
        return Err(AddressError::InvalidLength(decoded.len()));
    }

    let first = decoded[0];
    // Top bit set is reserved; 46 and 47 are reserved prefixes.
    if first & 0b1000_0000 != 0 || first == 46 || first == 47 {
        return Err(AddressError::InvalidPrefix(first));
    }

    let prefix_len = if first & 0b0100_0000 != 0 { 2 } else { 1 };
    let is_public_key = decoded.len() == 34 + prefix_len || decoded.len() == 35 + prefix_len;
    let checksum_len = if is_public_key { 2 } else { 1 };
    let end = decoded.len() - checksum_len;

    let hash = ss58_hash(&decoded[..end]);
    if decoded[end..] != hash[..checksum_len] {
        return Err(AddressError::InvalidChecksum);
    }

    Ok(decoded[prefix_len..end].to_vec())
}

fn ss58_hash(data: &[u8]) -> Vec<u8> {
    let mut hasher = Blake2b512::new();
    hasher.update(SS58_CONTEXT);
    hasher.update(data);
    hasher.finalize().to_vec()
}
