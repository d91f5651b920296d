//! Base62 transcoding of token envelopes.
//!
//! The input is treated as a big-endian unsigned integer and re-expressed in
//! base 62 over the ordered alphabet 0-9 A-Z a-z. Leading zero bytes map
//! one-for-one to leading '0' characters, so the mapping is bijective.

use crate::error::TokenError;

/// The 62-character token alphabet, in digit-value order.
pub const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

const BASE: u32 = 62;

fn digit_value(c: u8) -> Option<u32> {
    match c {
        b'0'..=b'9' => Some(u32::from(c - b'0')),
        b'A'..=b'Z' => Some(u32::from(c - b'A') + 10),
        b'a'..=b'z' => Some(u32::from(c - b'a') + 36),
        _ => None,
    }
}

/// Base62-encode bytes. Total: every input has an encoding, empty included.
pub fn base62_encode(data: &[u8]) -> String {
    let zeroes = data.iter().take_while(|&&b| b == 0).count();

    // One byte carries log(256)/log(62) ~ 1.34 base62 digits.
    let mut digits: Vec<u8> = Vec::with_capacity(data.len() * 137 / 100 + 1);
    for &byte in &data[zeroes..] {
        let mut carry = u32::from(byte);
        for digit in digits.iter_mut() {
            carry += u32::from(*digit) << 8;
            *digit = (carry % BASE) as u8;
            carry /= BASE;
        }
        while carry > 0 {
            digits.push((carry % BASE) as u8);
            carry /= BASE;
        }
    }

    let mut out = String::with_capacity(zeroes + digits.len());
    for _ in 0..zeroes {
        out.push(ALPHABET[0] as char);
    }
    for &digit in digits.iter().rev() {
        out.push(ALPHABET[digit as usize] as char);
    }
    out
}

/// Base62-decode a string to bytes.
///
/// Fails with [`TokenError::InvalidToken`] on any character outside the
/// alphabet. The empty string decodes to empty bytes, keeping
/// `base62_decode(base62_encode(b)) == b` for every byte sequence.
pub fn base62_decode(text: &str) -> Result<Vec<u8>, TokenError> {
    let chars = text.as_bytes();
    let zeroes = chars.iter().take_while(|&&c| c == ALPHABET[0]).count();

    // Accumulated little-endian, reversed at the end.
    let mut bytes: Vec<u8> = Vec::with_capacity(chars.len() * 3 / 4 + 1);
    for &c in &chars[zeroes..] {
        let mut carry = digit_value(c).ok_or(TokenError::InvalidToken)?;
        for byte in bytes.iter_mut() {
            carry += u32::from(*byte) * BASE;
            *byte = (carry & 0xff) as u8;
            carry >>= 8;
        }
        while carry > 0 {
            bytes.push((carry & 0xff) as u8);
            carry >>= 8;
        }
    }

    let mut out = vec![0u8; zeroes];
    out.extend(bytes.iter().rev());
    Ok(out)
}
