//! Plain Base58 conversion between big-endian byte strings and text.

use crate::error::{Error, Result};

/// The Bitcoin Base58 alphabet. Index 0 (`'1'`) stands for digit value zero.
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Encode bytes as a base58 string.
///
/// The input is read as one big-endian unsigned integer. Each leading zero byte
/// becomes one leading `'1'`, since the integer conversion alone would drop it.
pub fn encode(data: &[u8]) -> String {
    let zeros = data.iter().take_while(|b| **b == 0).count();
    // Little-endian base58 digits; log(256)/log(58) < 1.38.
    let mut digits: Vec<u8> = Vec::with_capacity((data.len() - zeros) * 138 / 100 + 1);

    for byte in &data[zeros..] {
        let mut carry = *byte as u32;
        for d in digits.iter_mut() {
            carry += (*d as u32) << 8;
            *d = (carry % 58) as u8;
            carry /= 58;
        }
        while carry > 0 {
            digits.push((carry % 58) as u8);
            carry /= 58;
        }
    }

    let mut result = String::with_capacity(zeros + digits.len());
    for _ in 0..zeros {
        result.push(ALPHABET[0] as char);
    }
    for d in digits.iter().rev() {
        result.push(ALPHABET[*d as usize] as char);
    }
    result
}

/// Decode a base58 string into bytes.
///
/// Decoding is permissive: any number of leading `'1'` characters is accepted
/// and each one except a trailing one becomes a zero byte. A zero value always
/// yields at least one byte, so `"1"` decodes to `[0]` and `"11"` to `[0, 0]`.
pub fn decode(s: &str) -> Result<Vec<u8>> {
    if s.is_empty() {
        return Ok(Vec::new());
    }

    // Little-endian base256 digits; log(58)/log(256) < 0.733.
    let mut b256: Vec<u8> = Vec::with_capacity(s.len() * 733 / 1000 + 1);
    for (position, character) in s.chars().enumerate() {
        let val = digit_value(character).ok_or_else(|| Error::InvalidAlphabet {
            character,
            position,
        })?;
        let mut carry = val as u32;
        for d in b256.iter_mut() {
            carry += (*d as u32) * 58;
            *d = (carry % 256) as u8;
            carry /= 256;
        }
        while carry > 0 {
            b256.push((carry % 256) as u8);
            carry /= 256;
        }
    }
    if b256.is_empty() {
        b256.push(0);
    }

    // Every character is ASCII past this point, so byte slicing is safe.
    // The last character is left out of the scan on purpose: an all-'1'
    // string already contributes its final zero byte through the value above.
    let bytes = s.as_bytes();
    let zeros = bytes[..bytes.len() - 1]
        .iter()
        .take_while(|&&b| b == ALPHABET[0])
        .count();

    let mut result = Vec::with_capacity(zeros + b256.len());
    result.extend(std::iter::repeat(0u8).take(zeros));
    result.extend(b256.iter().rev());
    Ok(result)
}

fn digit_value(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    ALPHABET
        .iter()
        .position(|&a| a == c as u8)
        .map(|v| v as u8)
}
