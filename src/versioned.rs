//! Base58Check: a version byte and payload sealed with a 4-byte checksum.

use std::fmt;
use std::str::FromStr;

use bitcoin::hashes::{sha256d, Hash as _};
use log::debug;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::base58;
use crate::error::{Error, Result};

/// Number of checksum bytes appended before encoding.
pub const CHECKSUM_LEN: usize = 4;

/// Smallest decoded length that holds a version byte and a checksum.
pub const MIN_DECODED_LEN: usize = 1 + CHECKSUM_LEN;

/// First four bytes of the double SHA-256 of `data`.
pub fn checksum(data: &[u8]) -> [u8; CHECKSUM_LEN] {
    let digest = sha256d::Hash::hash(data).to_byte_array();
    let mut check = [0u8; CHECKSUM_LEN];
    check.copy_from_slice(&digest[..CHECKSUM_LEN]);
    check
}

/// Encode `payload` under `version` as a Base58Check string.
pub fn serialize(version: i64, payload: &[u8]) -> Result<String> {
    Ok(VersionedPayload::from_bytes(payload, version)?.to_string())
}

/// Decode a Base58Check string and verify its checksum.
pub fn parse(s: &str) -> Result<VersionedPayload> {
    let data = base58::decode(s)?;
    if data.len() < MIN_DECODED_LEN {
        debug!("base58check string {:?} decodes to only {} bytes", s, data.len());
        return Err(Error::MalformedPayload(data.len()));
    }

    let (body, check) = data.split_at(data.len() - CHECKSUM_LEN);
    let mut expected = [0u8; CHECKSUM_LEN];
    expected.copy_from_slice(check);
    let calculated = checksum(body);
    if expected != calculated {
        debug!(
            "base58check string {:?} failed verification: expected {:02x?}, calculated {:02x?}",
            s, expected, calculated
        );
        return Err(Error::ChecksumMismatch {
            expected,
            calculated,
        });
    }

    Ok(VersionedPayload {
        version: body[0],
        payload: body[1..].to_vec(),
    })
}

/// Payload bytes tagged with a one-byte version.
///
/// The checksum is not stored; it is derived from version and payload whenever
/// the value is encoded or inspected.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VersionedPayload {
    version: u8,
    payload: Vec<u8>,
}

impl VersionedPayload {
    pub fn new(version: u8, payload: impl Into<Vec<u8>>) -> Self {
        VersionedPayload {
            version,
            payload: payload.into(),
        }
    }

    /// Build from a payload and an unchecked integer version.
    pub fn from_bytes(payload: &[u8], version: i64) -> Result<Self> {
        let version = u8::try_from(version).map_err(|_| Error::InvalidVersion(version))?;
        Ok(Self::new(version, payload))
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Payload bytes only; version and checksum are not included.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.payload.clone()
    }

    pub fn into_payload(self) -> Vec<u8> {
        self.payload
    }

    /// Checksum over the version byte followed by the payload.
    pub fn checksum(&self) -> [u8; CHECKSUM_LEN] {
        checksum(&self.versioned_bytes())
    }

    fn versioned_bytes(&self) -> Vec<u8> {
        let mut vs = Vec::with_capacity(1 + self.payload.len() + CHECKSUM_LEN);
        vs.push(self.version);
        vs.extend_from_slice(&self.payload);
        vs
    }
}

impl AsRef<[u8]> for VersionedPayload {
    fn as_ref(&self) -> &[u8] {
        &self.payload
    }
}

impl fmt::Display for VersionedPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut vs = self.versioned_bytes();
        let check = checksum(&vs);
        vs.extend_from_slice(&check);
        f.write_str(&base58::encode(&vs))
    }
}

impl fmt::Debug for VersionedPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("VersionedPayload")
            .field(&self.to_string())
            .finish()
    }
}

impl FromStr for VersionedPayload {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

impl Serialize for VersionedPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for VersionedPayload {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse(&s).map_err(de::Error::custom)
    }
}
