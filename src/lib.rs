//! Base58 and Base58Check encoding.
//!
//! [`base58`] converts arbitrary byte strings to and from the Bitcoin Base58
//! alphabet, keeping leading zero bytes as leading `'1'` characters.
//! [`versioned`] wraps that in the Base58Check envelope: one version byte, the
//! payload, and the first four bytes of a double SHA-256 over both.
//!
//! ```
//! let text = base58check::serialize(0, b"\x01\x02\x03").unwrap();
//! let value = base58check::parse(&text).unwrap();
//! assert_eq!(value.version(), 0);
//! assert_eq!(value.payload(), b"\x01\x02\x03");
//! ```

pub mod base58;
pub mod error;
pub mod versioned;

pub use base58::{decode, encode, ALPHABET};
pub use error::{Error, Result};
pub use versioned::{checksum, parse, serialize, VersionedPayload, CHECKSUM_LEN, MIN_DECODED_LEN};
