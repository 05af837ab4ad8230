//! Opaque 12-byte document identifiers.
//!
//! Identifiers are carried through documents untouched. They are deliberately
//! outside the scalar allow-list, so the normalizer never flattens them.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Error returned when parsing an [`ObjectId`] from text fails.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ObjectIdError {
    /// The input was not 24 hexadecimal digits.
    #[error("Invalid object id '{input}': {reason}")]
    Invalid { input: String, reason: String },
}

/// A 12-byte identifier, displayed as 24 lowercase hex digits.
///
/// ```
/// # use docshape::doc::ObjectId;
/// let id: ObjectId = "5f1d7a3c9b1e8a0012345678".parse()?;
/// assert_eq!(id.to_hex(), "5f1d7a3c9b1e8a0012345678");
/// assert_eq!(id.bytes()[0], 0x5f);
/// # Ok::<(), docshape::doc::ObjectIdError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId([u8; 12]);

impl ObjectId {
    /// Wraps raw identifier bytes.
    pub const fn from_bytes(bytes: [u8; 12]) -> Self {
        Self(bytes)
    }

    /// Returns the raw identifier bytes.
    pub fn bytes(&self) -> [u8; 12] {
        self.0
    }

    /// Returns the identifier as 24 lowercase hex digits.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for ObjectId {
    type Err = ObjectIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; 12];
        hex::decode_to_slice(s, &mut bytes).map_err(|e| ObjectIdError::Invalid {
            input: s.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self(bytes))
    }
}

impl From<[u8; 12]> for ObjectId {
    fn from(bytes: [u8; 12]) -> Self {
        Self(bytes)
    }
}
