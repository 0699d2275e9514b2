use derive_more::{Deref, Display};
use std::str::FromStr;
use thiserror::Error as ThisError;
use ulid::Ulid as WrappedUlid;

///
/// UidError
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum UidError {
    #[error("invalid uid string")]
    InvalidString,
}

///
/// Uid
///
/// ULID-backed identifier newtype: lexicographically sortable, 26-character
/// Crockford base32 text form.
///

#[derive(Clone, Copy, Debug, Deref, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Uid(WrappedUlid);

impl Uid {
    pub const ENCODED_LEN: usize = ::ulid::ULID_LEN;

    #[must_use]
    pub const fn nil() -> Self {
        Self(WrappedUlid::nil())
    }

    #[must_use]
    pub const fn from_parts(timestamp_ms: u64, random: u128) -> Self {
        Self(WrappedUlid::from_parts(timestamp_ms, random))
    }

    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(WrappedUlid::from_bytes(bytes))
    }

    #[must_use]
    pub const fn from_u128(n: u128) -> Self {
        Self(WrappedUlid::from_bytes(n.to_be_bytes()))
    }

    /// Parse the canonical 26-character text form.
    pub fn parse(encoded: &str) -> Result<Self, UidError> {
        let inner = WrappedUlid::from_string(encoded).map_err(|_| UidError::InvalidString)?;

        Ok(Self(inner))
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    #[must_use]
    pub fn to_bytes(&self) -> [u8; 16] {
        self.0.to_bytes()
    }
}

impl Default for Uid {
    fn default() -> Self {
        Self::nil()
    }
}

impl From<WrappedUlid> for Uid {
    fn from(ulid: WrappedUlid) -> Self {
        Self(ulid)
    }
}

impl FromStr for Uid {
    type Err = UidError;

    fn from_str(encoded: &str) -> Result<Self, Self::Err> {
        Self::parse(encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nil_round_trips_through_text() {
        let nil = Uid::nil();
        assert!(nil.is_nil());
        let text = nil.to_string();
        assert_eq!(text.len(), Uid::ENCODED_LEN);
        assert_eq!(Uid::parse(&text).unwrap(), nil);
    }

    #[test]
    fn from_parts_orders_by_timestamp() {
        let older = Uid::from_parts(1_000, 42);
        let newer = Uid::from_parts(2_000, 0);
        assert!(older < newer);
    }

    #[test]
    fn garbage_fails_to_parse() {
        assert_eq!(Uid::parse("not a ulid"), Err(UidError::InvalidString));
        assert_eq!("!!!".parse::<Uid>(), Err(UidError::InvalidString));
    }
}
