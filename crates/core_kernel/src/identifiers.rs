//! Strongly-typed identifiers for domain entities
//!
//! Identifiers are integer-backed because the storage layer assigns them
//! from database sequences. Newtype wrappers prevent accidental mixing of
//! different identifier types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Creates an identifier from a storage-assigned value
            pub fn from_i64(value: i64) -> Self {
                Self(value)
            }

            /// Returns the underlying integer value
            pub fn as_i64(&self) -> i64 {
                self.0
            }

            /// Returns the identifier prefix for display
            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // Strip prefix if present
                let raw = s.strip_prefix(concat!($prefix, "-")).unwrap_or(s);
                Ok(Self(raw.parse()?))
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> i64 {
                id.0
            }
        }
    };
}

// Claims domain identifiers
define_id!(ClaimId, "CLM");
define_id!(AttachmentId, "ATT");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_id_display() {
        let id = ClaimId::from_i64(42);
        assert_eq!(id.to_string(), "CLM-42");
    }

    #[test]
    fn test_id_parsing() {
        let original = AttachmentId::from_i64(7);
        let parsed: AttachmentId = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_bare_integer_parsing() {
        let parsed: ClaimId = "17".parse().unwrap();
        assert_eq!(parsed.as_i64(), 17);
    }

    #[test]
    fn test_i64_conversion() {
        let id = ClaimId::from(99);
        let back: i64 = id.into();
        assert_eq!(back, 99);
    }
}
