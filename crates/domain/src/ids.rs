use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Integer identifiers are assigned by the content backend; the core never
/// mints them. `parse_positive` is the validating entry point for records
/// coming off the wire, while `new` accepts any value so that malformed
/// progress snapshots can still be represented (and simply never match).
macro_rules! define_id {
    ($name:ident, $label:literal) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Validate an externally assigned id (must be positive).
            pub fn parse_positive(raw: i64) -> Result<Self, DomainError> {
                if raw > 0 {
                    Ok(Self(raw))
                } else {
                    Err(DomainError::invalid_id(format!(
                        "{} must be positive, got {}",
                        $label, raw
                    )))
                }
            }

            pub const fn as_i64(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let raw = s.trim().parse::<i64>().map_err(|_| {
                    DomainError::parse(format!("Invalid {}: {:?}", $label, s))
                })?;
                Self::parse_positive(raw)
            }
        }
    };
}

define_id!(CategoryId, "category id");
define_id!(QuestionId, "question id");
