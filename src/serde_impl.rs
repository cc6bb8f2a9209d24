//! Serde support for [`Outcome`] (feature-gated).
//!
//! Outcomes are encoded with an explicit discriminant and exactly one
//! payload field:
//!
//! ```json
//! {"status": "success", "value": 42}
//! {"status": "failure", "error": "not found"}
//! ```
//!
//! A document with any other `status`, or without the payload field its
//! status requires, fails to deserialize.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Outcome;

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum TaggedRef<'a, T, E> {
    Success { value: &'a T },
    Failure { error: &'a E },
}

#[derive(Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum Tagged<T, E> {
    Success { value: T },
    Failure { error: E },
}

impl<T, E> Serialize for Outcome<T, E>
where
    T: Serialize,
    E: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let tagged = match self {
            Outcome::Success(value) => TaggedRef::Success { value },
            Outcome::Failure(error) => TaggedRef::Failure { error },
        };
        tagged.serialize(serializer)
    }
}

impl<'de, T, E> Deserialize<'de> for Outcome<T, E>
where
    T: Deserialize<'de>,
    E: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Tagged::deserialize(deserializer)? {
            Tagged::Success { value } => Outcome::Success(value),
            Tagged::Failure { error } => Outcome::Failure(error),
        })
    }
}
