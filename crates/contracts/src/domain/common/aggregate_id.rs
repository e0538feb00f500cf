use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier of a catalogue record as issued by the external store
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Raw numeric value
    fn value(&self) -> i64;

    /// Render the id the way it appears in query strings and form values
    fn as_string(&self) -> String {
        self.value().to_string()
    }

    /// Parse an id from a query string or form value
    fn from_string(s: &str) -> Result<Self, String>;
}

/// Declares an `i64`-backed id newtype that serializes as a bare number.
#[macro_export]
macro_rules! aggregate_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            pub fn new(value: i64) -> Self {
                Self(value)
            }
        }

        impl $crate::domain::common::AggregateId for $name {
            fn value(&self) -> i64 {
                self.0
            }

            fn from_string(s: &str) -> Result<Self, String> {
                s.trim()
                    .parse::<i64>()
                    .map($name)
                    .map_err(|e| format!("Invalid {} '{}': {}", stringify!($name), s, e))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    aggregate_id!(SampleId);

    #[test]
    fn test_parse_and_render() {
        let id = SampleId::from_string(" 42 ").unwrap();
        assert_eq!(id, SampleId(42));
        assert_eq!(id.as_string(), "42");
        assert!(SampleId::from_string("forty-two").is_err());
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&SampleId(7)).unwrap();
        assert_eq!(json, "7");
        let back: SampleId = serde_json::from_str("7").unwrap();
        assert_eq!(back, SampleId(7));
    }
}
