//! Serde support (feature-gated)
//!
//! [`Or`](crate::Or) and [`Validation`](crate::Validation) derive `Serialize` and
//! `Deserialize` with serde's default externally tagged layout:
//! `{"Good": 1}`, `{"Bad": ["too small"]}`, `"Pass"`, `{"Fail": "boom"}`.
//!
//! [`Every`] is written as a plain sequence. Deserializing an empty sequence is an
//! error, so the non-empty guarantee holds for data read from the wire.
//!
//! # Example
//!
//! ```rust
//! use accrue::{every, Every, Or};
//!
//! let json = r#"{"Bad":["name is blank","age is negative"]}"#;
//! let parsed: Or<u32, Every<String>> = serde_json::from_str(json).unwrap();
//! assert_eq!(
//!     parsed,
//!     Or::Bad(every!["name is blank".to_string(), "age is negative".to_string()])
//! );
//!
//! let empty: Result<Every<String>, _> = serde_json::from_str("[]");
//! assert!(empty.is_err());
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Every;

impl<E: Serialize> Serialize for Every<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, E: Deserialize<'de>> Deserialize<'de> for Every<E> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let elements = Vec::<E>::deserialize(deserializer)?;
        Every::from_vec(elements)
            .ok_or_else(|| serde::de::Error::invalid_length(0, &"at least one element"))
    }
}
