//! # accrue
//!
//! Accumulate every failure instead of stopping at the first one.
//!
//! `Result` and `?` stop at the first error, which suits control flow but not input
//! validation. A form with a blank name and a negative age should report both problems.
//! accrue provides:
//!
//! - [`Or<G, B>`]: a `Good` value or a `Bad` one, with the usual combinators
//! - [`Every<E>`]: a collection that is never empty, used to hold accumulated failures
//! - [`Validation<E>`]: a `Pass`/`Fail` check with a short-circuiting `and`
//! - [`accumulation`]: the merge law that combines `Or`s pairwise, over containers, and
//!   under post-hoc checks with [`Or::when`]
//! - [`with_good()`]: apply a function of up to 22 arguments once every input is `Good`
//!
//! ## Quick Example
//!
//! ```rust
//! use accrue::prelude::*;
//!
//! #[derive(Debug, PartialEq)]
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! fn parse_name(input: &str) -> Or<String, Every<String>> {
//!     let trimmed = input.trim();
//!     if trimmed.is_empty() {
//!         Or::Bad(every![format!("\"{}\" is not a valid name", input)])
//!     } else {
//!         Or::Good(trimmed.to_string())
//!     }
//! }
//!
//! fn parse_age(input: &str) -> Or<u32, Every<String>> {
//!     match input.trim().parse::<u32>() {
//!         Ok(age) => Or::Good(age),
//!         Err(_) => Or::Bad(every![format!("\"{}\" is not a valid age", input)]),
//!     }
//! }
//!
//! fn is_adult(age: &u32) -> Validation<String> {
//!     Validation::check(*age >= 18, || format!("{} is under 18", age))
//! }
//!
//! fn parse_person(name: &str, age: &str) -> Or<Person, Every<String>> {
//!     with_good(
//!         (parse_name(name), parse_age(age).when([is_adult])),
//!         |name: String, age: u32| Person { name, age },
//!     )
//! }
//!
//! assert_eq!(
//!     parse_person("Ada", "36"),
//!     Or::Good(Person { name: "Ada".to_string(), age: 36 })
//! );
//!
//! // Both problems are reported together
//! assert_eq!(
//!     parse_person("", "12"),
//!     Or::Bad(every![
//!         "\"\" is not a valid name".to_string(),
//!         "12 is under 18".to_string()
//!     ])
//! );
//!
//! // Containers combine the same way
//! let ages: Or<Vec<u32>, Every<String>> = vec!["1", "x", "3", "y"].validated_by(parse_age);
//! assert_eq!(
//!     ages,
//!     Or::Bad(every![
//!         "\"x\" is not a valid age".to_string(),
//!         "\"y\" is not a valid age".to_string()
//!     ])
//! );
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events when an accumulation ends in failure
//! - `serde`: `Serialize`/`Deserialize` for every public type
//! - `proptest`: `Arbitrary` implementations for property-based tests

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod accumulation;
pub mod every;
pub mod or;
pub mod semigroup;
pub mod testing;
pub mod validation;
pub mod with_good;

#[cfg(feature = "serde")]
mod serde_impl;

// Re-exports
pub use accumulation::{combined, validated_by, Build, Combinable, Validatable};
pub use every::{EmptyError, Every};
pub use or::Or;
pub use semigroup::Semigroup;
pub use validation::Validation;
pub use with_good::{with_good, WithGood};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::accumulation::{combined, validated_by, Combinable, Validatable};
    pub use crate::every;
    pub use crate::every::Every;
    pub use crate::or::Or;
    pub use crate::semigroup::Semigroup;
    pub use crate::validation::Validation;
    pub use crate::with_good::{with_good, WithGood};
}
