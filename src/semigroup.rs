//! Semigroup trait for associative merging of failure payloads
//!
//! A Semigroup is a type with an associative binary operation. In this crate it is the
//! merge law behind every accumulation: when two `Bad` values meet, their payloads are
//! combined left to right, so the left-hand failures always come first.
//!
//! # Mathematical Properties
//!
//! For a type to be a valid Semigroup, the `combine` operation must be associative:
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! [`Every`](crate::Every) is the canonical instance: combining two `Every`s concatenates
//! them and the result is never empty.
//!
//! # Examples
//!
//! ```
//! use accrue::{every, Semigroup};
//!
//! let first = every!["too short"];
//! let second = every!["no digits", "no symbols"];
//! assert_eq!(
//!     first.combine(second),
//!     every!["too short", "no digits", "no symbols"]
//! );
//!
//! // Plain vectors and strings merge the same way
//! assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
//! assert_eq!("ab".to_string().combine("c".to_string()), "abc");
//! ```

/// A type that supports an associative binary operation
///
/// # Laws
///
/// Implementations must satisfy the associativity law:
/// ```text
/// a.combine(b).combine(c) == a.combine(b.combine(c))
/// ```
///
/// Implementations used as `Bad` payloads must also keep every element of both operands
/// and keep `self` ahead of `other`. Nothing may be dropped or reordered.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    ///
    /// # Examples
    ///
    /// ```
    /// use accrue::Semigroup;
    ///
    /// let merged = vec!["a"].combine(vec!["b", "c"]);
    /// assert_eq!(merged, vec!["a", "b", "c"]);
    /// ```
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}
