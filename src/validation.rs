//! Pass/Fail signal for predicate-style checks
//!
//! A [`Validation<E>`] is the result of checking a value without transforming it: the
//! check either passes silently or fails with one error. Validations are not accumulated
//! on their own. [`Or::when`](crate::Or::when) runs a list of them against a `Good` value
//! and lifts the failures into an [`Every`](crate::Every), and
//! [`Or::filter`](crate::Or::filter) uses one to turn a `Good` into a `Bad`.
//!
//! # Examples
//!
//! ```
//! use accrue::Validation;
//!
//! fn is_round(n: &i32) -> Validation<String> {
//!     if n % 10 == 0 {
//!         Validation::Pass
//!     } else {
//!         Validation::Fail(format!("{} was not a round number", n))
//!     }
//! }
//!
//! assert_eq!(is_round(&30), Validation::Pass);
//! assert!(is_round(&4).is_fail());
//! ```
//!
//! ## Short-circuiting conjunction
//!
//! [`Validation::and`] takes its right-hand side as a closure and only calls it when the
//! left-hand side passed:
//!
//! ```
//! use accrue::Validation;
//!
//! let mut evaluated = false;
//! let result = Validation::fail("first").and(|| {
//!     evaluated = true;
//!     Validation::Pass
//! });
//!
//! assert_eq!(result, Validation::Fail("first"));
//! assert!(!evaluated);
//! ```

/// Outcome of a check that carries no success value.
///
/// # Type Parameters
///
/// * `E` - The type of the error reported on failure
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Validation<E> {
    /// The check passed
    Pass,
    /// The check failed with an error
    Fail(E),
}

impl<E> Validation<E> {
    /// A passing validation.
    #[inline]
    pub fn pass() -> Self {
        Validation::Pass
    }

    /// A failing validation carrying `error`.
    #[inline]
    pub fn fail(error: E) -> Self {
        Validation::Fail(error)
    }

    /// Build a validation from a boolean condition and a lazily produced error.
    ///
    /// # Examples
    ///
    /// ```
    /// use accrue::Validation;
    ///
    /// let v = Validation::check(3 > 5, || "too small");
    /// assert_eq!(v, Validation::Fail("too small"));
    /// ```
    #[inline]
    pub fn check<F>(condition: bool, error: F) -> Self
    where
        F: FnOnce() -> E,
    {
        if condition {
            Validation::Pass
        } else {
            Validation::Fail(error())
        }
    }

    /// Check if this validation passed
    #[inline]
    pub fn is_pass(&self) -> bool {
        matches!(self, Validation::Pass)
    }

    /// Check if this validation failed
    #[inline]
    pub fn is_fail(&self) -> bool {
        matches!(self, Validation::Fail(_))
    }

    /// Short-circuiting logical AND.
    ///
    /// `Pass.and(f)` evaluates `f` and returns its result. `Fail(e).and(f)` returns
    /// `Fail(e)` and never calls `f`.
    ///
    /// # Examples
    ///
    /// ```
    /// use accrue::Validation;
    ///
    /// let v: Validation<&str> = Validation::Pass.and(|| Validation::Fail("second"));
    /// assert_eq!(v, Validation::Fail("second"));
    ///
    /// let v: Validation<&str> = Validation::Pass.and(|| Validation::Pass);
    /// assert!(v.is_pass());
    /// ```
    #[inline]
    pub fn and<F>(self, other: F) -> Validation<E>
    where
        F: FnOnce() -> Validation<E>,
    {
        match self {
            Validation::Pass => other(),
            Validation::Fail(error) => Validation::Fail(error),
        }
    }

    /// Transform the error if present
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Validation<E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Validation::Pass => Validation::Pass,
            Validation::Fail(error) => Validation::Fail(f(error)),
        }
    }

    /// The error, if the validation failed.
    #[inline]
    pub fn into_error(self) -> Option<E> {
        match self {
            Validation::Pass => None,
            Validation::Fail(error) => Some(error),
        }
    }

    /// Convert to `Result<(), E>`.
    #[inline]
    pub fn into_result(self) -> Result<(), E> {
        match self {
            Validation::Pass => Ok(()),
            Validation::Fail(error) => Err(error),
        }
    }
}

impl<E> From<Result<(), E>> for Validation<E> {
    fn from(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => Validation::Pass,
            Err(error) => Validation::Fail(error),
        }
    }
}

impl<E> From<Validation<E>> for Result<(), E> {
    fn from(validation: Validation<E>) -> Self {
        validation.into_result()
    }
}
