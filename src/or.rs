//! The `Or` result type: a value that is either `Good` or `Bad`.
//!
//! # Or vs Result
//!
//! `Or<G, B>` carries the same information as `Result<G, B>`, but it is the entry point
//! to error accumulation. When its `Bad` side is an [`Every`](crate::Every), many `Or`s
//! can be folded together so that every failure survives, instead of stopping at the
//! first one. See [`accumulation`](crate::accumulation) and
//! [`with_good`](crate::with_good()).
//!
//! Use `Result` and `?` when the first failure should end the computation. Use `Or` when
//! the caller wants to hear about all of them.
//!
//! # Good-Biased Convention
//!
//! Methods like `map` and `and_then` operate on the `Good` variant; `bad_map` and
//! `or_else` operate on the `Bad` variant. `Bad` values pass through good-side operations
//! unchanged.
//!
//! # Examples
//!
//! ```rust
//! use accrue::Or;
//!
//! fn parse_age(input: &str) -> Or<u8, String> {
//!     match input.parse::<u8>() {
//!         Ok(age) => Or::Good(age),
//!         Err(_) => Or::Bad(format!("\"{}\" is not a valid age", input)),
//!     }
//! }
//!
//! let message = parse_age("42").fold(
//!     |age| format!("age {}", age),
//!     |err| format!("rejected: {}", err),
//! );
//! assert_eq!(message, "age 42");
//!
//! assert!(parse_age("old").is_bad());
//! ```

use crate::{Every, Validation};

/// Either a success value `Good(G)` or a failure value `Bad(B)`.
///
/// An `Or` is immutable once built; every operation produces a new `Or`.
///
/// # Example
///
/// ```rust
/// use accrue::Or;
///
/// let good: Or<i32, &str> = Or::good(42);
/// let bad: Or<i32, &str> = Or::bad("boom");
///
/// match good {
///     Or::Good(n) => assert_eq!(n, 42),
///     Or::Bad(_) => unreachable!(),
/// }
///
/// assert_eq!(bad.map(|n| n + 1), Or::Bad("boom"));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Or<G, B> {
    /// The success variant
    Good(G),
    /// The failure variant
    Bad(B),
}

impl<G, B> Or<G, B> {
    // ========== Constructors ==========

    /// Create a `Good` value.
    #[inline]
    pub fn good(value: G) -> Self {
        Or::Good(value)
    }

    /// Create a `Bad` value.
    #[inline]
    pub fn bad(error: B) -> Self {
        Or::Bad(error)
    }

    /// Create an `Or` from an `Option`, producing the `Bad` payload lazily.
    ///
    /// # Example
    ///
    /// ```rust
    /// use accrue::Or;
    ///
    /// assert_eq!(Or::from_option(Some(1), || "missing"), Or::Good(1));
    /// assert_eq!(Or::<i32, _>::from_option(None, || "missing"), Or::Bad("missing"));
    /// ```
    #[inline]
    pub fn from_option<F>(option: Option<G>, bad: F) -> Self
    where
        F: FnOnce() -> B,
    {
        match option {
            Some(value) => Or::Good(value),
            None => Or::Bad(bad()),
        }
    }

    /// Create an `Or` from a `Result`.
    #[inline]
    pub fn from_result(result: Result<G, B>) -> Self {
        match result {
            Ok(value) => Or::Good(value),
            Err(error) => Or::Bad(error),
        }
    }

    // ========== Predicates ==========

    /// Returns `true` if this is a `Good` value.
    #[inline]
    pub fn is_good(&self) -> bool {
        matches!(self, Or::Good(_))
    }

    /// Returns `true` if this is a `Bad` value.
    #[inline]
    pub fn is_bad(&self) -> bool {
        matches!(self, Or::Bad(_))
    }

    /// Returns `true` if this is `Good` and the value satisfies `predicate`.
    #[inline]
    pub fn exists<F>(&self, predicate: F) -> bool
    where
        F: FnOnce(&G) -> bool,
    {
        match self {
            Or::Good(value) => predicate(value),
            Or::Bad(_) => false,
        }
    }

    /// Returns `true` if this is `Bad`, or `Good` with a value satisfying `predicate`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use accrue::Or;
    ///
    /// assert!(Or::<i32, &str>::Good(4).for_all(|n| n % 2 == 0));
    /// assert!(Or::<i32, &str>::Bad("e").for_all(|n| n % 2 == 0));
    /// assert!(!Or::<i32, &str>::Good(3).for_all(|n| n % 2 == 0));
    /// ```
    #[inline]
    pub fn for_all<F>(&self, predicate: F) -> bool
    where
        F: FnOnce(&G) -> bool,
    {
        match self {
            Or::Good(value) => predicate(value),
            Or::Bad(_) => true,
        }
    }

    // ========== Extractors ==========

    /// Returns the good value if present, consuming self.
    #[inline]
    pub fn into_good(self) -> Option<G> {
        match self {
            Or::Good(value) => Some(value),
            Or::Bad(_) => None,
        }
    }

    /// Returns the bad value if present, consuming self.
    #[inline]
    pub fn into_bad(self) -> Option<B> {
        match self {
            Or::Good(_) => None,
            Or::Bad(error) => Some(error),
        }
    }

    /// Converts from `&Or<G, B>` to `Or<&G, &B>`.
    #[inline]
    pub fn as_ref(&self) -> Or<&G, &B> {
        match self {
            Or::Good(value) => Or::Good(value),
            Or::Bad(error) => Or::Bad(error),
        }
    }

    /// Converts from `&mut Or<G, B>` to `Or<&mut G, &mut B>`.
    #[inline]
    pub fn as_mut(&mut self) -> Or<&mut G, &mut B> {
        match self {
            Or::Good(value) => Or::Good(value),
            Or::Bad(error) => Or::Bad(error),
        }
    }

    /// Returns the good value, or `default` if this is `Bad`.
    #[inline]
    pub fn good_or(self, default: G) -> G {
        match self {
            Or::Good(value) => value,
            Or::Bad(_) => default,
        }
    }

    /// Returns the good value, or computes one from the bad value.
    ///
    /// `f` is only called for `Bad`.
    #[inline]
    pub fn good_or_else<F>(self, f: F) -> G
    where
        F: FnOnce(B) -> G,
    {
        match self {
            Or::Good(value) => value,
            Or::Bad(error) => f(error),
        }
    }

    /// Returns the good value.
    ///
    /// # Panics
    ///
    /// Panics if this is `Bad`.
    #[inline]
    #[track_caller]
    pub fn unwrap_good(self) -> G
    where
        B: std::fmt::Debug,
    {
        match self {
            Or::Good(value) => value,
            Or::Bad(error) => panic!("called `Or::unwrap_good()` on a `Bad` value: {:?}", error),
        }
    }

    /// Returns the bad value.
    ///
    /// # Panics
    ///
    /// Panics if this is `Good`.
    #[inline]
    #[track_caller]
    pub fn unwrap_bad(self) -> B
    where
        G: std::fmt::Debug,
    {
        match self {
            Or::Good(value) => panic!("called `Or::unwrap_bad()` on a `Good` value: {:?}", value),
            Or::Bad(error) => error,
        }
    }

    /// Returns the good value, panicking with `msg` if this is `Bad`.
    #[inline]
    #[track_caller]
    pub fn expect_good(self, msg: &str) -> G
    where
        B: std::fmt::Debug,
    {
        match self {
            Or::Good(value) => value,
            Or::Bad(error) => panic!("{}: {:?}", msg, error),
        }
    }

    /// Returns the bad value, panicking with `msg` if this is `Good`.
    #[inline]
    #[track_caller]
    pub fn expect_bad(self, msg: &str) -> B
    where
        G: std::fmt::Debug,
    {
        match self {
            Or::Good(value) => panic!("{}: {:?}", msg, value),
            Or::Bad(error) => error,
        }
    }

    // ========== Transformations ==========

    /// Apply `f` to a `Good` value; `Bad` passes through unchanged.
    #[inline]
    pub fn map<H, F>(self, f: F) -> Or<H, B>
    where
        F: FnOnce(G) -> H,
    {
        match self {
            Or::Good(value) => Or::Good(f(value)),
            Or::Bad(error) => Or::Bad(error),
        }
    }

    /// Apply `f` to a `Bad` value; `Good` passes through unchanged.
    #[inline]
    pub fn bad_map<C, F>(self, f: F) -> Or<G, C>
    where
        F: FnOnce(B) -> C,
    {
        match self {
            Or::Good(value) => Or::Good(value),
            Or::Bad(error) => Or::Bad(f(error)),
        }
    }

    /// Apply `good_fn` or `bad_fn` depending on the variant, keeping the variant.
    ///
    /// # Example
    ///
    /// ```rust
    /// use accrue::Or;
    ///
    /// let o: Or<i32, &str> = Or::Bad("boom");
    /// assert_eq!(o.transform(|n| n + 1, str::len), Or::Bad(4));
    /// ```
    #[inline]
    pub fn transform<H, C, GF, BF>(self, good_fn: GF, bad_fn: BF) -> Or<H, C>
    where
        GF: FnOnce(G) -> H,
        BF: FnOnce(B) -> C,
    {
        match self {
            Or::Good(value) => Or::Good(good_fn(value)),
            Or::Bad(error) => Or::Bad(bad_fn(error)),
        }
    }

    /// Eliminate the `Or` by handling both variants.
    ///
    /// Both functions are required, so every case is handled.
    #[inline]
    pub fn fold<V, GF, BF>(self, good_fn: GF, bad_fn: BF) -> V
    where
        GF: FnOnce(G) -> V,
        BF: FnOnce(B) -> V,
    {
        match self {
            Or::Good(value) => good_fn(value),
            Or::Bad(error) => bad_fn(error),
        }
    }

    /// Chain a computation that may itself fail.
    ///
    /// `f` is only called for `Good`.
    #[inline]
    pub fn and_then<H, F>(self, f: F) -> Or<H, B>
    where
        F: FnOnce(G) -> Or<H, B>,
    {
        match self {
            Or::Good(value) => f(value),
            Or::Bad(error) => Or::Bad(error),
        }
    }

    /// Try an alternative when this is `Bad`.
    ///
    /// `f` is only called for `Bad`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use accrue::Or;
    ///
    /// let primary: Or<i32, &str> = Or::Bad("primary down");
    /// let recovered: Or<i32, String> = primary.or_else(|e| Or::Good(e.len() as i32));
    /// assert_eq!(recovered, Or::Good(12));
    /// ```
    #[inline]
    pub fn or_else<C, F>(self, f: F) -> Or<G, C>
    where
        F: FnOnce(B) -> Or<G, C>,
    {
        match self {
            Or::Good(value) => Or::Good(value),
            Or::Bad(error) => f(error),
        }
    }

    /// Turn a `Bad` into a `Good` by computing a replacement value.
    #[inline]
    pub fn recover<C, F>(self, f: F) -> Or<G, C>
    where
        F: FnOnce(B) -> G,
    {
        match self {
            Or::Good(value) => Or::Good(value),
            Or::Bad(error) => Or::Good(f(error)),
        }
    }

    /// Exchange the variants.
    #[inline]
    pub fn swap(self) -> Or<B, G> {
        match self {
            Or::Good(value) => Or::Bad(value),
            Or::Bad(error) => Or::Good(error),
        }
    }

    /// Keep a `Good` value only if `check` passes; a `Fail(b)` becomes `Bad(b)`.
    ///
    /// `check` is not called for `Bad`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use accrue::{Or, Validation};
    ///
    /// let even = |n: &i32| Validation::check(n % 2 == 0, || format!("{} is odd", n));
    ///
    /// assert_eq!(Or::<i32, String>::Good(4).filter(even), Or::Good(4));
    /// assert_eq!(Or::<i32, String>::Good(3).filter(even), Or::Bad("3 is odd".to_string()));
    /// ```
    #[inline]
    pub fn filter<F>(self, check: F) -> Or<G, B>
    where
        F: FnOnce(&G) -> Validation<B>,
    {
        match self {
            Or::Good(value) => match check(&value) {
                Validation::Pass => Or::Good(value),
                Validation::Fail(error) => Or::Bad(error),
            },
            Or::Bad(error) => Or::Bad(error),
        }
    }

    /// Run a side effect on the good value.
    #[inline]
    pub fn for_each<F>(self, f: F)
    where
        F: FnOnce(G),
    {
        if let Or::Good(value) = self {
            f(value);
        }
    }

    /// Lift a single `Bad` payload into a one-element [`Every`], so this `Or` can take
    /// part in accumulation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use accrue::{every, Or};
    ///
    /// let o: Or<i32, &str> = Or::Bad("boom");
    /// assert_eq!(o.accumulating(), Or::Bad(every!["boom"]));
    /// ```
    #[inline]
    pub fn accumulating(self) -> Or<G, Every<B>> {
        self.bad_map(Every::One)
    }

    // ========== Conversions ==========

    /// Convert into a `Result`.
    #[inline]
    pub fn into_result(self) -> Result<G, B> {
        match self {
            Or::Good(value) => Ok(value),
            Or::Bad(error) => Err(error),
        }
    }

    /// Iterate over the good value (zero or one item).
    pub fn iter(&self) -> impl Iterator<Item = &G> {
        self.as_ref().into_good().into_iter()
    }
}

impl<G, B> Or<Or<G, B>, B> {
    /// Remove one level of nesting.
    #[inline]
    pub fn flatten(self) -> Or<G, B> {
        self.and_then(|inner| inner)
    }
}

impl<G, B> From<Result<G, B>> for Or<G, B> {
    fn from(result: Result<G, B>) -> Self {
        Or::from_result(result)
    }
}

impl<G, B> From<Or<G, B>> for Result<G, B> {
    fn from(or: Or<G, B>) -> Self {
        or.into_result()
    }
}

impl<G, B> IntoIterator for Or<G, B> {
    type Item = G;
    type IntoIter = std::option::IntoIter<G>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_good().into_iter()
    }
}

impl<'a, G, B> IntoIterator for &'a Or<G, B> {
    type Item = &'a G;
    type IntoIter = std::option::IntoIter<&'a G>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_ref().into_good().into_iter()
    }
}
