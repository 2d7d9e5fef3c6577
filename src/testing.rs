//! Testing utilities for code built on accrue
//!
//! This module provides assertion macros for [`Or`](crate::Or) and
//! [`Validation`](crate::Validation), and, with the `proptest` feature, `Arbitrary`
//! implementations for every public type.
//!
//! # Examples
//!
//! ## Assertion Macros
//!
//! ```rust
//! use accrue::{every, assert_bad, assert_bad_errors, assert_good, Every, Or};
//!
//! let good: Or<i32, Every<&str>> = Or::Good(42);
//! assert_good!(good);
//!
//! let bad: Or<i32, Every<&str>> = Or::Bad(every!["too small", "odd"]);
//! assert_bad!(bad.clone());
//! assert_bad_errors!(bad, every!["too small", "odd"]);
//! ```
//!
//! ## Property-based testing
//!
//! With the `proptest` feature enabled:
//!
//! ```rust,ignore
//! use accrue::{Every, Or};
//! use proptest::prelude::*;
//!
//! proptest! {
//!     #[test]
//!     fn every_is_never_empty(errors in any::<Every<u8>>()) {
//!         prop_assert!(errors.len() >= 1);
//!     }
//! }
//! ```

/// Assert that an `Or` is `Good`.
///
/// This macro will panic if the value is `Bad`.
///
/// # Example
///
/// ```rust
/// use accrue::{assert_good, Or};
///
/// let or: Or<i32, String> = Or::Good(42);
/// assert_good!(or);
/// ```
#[macro_export]
macro_rules! assert_good {
    ($or:expr) => {
        match $or {
            $crate::Or::Good(_) => {}
            $crate::Or::Bad(e) => {
                panic!("Expected Good, got Bad: {:?}", e);
            }
        }
    };
}

/// Assert that an `Or` is `Bad`.
///
/// This macro will panic if the value is `Good`.
///
/// # Example
///
/// ```rust
/// use accrue::{assert_bad, Or};
///
/// let or: Or<i32, String> = Or::Bad("nope".to_string());
/// assert_bad!(or);
/// ```
#[macro_export]
macro_rules! assert_bad {
    ($or:expr) => {
        match $or {
            $crate::Or::Bad(_) => {}
            $crate::Or::Good(g) => {
                panic!("Expected Bad, got Good: {:?}", g);
            }
        }
    };
}

/// Assert that an `Or` is `Bad` with specific errors.
///
/// This macro will panic if the value is `Good` or if the errors don't match.
///
/// # Example
///
/// ```rust
/// use accrue::{every, assert_bad_errors, Every, Or};
///
/// let or: Or<i32, Every<&str>> = Or::Bad(every!["error1", "error2"]);
/// assert_bad_errors!(or, every!["error1", "error2"]);
/// ```
#[macro_export]
macro_rules! assert_bad_errors {
    ($or:expr, $expected:expr) => {
        match $or {
            $crate::Or::Bad(errors) => {
                assert_eq!(errors, $expected);
            }
            $crate::Or::Good(g) => {
                panic!("Expected Bad with errors {:?}, got Good: {:?}", $expected, g);
            }
        }
    };
}

/// Assert that a `Validation` is `Fail`.
///
/// # Example
///
/// ```rust
/// use accrue::{assert_fail, Validation};
///
/// assert_fail!(Validation::Fail("boom"));
/// ```
#[macro_export]
macro_rules! assert_fail {
    ($validation:expr) => {
        if let $crate::Validation::Pass = $validation {
            panic!("Expected Fail, got Pass");
        }
    };
}

#[cfg(feature = "proptest")]
use crate::{Every, Or, Validation};
#[cfg(feature = "proptest")]
use proptest::prelude::*;
#[cfg(feature = "proptest")]
use proptest::strategy::LazyJust;

#[cfg(feature = "proptest")]
impl<G, B> Arbitrary for Or<G, B>
where
    G: Arbitrary + 'static,
    B: Arbitrary + 'static,
    G::Strategy: 'static,
    B::Strategy: 'static,
{
    type Parameters = (G::Parameters, B::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (g_params, b_params) = args;
        prop_oneof![
            any_with::<G>(g_params).prop_map(Or::Good),
            any_with::<B>(b_params).prop_map(Or::Bad),
        ]
        .boxed()
    }
}

// Up to eight elements, which covers both variants.
#[cfg(feature = "proptest")]
impl<E> Arbitrary for Every<E>
where
    E: Arbitrary + 'static,
    E::Strategy: 'static,
{
    type Parameters = E::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        prop::collection::vec(any_with::<E>(args), 1..=8)
            .prop_filter_map("an Every holds at least one element", Every::from_vec)
            .boxed()
    }
}

#[cfg(feature = "proptest")]
impl<E> Arbitrary for Validation<E>
where
    E: Arbitrary + 'static,
    E::Strategy: 'static,
{
    type Parameters = E::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            LazyJust::new(|| Validation::Pass),
            any_with::<E>(args).prop_map(Validation::Fail),
        ]
        .boxed()
    }
}
