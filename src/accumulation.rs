//! Error accumulation over pairs, containers, and post-hoc checks
//!
//! Every operation in this module is one pairwise merge law, lifted over more inputs
//! with a left fold:
//!
//! | left      | right     | result                   |
//! |-----------|-----------|--------------------------|
//! | `Good(g)` | `Good(h)` | `Good(combine(g, h))`    |
//! | `Good(_)` | `Bad(eb)` | `Bad(eb)`                |
//! | `Bad(ea)` | `Good(_)` | `Bad(ea)`                |
//! | `Bad(ea)` | `Bad(eb)` | `Bad(ea ++ eb)`          |
//!
//! Failures are kept in encounter order and never deduplicated. The one deliberate
//! exception is [`Or::zip`], which keeps only the right-hand failures when both sides
//! are `Bad`.
//!
//! # Core Concepts
//!
//! - **`combined`** (sequence): a container of `Or`s becomes an `Or` of a container
//!   - `Vec<Or<G, Every<E>>>` → `Or<Vec<G>, Every<E>>`
//! - **`validated_by`** (traverse): apply a validating function to each element and
//!   combine the results in the same pass
//! - **`when`**: run every check against a `Good` value and collect all failures
//!
//! # Examples
//!
//! ```
//! use accrue::{every, Or, Every, accumulation::Combinable};
//!
//! let results: Vec<Or<i32, Every<&str>>> = vec![
//!     Or::Good(1),
//!     Or::Bad(every!["two is odd?"]),
//!     Or::Good(3),
//!     Or::Bad(every!["four", "is", "long"]),
//! ];
//!
//! assert_eq!(
//!     results.combined(),
//!     Or::Bad(every!["two is odd?", "four", "is", "long"])
//! );
//! ```
//!
//! ```
//! use accrue::{every, Or, Every, accumulation::validated_by};
//!
//! fn parse_number(s: &str) -> Or<i32, Every<String>> {
//!     s.parse()
//!         .map(Or::Good)
//!         .unwrap_or_else(|_| Or::Bad(every![format!("invalid number: {}", s)]))
//! }
//!
//! let parsed: Or<Vec<i32>, _> = validated_by(vec!["1", "2", "3"], parse_number);
//! assert_eq!(parsed, Or::Good(vec![1, 2, 3]));
//!
//! let parsed: Or<Vec<i32>, _> = validated_by(vec!["1", "x", "y"], parse_number);
//! assert_eq!(
//!     parsed,
//!     Or::Bad(every![
//!         "invalid number: x".to_string(),
//!         "invalid number: y".to_string()
//!     ])
//! );
//! ```

use std::collections::{BTreeSet, HashSet, LinkedList, VecDeque};
use std::hash::{BuildHasher, Hash};

use crate::{Every, Or, Semigroup, Validation};

/// Container adapter used by [`combined`] and [`validated_by`].
///
/// A container takes part in accumulation by providing an empty builder, a way to
/// append one good value, and a final step turning the builder into the container.
///
/// # Example
///
/// ```
/// use accrue::{every, Every, Or, accumulation::{combined, Build}};
///
/// /// Keeps only a running total.
/// #[derive(Debug, PartialEq)]
/// struct Total(i64);
///
/// impl Build<i64> for Total {
///     type Builder = i64;
///
///     fn builder(_size_hint: usize) -> i64 {
///         0
///     }
///
///     fn append(builder: &mut i64, item: i64) {
///         *builder += item;
///     }
///
///     fn finish(builder: i64) -> Self {
///         Total(builder)
///     }
/// }
///
/// let ors: Vec<Or<i64, Every<&str>>> = vec![Or::Good(2), Or::Good(40)];
/// assert_eq!(combined::<_, Total, _, _>(ors), Or::Good(Total(42)));
/// ```
pub trait Build<T>: Sized {
    /// Intermediate state while good values are appended
    type Builder;

    /// Start an empty builder. `size_hint` is a lower bound on the number of appends.
    fn builder(size_hint: usize) -> Self::Builder;

    /// Append one good value.
    fn append(builder: &mut Self::Builder, item: T);

    /// Turn the builder into the finished container.
    fn finish(builder: Self::Builder) -> Self;
}

impl<T> Build<T> for Vec<T> {
    type Builder = Vec<T>;

    fn builder(size_hint: usize) -> Self::Builder {
        Vec::with_capacity(size_hint)
    }

    fn append(builder: &mut Self::Builder, item: T) {
        builder.push(item);
    }

    fn finish(builder: Self::Builder) -> Self {
        builder
    }
}

impl<T> Build<T> for VecDeque<T> {
    type Builder = VecDeque<T>;

    fn builder(size_hint: usize) -> Self::Builder {
        VecDeque::with_capacity(size_hint)
    }

    fn append(builder: &mut Self::Builder, item: T) {
        builder.push_back(item);
    }

    fn finish(builder: Self::Builder) -> Self {
        builder
    }
}

impl<T> Build<T> for LinkedList<T> {
    type Builder = LinkedList<T>;

    fn builder(_size_hint: usize) -> Self::Builder {
        LinkedList::new()
    }

    fn append(builder: &mut Self::Builder, item: T) {
        builder.push_back(item);
    }

    fn finish(builder: Self::Builder) -> Self {
        builder
    }
}

// An Option input yields at most one item, so the last append is the only one.
impl<T> Build<T> for Option<T> {
    type Builder = Option<T>;

    fn builder(_size_hint: usize) -> Self::Builder {
        None
    }

    fn append(builder: &mut Self::Builder, item: T) {
        *builder = Some(item);
    }

    fn finish(builder: Self::Builder) -> Self {
        builder
    }
}

impl<T: Ord> Build<T> for BTreeSet<T> {
    type Builder = BTreeSet<T>;

    fn builder(_size_hint: usize) -> Self::Builder {
        BTreeSet::new()
    }

    fn append(builder: &mut Self::Builder, item: T) {
        builder.insert(item);
    }

    fn finish(builder: Self::Builder) -> Self {
        builder
    }
}

impl<T, S> Build<T> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    type Builder = HashSet<T, S>;

    fn builder(size_hint: usize) -> Self::Builder {
        HashSet::with_capacity_and_hasher(size_hint, S::default())
    }

    fn append(builder: &mut Self::Builder, item: T) {
        builder.insert(item);
    }

    fn finish(builder: Self::Builder) -> Self {
        builder
    }
}

/// Left fold of the pairwise law over a stream of accumulating `Or`s.
fn accumulate<I, C, G, E>(ors: I) -> Or<C, Every<E>>
where
    I: Iterator<Item = Or<G, Every<E>>>,
    C: Build<G>,
{
    let init: Or<C::Builder, Every<E>> = Or::Good(C::builder(ors.size_hint().0));
    let result = ors
        .fold(init, |acc, next| match (acc, next) {
            (Or::Good(mut goods), Or::Good(value)) => {
                C::append(&mut goods, value);
                Or::Good(goods)
            }
            (Or::Good(_), Or::Bad(errors)) => Or::Bad(errors),
            (Or::Bad(errors), Or::Good(_)) => Or::Bad(errors),
            (Or::Bad(earlier), Or::Bad(later)) => Or::Bad(earlier.concat(later)),
        })
        .map(C::finish);

    #[cfg(feature = "tracing")]
    if let Or::Bad(errors) = &result {
        tracing::debug!(errors = errors.len(), "accumulation finished with failures");
    }

    result
}

/// Combine a collection of accumulating `Or`s into one.
///
/// Returns `Good` with every good value, in order, collected into `C` when all inputs
/// are `Good`. Otherwise returns `Bad` with every input's failures concatenated in
/// encounter order. An empty input yields `Good` of an empty container.
///
/// # Examples
///
/// ```
/// use accrue::{every, Every, Or, accumulation::combined};
///
/// let ors: Vec<Or<i32, Every<&str>>> = vec![Or::Good(1), Or::Good(2)];
/// let all: Or<Vec<i32>, _> = combined(ors);
/// assert_eq!(all, Or::Good(vec![1, 2]));
///
/// let ors: Vec<Or<i32, Every<&str>>> = vec![Or::Bad(every!["a"]), Or::Good(2), Or::Bad(every!["b"])];
/// let all: Or<Vec<i32>, _> = combined(ors);
/// assert_eq!(all, Or::Bad(every!["a", "b"]));
/// ```
pub fn combined<I, C, G, E>(ors: I) -> Or<C, Every<E>>
where
    I: IntoIterator<Item = Or<G, Every<E>>>,
    C: Build<G>,
{
    accumulate(ors.into_iter())
}

/// Validate each element with `f` and combine the results in a single pass.
///
/// Equivalent to mapping `f` over `items` and calling [`combined`], without the
/// intermediate collection. `f` is called once per element, in order, even after a
/// failure has been seen.
///
/// # Examples
///
/// ```
/// use accrue::{every, Every, Or, accumulation::validated_by};
///
/// fn positive(x: i32) -> Or<i32, Every<String>> {
///     if x > 0 {
///         Or::Good(x)
///     } else {
///         Or::Bad(every![format!("{} is not positive", x)])
///     }
/// }
///
/// let result: Or<Vec<i32>, _> = validated_by(vec![1, 2, 3], positive);
/// assert_eq!(result, Or::Good(vec![1, 2, 3]));
///
/// let result: Or<Vec<i32>, _> = validated_by(vec![1, -2, -3], positive);
/// assert_eq!(
///     result,
///     Or::Bad(every!["-2 is not positive".to_string(), "-3 is not positive".to_string()])
/// );
/// ```
pub fn validated_by<I, C, G, H, E, F>(items: I, f: F) -> Or<C, Every<E>>
where
    I: IntoIterator<Item = G>,
    F: FnMut(G) -> Or<H, Every<E>>,
    C: Build<H>,
{
    accumulate(items.into_iter().map(f))
}

/// `.combined()` for containers of accumulating `Or`s.
///
/// Implemented for `Vec`, `VecDeque`, `LinkedList`, `Option`, `BTreeSet`, `HashSet`
/// and `Every`. The output container has the same shape as the input. For hash sets
/// the failures follow the set's iteration order.
///
/// # Example
///
/// ```
/// use accrue::{every, Every, Or, accumulation::Combinable};
///
/// let maybe: Option<Or<i32, Every<&str>>> = Some(Or::Bad(every!["nope"]));
/// assert_eq!(maybe.combined(), Or::Bad(every!["nope"]));
///
/// let nothing: Option<Or<i32, Every<&str>>> = None;
/// assert_eq!(nothing.combined(), Or::Good(None));
/// ```
pub trait Combinable<G, E> {
    /// Container of good values produced on success
    type Output;

    /// Fold the contained `Or`s with the pairwise law.
    fn combined(self) -> Or<Self::Output, Every<E>>;
}

/// `.validated_by(f)` for ordered containers of plain values.
///
/// Sets have no impl: `Output<H>` would need `H: Ord` or `H: Hash`, which the trait cannot
/// require. Use the [`validated_by`] free function with a set as the target type instead.
///
/// # Examples
///
/// ```
/// use accrue::{every, Every, Or, accumulation::Validatable};
///
/// let lengths = every!["a", "bb", ""].validated_by(|s: &str| {
///     if s.is_empty() {
///         Or::Bad(every!["empty string"])
///     } else {
///         Or::Good(s.len())
///     }
/// });
/// assert_eq!(lengths, Or::Bad(every!["empty string"]));
/// ```
///
/// ```
/// use std::collections::BTreeSet;
/// use accrue::{Every, Or, accumulation::validated_by};
///
/// let words = BTreeSet::from(["bb", "a", "ccc"]);
/// let lengths: Or<BTreeSet<usize>, Every<&str>> =
///     validated_by(words, |s: &str| Or::Good(s.len()));
/// assert_eq!(lengths, Or::Good(BTreeSet::from([1, 2, 3])));
/// ```
pub trait Validatable<G> {
    /// Container of validated values produced on success
    type Output<H>;

    /// Apply `f` to every element and fold the results with the pairwise law.
    fn validated_by<H, E, F>(self, f: F) -> Or<Self::Output<H>, Every<E>>
    where
        F: FnMut(G) -> Or<H, Every<E>>;
}

macro_rules! impl_sequence_adapters {
    ($($container:ident),+) => {
        $(
            impl<G, E> Combinable<G, E> for $container<Or<G, Every<E>>> {
                type Output = $container<G>;

                fn combined(self) -> Or<Self::Output, Every<E>> {
                    combined(self)
                }
            }

            impl<G> Validatable<G> for $container<G> {
                type Output<H> = $container<H>;

                fn validated_by<H, E, F>(self, f: F) -> Or<Self::Output<H>, Every<E>>
                where
                    F: FnMut(G) -> Or<H, Every<E>>,
                {
                    validated_by(self, f)
                }
            }
        )+
    };
}

impl_sequence_adapters!(Vec, VecDeque, LinkedList, Option);

impl<G: Ord, E: Ord> Combinable<G, E> for BTreeSet<Or<G, Every<E>>> {
    type Output = BTreeSet<G>;

    fn combined(self) -> Or<Self::Output, Every<E>> {
        combined(self)
    }
}

impl<G, E, S> Combinable<G, E> for HashSet<Or<G, Every<E>>, S>
where
    G: Eq + Hash,
    S: BuildHasher + Default,
{
    type Output = HashSet<G, S>;

    fn combined(self) -> Or<Self::Output, Every<E>> {
        combined(self)
    }
}

// An Every of Ors is never empty, so the result is always an Every of goods or of errors.
impl<G, E> Combinable<G, E> for Every<Or<G, Every<E>>> {
    type Output = Every<G>;

    fn combined(self) -> Or<Self::Output, Every<E>> {
        self.validated_by(|or| or)
    }
}

impl<G> Validatable<G> for Every<G> {
    type Output<H> = Every<H>;

    fn validated_by<H, E, F>(self, mut f: F) -> Or<Self::Output<H>, Every<E>>
    where
        F: FnMut(G) -> Or<H, Every<E>>,
    {
        match self {
            Every::One(only) => f(only).map(Every::One),
            Every::Many(first, second, rest) => {
                let capacity = rest.len();
                let init = f(first)
                    .and(f(second))
                    .map(|(a, b)| Every::Many(a, b, Vec::with_capacity(capacity)));
                rest.into_iter().fold(init, |acc, item| {
                    acc.and(f(item)).map(|(goods, value)| goods.append(value))
                })
            }
        }
    }
}

impl<G, B: Semigroup> Or<G, B> {
    /// Pair two `Or`s, merging both `Bad` payloads when both sides failed.
    ///
    /// This is the pairwise law every accumulation in the crate is built from. The left
    /// payload comes first in the merged result.
    ///
    /// # Examples
    ///
    /// ```
    /// use accrue::{every, Every, Or};
    ///
    /// let a: Or<i32, Every<&str>> = Or::Good(1);
    /// let b: Or<&str, Every<&str>> = Or::Good("one");
    /// assert_eq!(a.and(b), Or::Good((1, "one")));
    ///
    /// let a: Or<i32, Every<&str>> = Or::Bad(every!["left"]);
    /// let b: Or<&str, Every<&str>> = Or::Bad(every!["right"]);
    /// assert_eq!(a.and(b), Or::Bad(every!["left", "right"]));
    /// ```
    pub fn and<H>(self, other: Or<H, B>) -> Or<(G, H), B> {
        match (self, other) {
            (Or::Good(a), Or::Good(b)) => Or::Good((a, b)),
            (Or::Good(_), Or::Bad(e)) => Or::Bad(e),
            (Or::Bad(e), Or::Good(_)) => Or::Bad(e),
            (Or::Bad(e1), Or::Bad(e2)) => Or::Bad(e1.combine(e2)),
        }
    }
}

impl<G, E> Or<G, Every<E>> {
    /// Pair two accumulating `Or`s.
    ///
    /// Unlike [`Or::and`], when both sides are `Bad` only the right-hand failures are
    /// kept. A single `Bad` side is returned as is.
    ///
    /// # Examples
    ///
    /// ```
    /// use accrue::{every, Every, Or};
    ///
    /// let a: Or<i32, Every<&str>> = Or::Good(1);
    /// let b: Or<i32, Every<&str>> = Or::Good(2);
    /// assert_eq!(a.zip(b), Or::Good((1, 2)));
    ///
    /// let a: Or<i32, Every<&str>> = Or::Bad(every!["a"]);
    /// let b: Or<i32, Every<&str>> = Or::Bad(every!["b"]);
    /// assert_eq!(a.zip(b), Or::Bad(every!["b"]));
    /// ```
    pub fn zip<H>(self, other: Or<H, Every<E>>) -> Or<(G, H), Every<E>> {
        match (self, other) {
            (Or::Good(g), Or::Good(h)) => Or::Good((g, h)),
            (Or::Good(_), Or::Bad(errors)) => Or::Bad(errors),
            (Or::Bad(errors), Or::Good(_)) => Or::Bad(errors),
            (Or::Bad(_), Or::Bad(errors)) => Or::Bad(errors),
        }
    }

    /// Run every check against a `Good` value and collect all failures.
    ///
    /// Every validator is called, in order, even after one has failed. With no failures
    /// the input `Good` is returned; otherwise `Bad` holds the failures in validator
    /// order. A `Bad` is returned unchanged and no validator is called.
    ///
    /// # Examples
    ///
    /// ```
    /// use accrue::{every, Every, Or, Validation};
    ///
    /// fn is_round(n: &i32) -> Validation<String> {
    ///     Validation::check(n % 10 == 0, || format!("{} was not a round number", n))
    /// }
    ///
    /// fn is_div_by_3(n: &i32) -> Validation<String> {
    ///     Validation::check(n % 3 == 0, || format!("{} was not divisible by 3", n))
    /// }
    ///
    /// let checked = Or::<i32, Every<String>>::Good(4).when([is_round, is_div_by_3]);
    /// assert_eq!(
    ///     checked,
    ///     Or::Bad(every![
    ///         "4 was not a round number".to_string(),
    ///         "4 was not divisible by 3".to_string()
    ///     ])
    /// );
    ///
    /// let checked = Or::<i32, Every<String>>::Good(30).when([is_round, is_div_by_3]);
    /// assert_eq!(checked, Or::Good(30));
    /// ```
    pub fn when<I, V>(self, validators: I) -> Or<G, Every<E>>
    where
        I: IntoIterator<Item = V>,
        V: FnOnce(&G) -> Validation<E>,
    {
        let value = match self {
            Or::Good(value) => value,
            Or::Bad(errors) => return Or::Bad(errors),
        };

        let failures: Vec<E> = validators
            .into_iter()
            .filter_map(|validate| validate(&value).into_error())
            .collect();

        match Every::from_vec(failures) {
            None => Or::Good(value),
            Some(errors) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(failures = errors.len(), "validators rejected good value");
                Or::Bad(errors)
            }
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn acc_or() -> impl Strategy<Value = Or<i32, Every<u8>>> {
        prop_oneof![
            any::<i32>().prop_map(Or::Good),
            prop::collection::vec(any::<u8>(), 1..4)
                .prop_map(|errors| Or::Bad(Every::from_vec_unchecked(errors))),
        ]
    }

    proptest! {
        #[test]
        fn prop_combined_matches_partition(ors in prop::collection::vec(acc_or(), 0..12)) {
            let goods: Vec<i32> = ors.iter().filter_map(|o| o.as_ref().into_good().copied()).collect();
            let errors: Vec<u8> = ors
                .iter()
                .filter_map(|o| o.as_ref().into_bad())
                .flat_map(|e| e.iter().copied())
                .collect();

            let result: Or<Vec<i32>, Every<u8>> = combined(ors);
            match Every::from_vec(errors) {
                None => prop_assert_eq!(result, Or::Good(goods)),
                Some(expected) => prop_assert_eq!(result, Or::Bad(expected)),
            }
        }

        #[test]
        fn prop_every_combined_matches_vec_combined(ors in prop::collection::vec(acc_or(), 1..12)) {
            let as_vec: Or<Vec<i32>, Every<u8>> = combined(ors.clone());
            let as_every = Every::from_vec_unchecked(ors).combined();
            prop_assert_eq!(as_every.map(Every::into_vec), as_vec);
        }

        #[test]
        fn prop_and_is_associative_on_errors(a in acc_or(), b in acc_or(), c in acc_or()) {
            let left = a.clone().and(b.clone()).and(c.clone()).map(|((x, y), z)| (x, y, z));
            let right = a.and(b.and(c)).map(|(x, (y, z))| (x, y, z));
            prop_assert_eq!(left, right);
        }
    }
}
