//! Non-empty, ordered failure collection
//!
//! This module provides [`Every<E>`], the payload carried by an accumulating
//! [`Or`](crate::Or). An `Every` is built from one of two closed variants:
//!
//! - [`Every::One`] holds exactly one element
//! - [`Every::Many`] holds two or more, with the first two stored separately
//!
//! There is no variant with zero elements, so an empty failure list cannot be written down.
//! Concatenating two `Every`s always yields another `Every`; operations that may drop
//! elements, such as [`Every::filter`], return a plain `Vec` instead.
//!
//! # Examples
//!
//! ```
//! use accrue::{every, Every};
//!
//! let errors = every!["missing name", "bad email"];
//! assert_eq!(errors.len(), 2);
//! assert_eq!(errors.head(), &"missing name");
//!
//! let more = errors.concat(Every::one("age out of range"));
//! assert_eq!(more.to_vec(), vec!["missing name", "bad email", "age out of range"]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::{Chain, Once};
use std::ops::{Add, Index};

use crate::Semigroup;

/// An ordered sequence guaranteed to contain at least one element.
///
/// `Many(first, second, rest)` is the only encoding of a sequence of length two or more,
/// so structural equality is sequence equality. Ordering is lexicographic over the
/// elements.
///
/// # Example
///
/// ```
/// use accrue::Every;
///
/// let single = Every::one(1);
/// let several = Every::many(1, 2, vec![3, 4]);
///
/// assert_eq!(single.len(), 1);
/// assert_eq!(several.len(), 4);
/// assert_eq!(several.last(), &4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Every<E> {
    /// Exactly one element
    One(E),
    /// Two or more elements: the first, the second, and the remainder
    Many(E, E, Vec<E>),
}

/// Borrowing iterator over an [`Every`], in order.
pub type Iter<'a, E> =
    Chain<Chain<Once<&'a E>, std::option::IntoIter<&'a E>>, std::slice::Iter<'a, E>>;

/// Error returned when an `Every` is requested from an empty collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyError;

impl fmt::Display for EmptyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot build an Every from an empty collection")
    }
}

impl std::error::Error for EmptyError {}

impl<E> Every<E> {
    /// Create an `Every` holding a single element.
    ///
    /// # Example
    ///
    /// ```
    /// use accrue::Every;
    ///
    /// let e = Every::one("boom");
    /// assert_eq!(e.len(), 1);
    /// ```
    #[inline]
    pub fn one(element: E) -> Self {
        Every::One(element)
    }

    /// Create an `Every` holding two or more elements.
    ///
    /// # Example
    ///
    /// ```
    /// use accrue::Every;
    ///
    /// let e = Every::many("a", "b", vec!["c"]);
    /// assert_eq!(e.to_vec(), vec!["a", "b", "c"]);
    /// ```
    #[inline]
    pub fn many(first: E, second: E, rest: Vec<E>) -> Self {
        Every::Many(first, second, rest)
    }

    /// Try to build an `Every` from a `Vec`.
    ///
    /// Returns `None` if the vector is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use accrue::Every;
    ///
    /// assert_eq!(Every::from_vec(vec![1, 2]), Some(Every::many(1, 2, vec![])));
    /// assert_eq!(Every::from_vec(Vec::<i32>::new()), None);
    /// ```
    pub fn from_vec(vec: Vec<E>) -> Option<Self> {
        let mut items = vec.into_iter();
        let first = items.next()?;
        Some(match items.next() {
            None => Every::One(first),
            Some(second) => Every::Many(first, second, items.collect()),
        })
    }

    /// Build an `Every` from a `Vec` the caller knows to be non-empty.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    ///
    /// ```should_panic
    /// use accrue::Every;
    ///
    /// let _ = Every::from_vec_unchecked(Vec::<i32>::new());
    /// ```
    pub fn from_vec_unchecked(vec: Vec<E>) -> Self {
        Self::from_vec(vec).expect("Every::from_vec_unchecked called on empty Vec")
    }

    /// First element (always present).
    pub fn head(&self) -> &E {
        match self {
            Every::One(e) | Every::Many(e, _, _) => e,
        }
    }

    /// Last element (always present).
    ///
    /// # Example
    ///
    /// ```
    /// use accrue::Every;
    ///
    /// assert_eq!(Every::one(7).last(), &7);
    /// assert_eq!(Every::many(1, 2, vec![3]).last(), &3);
    /// ```
    pub fn last(&self) -> &E {
        match self {
            Every::One(e) => e,
            Every::Many(_, second, rest) => rest.last().unwrap_or(second),
        }
    }

    /// Number of elements. Always >= 1.
    pub fn len(&self) -> usize {
        match self {
            Every::One(_) => 1,
            Every::Many(_, _, rest) => 2 + rest.len(),
        }
    }

    /// Always `false`; present so generic code written against sequences reads naturally.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Element at `index`, or `None` when out of bounds.
    pub fn get(&self, index: usize) -> Option<&E> {
        match (self, index) {
            (Every::One(e), 0) | (Every::Many(e, _, _), 0) => Some(e),
            (Every::Many(_, second, _), 1) => Some(second),
            (Every::Many(_, _, rest), i) => rest.get(i - 2),
            (Every::One(_), _) => None,
        }
    }

    /// Iterate over the elements in order.
    ///
    /// # Example
    ///
    /// ```
    /// use accrue::Every;
    ///
    /// let total: i32 = Every::many(1, 2, vec![3]).iter().sum();
    /// assert_eq!(total, 6);
    /// ```
    pub fn iter(&self) -> Iter<'_, E> {
        let (head, second, rest): (&E, Option<&E>, &[E]) = match self {
            Every::One(e) => (e, None, &[]),
            Every::Many(first, second, rest) => (first, Some(second), rest.as_slice()),
        };
        std::iter::once(head).chain(second).chain(rest.iter())
    }

    /// Whether any element equals `element`.
    pub fn contains(&self, element: &E) -> bool
    where
        E: PartialEq,
    {
        self.iter().any(|e| e == element)
    }

    /// Map a function over all elements. The result has the same length.
    ///
    /// # Example
    ///
    /// ```
    /// use accrue::Every;
    ///
    /// let lengths = Every::many("a", "bcd", vec![]).map(str::len);
    /// assert_eq!(lengths, Every::many(1, 3, vec![]));
    /// ```
    pub fn map<U, F>(self, mut f: F) -> Every<U>
    where
        F: FnMut(E) -> U,
    {
        match self {
            Every::One(e) => Every::One(f(e)),
            Every::Many(first, second, rest) => {
                let first = f(first);
                let second = f(second);
                Every::Many(first, second, rest.into_iter().map(f).collect())
            }
        }
    }

    /// Map each element to an `Every` and concatenate the results in order.
    ///
    /// # Example
    ///
    /// ```
    /// use accrue::Every;
    ///
    /// let doubled = Every::many(1, 2, vec![]).flat_map(|x| Every::many(x, x, vec![]));
    /// assert_eq!(doubled.to_vec(), vec![1, 1, 2, 2]);
    /// ```
    pub fn flat_map<U, F>(self, mut f: F) -> Every<U>
    where
        F: FnMut(E) -> Every<U>,
    {
        match self {
            Every::One(e) => f(e),
            Every::Many(first, second, rest) => {
                let init = f(first).concat(f(second));
                rest.into_iter().fold(init, |acc, e| acc.concat(f(e)))
            }
        }
    }

    /// Keep the elements matching `predicate`.
    ///
    /// Filtering can remove every element, so this returns a possibly-empty `Vec`
    /// rather than another `Every`.
    ///
    /// # Example
    ///
    /// ```
    /// use accrue::Every;
    ///
    /// let evens = Every::many(1, 2, vec![3, 4]).filter(|x| x % 2 == 0);
    /// assert_eq!(evens, vec![2, 4]);
    ///
    /// let none = Every::one(1).filter(|x| x % 2 == 0);
    /// assert!(none.is_empty());
    /// ```
    pub fn filter<F>(self, predicate: F) -> Vec<E>
    where
        F: FnMut(&E) -> bool,
    {
        self.into_iter().filter(predicate).collect()
    }

    /// Left fold over the elements.
    pub fn fold<B, F>(self, init: B, f: F) -> B
    where
        F: FnMut(B, E) -> B,
    {
        self.into_iter().fold(init, f)
    }

    /// Reduce the elements with `f`. Total, since there is always a first element.
    ///
    /// # Example
    ///
    /// ```
    /// use accrue::Every;
    ///
    /// assert_eq!(Every::many(1, 2, vec![3]).reduce(|a, b| a + b), 6);
    /// assert_eq!(Every::one(5).reduce(|a, b| a + b), 5);
    /// ```
    pub fn reduce<F>(self, mut f: F) -> E
    where
        F: FnMut(E, E) -> E,
    {
        match self {
            Every::One(e) => e,
            Every::Many(first, second, rest) => {
                let init = f(first, second);
                rest.into_iter().fold(init, f)
            }
        }
    }

    /// Largest element; the last one wins on ties.
    pub fn max(&self) -> &E
    where
        E: Ord,
    {
        self.iter()
            .skip(1)
            .fold(self.head(), |best, e| if e >= best { e } else { best })
    }

    /// Smallest element; the first one wins on ties.
    pub fn min(&self) -> &E
    where
        E: Ord,
    {
        self.iter()
            .skip(1)
            .fold(self.head(), |best, e| if e < best { e } else { best })
    }

    /// Reverse the order of the elements.
    ///
    /// # Example
    ///
    /// ```
    /// use accrue::Every;
    ///
    /// assert_eq!(Every::many(1, 2, vec![3, 4]).reverse().to_vec(), vec![4, 3, 2, 1]);
    /// ```
    pub fn reverse(self) -> Self {
        match self {
            Every::One(e) => Every::One(e),
            Every::Many(first, second, mut rest) => match rest.pop() {
                None => Every::Many(second, first, Vec::new()),
                Some(last) => {
                    rest.reverse();
                    rest.push(second);
                    rest.push(first);
                    Self::cons(last, rest)
                }
            },
        }
    }

    /// Drop repeated elements, keeping the first occurrence of each.
    ///
    /// The first element always survives, so the result is still an `Every`.
    ///
    /// # Example
    ///
    /// ```
    /// use accrue::Every;
    ///
    /// let unique = Every::many("a", "b", vec!["a", "c", "b"]).distinct();
    /// assert_eq!(unique.to_vec(), vec!["a", "b", "c"]);
    /// ```
    pub fn distinct(self) -> Self
    where
        E: PartialEq,
    {
        let (head, tail) = self.into_head_tail();
        let mut kept: Vec<E> = Vec::with_capacity(tail.len());
        for e in tail {
            if e != head && !kept.contains(&e) {
                kept.push(e);
            }
        }
        Self::cons(head, kept)
    }

    /// Concatenate `other` after `self`.
    ///
    /// The result length is the sum of both lengths; nothing is reordered or dropped.
    ///
    /// # Example
    ///
    /// ```
    /// use accrue::Every;
    ///
    /// let all = Every::one("x").concat(Every::many("y", "x", vec![]));
    /// assert_eq!(all.to_vec(), vec!["x", "y", "x"]);
    /// ```
    pub fn concat(self, other: Every<E>) -> Self {
        match self {
            Every::One(first) => match other {
                Every::One(second) => Every::Many(first, second, Vec::new()),
                Every::Many(second, third, rest) => {
                    let mut tail = Vec::with_capacity(rest.len() + 1);
                    tail.push(third);
                    tail.extend(rest);
                    Every::Many(first, second, tail)
                }
            },
            Every::Many(first, second, mut rest) => {
                rest.extend(other);
                Every::Many(first, second, rest)
            }
        }
    }

    /// Add one element at the end.
    pub fn append(self, element: E) -> Self {
        match self {
            Every::One(first) => Every::Many(first, element, Vec::new()),
            Every::Many(first, second, mut rest) => {
                rest.push(element);
                Every::Many(first, second, rest)
            }
        }
    }

    /// Add one element at the front.
    pub fn prepend(self, element: E) -> Self {
        match self {
            Every::One(first) => Every::Many(element, first, Vec::new()),
            Every::Many(first, second, mut rest) => {
                rest.insert(0, second);
                Every::Many(element, first, rest)
            }
        }
    }

    /// Copy the elements into a `Vec`.
    pub fn to_vec(&self) -> Vec<E>
    where
        E: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Convert into a `Vec`, preserving order.
    pub fn into_vec(self) -> Vec<E> {
        match self {
            Every::One(e) => vec![e],
            Every::Many(first, second, rest) => {
                let mut vec = Vec::with_capacity(rest.len() + 2);
                vec.push(first);
                vec.push(second);
                vec.extend(rest);
                vec
            }
        }
    }

    fn into_head_tail(self) -> (E, Vec<E>) {
        match self {
            Every::One(e) => (e, Vec::new()),
            Every::Many(first, second, mut rest) => {
                rest.insert(0, second);
                (first, rest)
            }
        }
    }

    fn cons(head: E, mut tail: Vec<E>) -> Self {
        if tail.is_empty() {
            Every::One(head)
        } else {
            let second = tail.remove(0);
            Every::Many(head, second, tail)
        }
    }
}

/// Build an [`Every`] from one or more expressions.
///
/// There is no zero-argument form.
///
/// # Example
///
/// ```
/// use accrue::{every, Every};
///
/// assert_eq!(every![1], Every::One(1));
/// assert_eq!(every![1, 2, 3], Every::Many(1, 2, vec![3]));
/// ```
#[macro_export]
macro_rules! every {
    ($head:expr $(,)?) => {
        $crate::Every::One($head)
    };
    ($first:expr, $second:expr $(, $rest:expr)* $(,)?) => {
        $crate::Every::Many($first, $second, ::std::vec![$($rest),*])
    };
}

impl<E> Semigroup for Every<E> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        self.concat(other)
    }
}

impl<E> Add for Every<E> {
    type Output = Every<E>;

    fn add(self, other: Self) -> Self::Output {
        self.concat(other)
    }
}

impl<E: PartialOrd> PartialOrd for Every<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<E: Ord> Ord for Every<E> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<E> Index<usize> for Every<E> {
    type Output = E;

    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Some(e) => e,
            None => panic!(
                "index out of bounds: the len is {} but the index is {}",
                self.len(),
                index
            ),
        }
    }
}

impl<E> IntoIterator for Every<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, E> IntoIterator for &'a Every<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E> TryFrom<Vec<E>> for Every<E> {
    type Error = EmptyError;

    fn try_from(vec: Vec<E>) -> Result<Self, Self::Error> {
        Every::from_vec(vec).ok_or(EmptyError)
    }
}

impl<E> From<Every<E>> for Vec<E> {
    fn from(every: Every<E>) -> Self {
        every.into_vec()
    }
}
