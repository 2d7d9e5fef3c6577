//! Apply a function to the good values of up to 22 accumulating `Or`s
//!
//! [`with_good()`] is the fixed-arity form of accumulation. It takes a tuple of
//! `Or<Ti, Every<E>>` values that may each hold a different good type, and a function
//! taking one argument per element. The function is called once, only when every
//! element is `Good`. Otherwise the result is `Bad` with every element's failures
//! concatenated in argument order.
//!
//! # Examples
//!
//! ```
//! use accrue::{every, with_good, Every, Or};
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
//!         Ok(age) if age <= 130 => Or::Good(age),
//!         _ => Or::Bad(every![format!("\"{}\" is not a valid age", input)]),
//!     }
//! }
//!
//! fn parse_person(name: &str, age: &str) -> Or<Person, Every<String>> {
//!     with_good((parse_name(name), parse_age(age)), |name: String, age: u32| Person { name, age })
//! }
//!
//! assert_eq!(
//!     parse_person("Bridget Jones", "29"),
//!     Or::Good(Person { name: "Bridget Jones".to_string(), age: 29 })
//! );
//! assert_eq!(
//!     parse_person("  ", "-30"),
//!     Or::Bad(every![
//!         "\"  \" is not a valid name".to_string(),
//!         "\"-30\" is not a valid age".to_string()
//!     ])
//! );
//! ```

use crate::{Every, Or};

/// Tuples of accumulating `Or`s that can feed a function of matching arity.
///
/// Implemented for tuples of one to 22 `Or<Ti, Every<E>>` elements, where every element
/// shares the error type `E`.
pub trait WithGood<E, F> {
    /// Return type of the function
    type Output;

    /// Call `f` with every good value, or collect every failure.
    fn with_good(self, f: F) -> Or<Self::Output, Every<E>>;
}

/// Apply `f` to the good values of every `Or` in `ors`.
///
/// See the [module documentation](self) for the full contract.
///
/// # Examples
///
/// ```
/// use accrue::{every, with_good, Every, Or};
///
/// let sum = with_good(
///     (Or::<i32, Every<&str>>::Good(1), Or::<i32, Every<&str>>::Good(2)),
///     |a: i32, b: i32| a + b,
/// );
/// assert_eq!(sum, Or::Good(3));
///
/// let sum = with_good(
///     (Or::<i32, Every<&str>>::Bad(every!["x"]), Or::<i32, Every<&str>>::Bad(every!["y"])),
///     |a: i32, b: i32| a + b,
/// );
/// assert_eq!(sum, Or::Bad(every!["x", "y"]));
/// ```
pub fn with_good<T, E, F>(ors: T, f: F) -> Or<T::Output, Every<E>>
where
    T: WithGood<E, F>,
{
    ors.with_good(f)
}

// Left-nested tuple pattern: `nested_goods!(() a b c)` is `((((), a), b), c)`.
macro_rules! nested_goods {
    ($acc:tt) => {
        $acc
    };
    ($acc:tt $head:ident $($rest:ident)*) => {
        nested_goods!(($acc, $head) $($rest)*)
    };
}

macro_rules! impl_with_good {
    ($($T:ident $g:ident),+) => {
        impl<E, F, R, $($T),+> WithGood<E, F> for ($(Or<$T, Every<E>>,)+)
        where
            F: FnOnce($($T),+) -> R,
        {
            type Output = R;

            fn with_good(self, f: F) -> Or<R, Every<E>> {
                let ($($g,)+) = self;
                let acc: Or<(), Every<E>> = Or::Good(());
                $(
                    let acc = acc.and($g);
                )+
                acc.map(move |goods| {
                    let nested_goods!(() $($g)+) = goods;
                    f($($g),+)
                })
            }
        }
    };
}

impl_with_good!(T1 g1);
impl_with_good!(T1 g1, T2 g2);
impl_with_good!(T1 g1, T2 g2, T3 g3);
impl_with_good!(T1 g1, T2 g2, T3 g3, T4 g4);
impl_with_good!(T1 g1, T2 g2, T3 g3, T4 g4, T5 g5);
impl_with_good!(T1 g1, T2 g2, T3 g3, T4 g4, T5 g5, T6 g6);
impl_with_good!(T1 g1, T2 g2, T3 g3, T4 g4, T5 g5, T6 g6, T7 g7);
impl_with_good!(T1 g1, T2 g2, T3 g3, T4 g4, T5 g5, T6 g6, T7 g7, T8 g8);
impl_with_good!(T1 g1, T2 g2, T3 g3, T4 g4, T5 g5, T6 g6, T7 g7, T8 g8, T9 g9);
impl_with_good!(T1 g1, T2 g2, T3 g3, T4 g4, T5 g5, T6 g6, T7 g7, T8 g8, T9 g9, T10 g10);
impl_with_good!(T1 g1, T2 g2, T3 g3, T4 g4, T5 g5, T6 g6, T7 g7, T8 g8, T9 g9, T10 g10, T11 g11);
impl_with_good!(T1 g1, T2 g2, T3 g3, T4 g4, T5 g5, T6 g6, T7 g7, T8 g8, T9 g9, T10 g10, T11 g11,
    T12 g12);
impl_with_good!(T1 g1, T2 g2, T3 g3, T4 g4, T5 g5, T6 g6, T7 g7, T8 g8, T9 g9, T10 g10, T11 g11,
    T12 g12, T13 g13);
impl_with_good!(T1 g1, T2 g2, T3 g3, T4 g4, T5 g5, T6 g6, T7 g7, T8 g8, T9 g9, T10 g10, T11 g11,
    T12 g12, T13 g13, T14 g14);
impl_with_good!(T1 g1, T2 g2, T3 g3, T4 g4, T5 g5, T6 g6, T7 g7, T8 g8, T9 g9, T10 g10, T11 g11,
    T12 g12, T13 g13, T14 g14, T15 g15);
impl_with_good!(T1 g1, T2 g2, T3 g3, T4 g4, T5 g5, T6 g6, T7 g7, T8 g8, T9 g9, T10 g10, T11 g11,
    T12 g12, T13 g13, T14 g14, T15 g15, T16 g16);
impl_with_good!(T1 g1, T2 g2, T3 g3, T4 g4, T5 g5, T6 g6, T7 g7, T8 g8, T9 g9, T10 g10, T11 g11,
    T12 g12, T13 g13, T14 g14, T15 g15, T16 g16, T17 g17);
impl_with_good!(T1 g1, T2 g2, T3 g3, T4 g4, T5 g5, T6 g6, T7 g7, T8 g8, T9 g9, T10 g10, T11 g11,
    T12 g12, T13 g13, T14 g14, T15 g15, T16 g16, T17 g17, T18 g18);
impl_with_good!(T1 g1, T2 g2, T3 g3, T4 g4, T5 g5, T6 g6, T7 g7, T8 g8, T9 g9, T10 g10, T11 g11,
    T12 g12, T13 g13, T14 g14, T15 g15, T16 g16, T17 g17, T18 g18, T19 g19);
impl_with_good!(T1 g1, T2 g2, T3 g3, T4 g4, T5 g5, T6 g6, T7 g7, T8 g8, T9 g9, T10 g10, T11 g11,
    T12 g12, T13 g13, T14 g14, T15 g15, T16 g16, T17 g17, T18 g18, T19 g19, T20 g20);
impl_with_good!(T1 g1, T2 g2, T3 g3, T4 g4, T5 g5, T6 g6, T7 g7, T8 g8, T9 g9, T10 g10, T11 g11,
    T12 g12, T13 g13, T14 g14, T15 g15, T16 g16, T17 g17, T18 g18, T19 g19, T20 g20, T21 g21);
impl_with_good!(T1 g1, T2 g2, T3 g3, T4 g4, T5 g5, T6 g6, T7 g7, T8 g8, T9 g9, T10 g10, T11 g11,
    T12 g12, T13 g13, T14 g14, T15 g15, T16 g16, T17 g17, T18 g18, T19 g19, T20 g20, T21 g21,
    T22 g22);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::every;
    use std::cell::Cell;

    fn good(x: i32) -> Or<i32, Every<&'static str>> {
        Or::Good(x)
    }

    fn bad(e: &'static str) -> Or<i32, Every<&'static str>> {
        Or::Bad(every![e])
    }

    #[test]
    fn test_single_good() {
        assert_eq!(with_good((good(4),), |a: i32| a * 2), Or::Good(8));
    }

    #[test]
    fn test_single_bad() {
        assert_eq!(with_good((bad("e"),), |a: i32| a * 2), Or::Bad(every!["e"]));
    }

    #[test]
    fn test_two_goods() {
        assert_eq!(with_good((good(1), good(2)), |a: i32, b: i32| a + b), Or::Good(3));
    }

    #[test]
    fn test_good_then_bad() {
        assert_eq!(
            with_good((good(1), bad("x")), |a: i32, b: i32| a + b),
            Or::Bad(every!["x"])
        );
    }

    #[test]
    fn test_two_bads_keep_argument_order() {
        assert_eq!(
            with_good((bad("x"), bad("y")), |a: i32, b: i32| a + b),
            Or::Bad(every!["x", "y"])
        );
    }

    #[test]
    fn test_heterogeneous_good_types() {
        let name: Or<&str, Every<&str>> = Or::Good("Ada");
        let age: Or<u8, Every<&str>> = Or::Good(36);
        let admin: Or<bool, Every<&str>> = Or::Good(true);
        let summary = with_good((name, age, admin), |name: &str, age: u8, admin: bool| {
            format!("{} ({}){}", name, age, if admin { " *" } else { "" })
        });
        assert_eq!(summary, Or::Good("Ada (36) *".to_string()));
    }

    #[test]
    fn test_multi_error_payloads_flatten_in_order() {
        let a: Or<i32, Every<&str>> = Or::Bad(every!["a1", "a2"]);
        let b = good(2);
        let c: Or<i32, Every<&str>> = Or::Bad(every!["c1"]);
        assert_eq!(
            with_good((a, b, c), |a: i32, b: i32, c: i32| a + b + c),
            Or::Bad(every!["a1", "a2", "c1"])
        );
    }

    #[test]
    fn test_function_not_called_on_failure() {
        let calls = Cell::new(0);
        let result = with_good((good(1), bad("x"), good(3)), |a: i32, b: i32, c: i32| {
            calls.set(calls.get() + 1);
            a + b + c
        });
        assert!(result.is_bad());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_function_called_once_on_success() {
        let calls = Cell::new(0);
        let result = with_good(
            (good(1), good(2), good(3), good(4)),
            |a: i32, b: i32, c: i32, d: i32| {
                calls.set(calls.get() + 1);
                [a, b, c, d]
            },
        );
        assert_eq!(result, Or::Good([1, 2, 3, 4]));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_method_form() {
        let result = (good(6), good(7)).with_good(|a: i32, b: i32| a * b);
        assert_eq!(result, Or::Good(42));
    }

    #[test]
    fn test_seven_ary_mixed_keeps_argument_order() {
        let result = with_good(
            (bad("a"), good(2), bad("c"), good(4), good(5), bad("f"), bad("g")),
            |a: i32, b: i32, c: i32, d: i32, e: i32, f: i32, g: i32| a + b + c + d + e + f + g,
        );
        assert_eq!(result, Or::Bad(every!["a", "c", "f", "g"]));
    }

    #[allow(clippy::too_many_arguments)]
    fn collect13(
        a: i32,
        b: i32,
        c: i32,
        d: i32,
        e: i32,
        f: i32,
        g: i32,
        h: i32,
        i: i32,
        j: i32,
        k: i32,
        l: i32,
        m: i32,
    ) -> [i32; 13] {
        [a, b, c, d, e, f, g, h, i, j, k, l, m]
    }

    #[test]
    fn test_thirteen_ary_only_last_bad() {
        let result = with_good(
            (
                good(1),
                good(2),
                good(3),
                good(4),
                good(5),
                good(6),
                good(7),
                good(8),
                good(9),
                good(10),
                good(11),
                good(12),
                bad("m"),
            ),
            collect13,
        );
        assert_eq!(result, Or::Bad(every!["m"]));
    }

    #[allow(clippy::too_many_arguments)]
    fn sum22(
        g1: i32,
        g2: i32,
        g3: i32,
        g4: i32,
        g5: i32,
        g6: i32,
        g7: i32,
        g8: i32,
        g9: i32,
        g10: i32,
        g11: i32,
        g12: i32,
        g13: i32,
        g14: i32,
        g15: i32,
        g16: i32,
        g17: i32,
        g18: i32,
        g19: i32,
        g20: i32,
        g21: i32,
        g22: i32,
    ) -> i32 {
        let low = g1 + g2 + g3 + g4 + g5 + g6 + g7 + g8 + g9 + g10 + g11;
        let high = g12 + g13 + g14 + g15 + g16 + g17 + g18 + g19 + g20 + g21 + g22;
        low + high
    }

    #[test]
    fn test_twenty_two_goods() {
        let result = with_good(
            (
                good(1),
                good(2),
                good(3),
                good(4),
                good(5),
                good(6),
                good(7),
                good(8),
                good(9),
                good(10),
                good(11),
                good(12),
                good(13),
                good(14),
                good(15),
                good(16),
                good(17),
                good(18),
                good(19),
                good(20),
                good(21),
                good(22),
            ),
            sum22,
        );
        assert_eq!(result, Or::Good((1..=22).sum::<i32>()));
    }

    #[test]
    fn test_twenty_two_with_failures() {
        let result = with_good(
            (
                good(1),
                bad("e2"),
                good(3),
                good(4),
                good(5),
                good(6),
                good(7),
                good(8),
                good(9),
                good(10),
                bad("e11"),
                good(12),
                good(13),
                good(14),
                good(15),
                good(16),
                good(17),
                good(18),
                good(19),
                good(20),
                good(21),
                bad("e22"),
            ),
            sum22,
        );
        assert_eq!(result, Or::Bad(every!["e2", "e11", "e22"]));
    }

    // Per arity: all Good calls `f` once with the values in argument order, all Bad
    // concatenates in argument order without calling `f`, a lone Bad at any position is
    // returned unchanged, and alternating Bad/Good keeps only the Bad payloads in order.
    macro_rules! every_arity {
        ($name:ident, $($g:ident $i:literal),+) => {
            #[test]
            fn $name() {
                let names = [$(stringify!($g)),+];

                let calls = Cell::new(0);
                let all_good = with_good(($(good($i),)+), |$($g: i32),+| {
                    calls.set(calls.get() + 1);
                    vec![$($g),+]
                });
                assert_eq!(all_good, Or::Good(vec![$($i),+]));
                assert_eq!(calls.get(), 1);

                let all_bad = with_good(($(bad(stringify!($g)),)+), |$($g: i32),+| {
                    calls.set(calls.get() + 1);
                    vec![$($g),+]
                });
                assert_eq!(all_bad, Or::Bad(Every::from_vec_unchecked(names.to_vec())));
                assert_eq!(calls.get(), 1);

                for position in 1..=names.len() as i32 {
                    let lone_bad = with_good(
                        ($(if $i == position { bad(stringify!($g)) } else { good($i) },)+),
                        |$($g: i32),+| vec![$($g),+],
                    );
                    let expected = names[(position - 1) as usize];
                    assert_eq!(lone_bad, Or::Bad(every![expected]));
                }

                let alternating = with_good(
                    ($(if $i % 2 == 1 { bad(stringify!($g)) } else { good($i) },)+),
                    |$($g: i32),+| vec![$($g),+],
                );
                let odd_names: Vec<&str> = names.iter().step_by(2).copied().collect();
                assert_eq!(alternating, Or::Bad(Every::from_vec_unchecked(odd_names)));
            }
        };
    }

    every_arity!(test_arity_1, g1 1);
    every_arity!(test_arity_2, g1 1, g2 2);
    every_arity!(test_arity_3, g1 1, g2 2, g3 3);
    every_arity!(test_arity_4, g1 1, g2 2, g3 3, g4 4);
    every_arity!(test_arity_5, g1 1, g2 2, g3 3, g4 4, g5 5);
    every_arity!(test_arity_6, g1 1, g2 2, g3 3, g4 4, g5 5, g6 6);
    every_arity!(test_arity_7, g1 1, g2 2, g3 3, g4 4, g5 5, g6 6, g7 7);
    every_arity!(test_arity_8, g1 1, g2 2, g3 3, g4 4, g5 5, g6 6, g7 7, g8 8);
    every_arity!(test_arity_9, g1 1, g2 2, g3 3, g4 4, g5 5, g6 6, g7 7, g8 8, g9 9);
    every_arity!(test_arity_10, g1 1, g2 2, g3 3, g4 4, g5 5, g6 6, g7 7, g8 8, g9 9, g10 10);
    every_arity!(test_arity_11, g1 1, g2 2, g3 3, g4 4, g5 5, g6 6, g7 7, g8 8, g9 9, g10 10,
        g11 11);
    every_arity!(test_arity_12, g1 1, g2 2, g3 3, g4 4, g5 5, g6 6, g7 7, g8 8, g9 9, g10 10,
        g11 11, g12 12);
    every_arity!(test_arity_13, g1 1, g2 2, g3 3, g4 4, g5 5, g6 6, g7 7, g8 8, g9 9, g10 10,
        g11 11, g12 12, g13 13);
    every_arity!(test_arity_14, g1 1, g2 2, g3 3, g4 4, g5 5, g6 6, g7 7, g8 8, g9 9, g10 10,
        g11 11, g12 12, g13 13, g14 14);
    every_arity!(test_arity_15, g1 1, g2 2, g3 3, g4 4, g5 5, g6 6, g7 7, g8 8, g9 9, g10 10,
        g11 11, g12 12, g13 13, g14 14, g15 15);
    every_arity!(test_arity_16, g1 1, g2 2, g3 3, g4 4, g5 5, g6 6, g7 7, g8 8, g9 9, g10 10,
        g11 11, g12 12, g13 13, g14 14, g15 15, g16 16);
    every_arity!(test_arity_17, g1 1, g2 2, g3 3, g4 4, g5 5, g6 6, g7 7, g8 8, g9 9, g10 10,
        g11 11, g12 12, g13 13, g14 14, g15 15, g16 16, g17 17);
    every_arity!(test_arity_18, g1 1, g2 2, g3 3, g4 4, g5 5, g6 6, g7 7, g8 8, g9 9, g10 10,
        g11 11, g12 12, g13 13, g14 14, g15 15, g16 16, g17 17, g18 18);
    every_arity!(test_arity_19, g1 1, g2 2, g3 3, g4 4, g5 5, g6 6, g7 7, g8 8, g9 9, g10 10,
        g11 11, g12 12, g13 13, g14 14, g15 15, g16 16, g17 17, g18 18, g19 19);
    every_arity!(test_arity_20, g1 1, g2 2, g3 3, g4 4, g5 5, g6 6, g7 7, g8 8, g9 9, g10 10,
        g11 11, g12 12, g13 13, g14 14, g15 15, g16 16, g17 17, g18 18, g19 19, g20 20);
    every_arity!(test_arity_21, g1 1, g2 2, g3 3, g4 4, g5 5, g6 6, g7 7, g8 8, g9 9, g10 10,
        g11 11, g12 12, g13 13, g14 14, g15 15, g16 16, g17 17, g18 18, g19 19, g20 20, g21 21);
    every_arity!(test_arity_22, g1 1, g2 2, g3 3, g4 4, g5 5, g6 6, g7 7, g8 8, g9 9, g10 10,
        g11 11, g12 12, g13 13, g14 14, g15 15, g16 16, g17 17, g18 18, g19 19, g20 20, g21 21,
        g22 22);
}
