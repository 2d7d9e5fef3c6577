//! Property-based tests for accumulation

use accrue::{combined, validated_by, with_good, Combinable, Every, Or, Validation};
use proptest::prelude::*;

fn acc_or() -> impl Strategy<Value = Or<i32, Every<String>>> {
    prop_oneof![
        any::<i32>().prop_map(Or::Good),
        prop::collection::vec("[a-z]{1,4}", 1..4)
            .prop_map(|errors| Or::Bad(Every::from_vec(errors).unwrap())),
    ]
}

fn errors_of(ors: &[Or<i32, Every<String>>]) -> Vec<String> {
    ors.iter()
        .filter_map(|or| or.as_ref().into_bad())
        .flat_map(|errors| errors.iter().cloned())
        .collect()
}

proptest! {
    #[test]
    fn prop_every_is_never_empty(elements in prop::collection::vec(any::<u8>(), 0..20)) {
        let expected_len = elements.len();
        match Every::from_vec(elements) {
            None => prop_assert_eq!(expected_len, 0),
            Some(every) => {
                prop_assert!(every.len() >= 1);
                prop_assert_eq!(every.len(), expected_len);
            }
        }
    }

    #[test]
    fn prop_concat_keeps_order_and_length(
        a in prop::collection::vec(any::<u8>(), 1..10),
        b in prop::collection::vec(any::<u8>(), 1..10),
    ) {
        let left = Every::from_vec(a.clone()).unwrap();
        let right = Every::from_vec(b.clone()).unwrap();
        let joined = left.concat(right);

        let mut expected = a;
        expected.extend(b);
        prop_assert_eq!(joined.into_vec(), expected);
    }

    #[test]
    fn prop_combined_is_good_iff_all_good(ors in prop::collection::vec(acc_or(), 0..16)) {
        let all_good = ors.iter().all(Or::is_good);
        let result: Or<Vec<i32>, Every<String>> = combined(ors);
        prop_assert_eq!(result.is_good(), all_good);
    }

    #[test]
    fn prop_combined_errors_are_concatenation(ors in prop::collection::vec(acc_or(), 1..16)) {
        let expected = errors_of(&ors);
        let result = ors.combined();
        if let Or::Bad(errors) = result {
            prop_assert_eq!(errors.into_vec(), expected);
        } else {
            prop_assert!(expected.is_empty());
        }
    }

    #[test]
    fn prop_singleton_combined_is_identity(or in acc_or()) {
        let result = vec![or.clone()].combined();
        prop_assert_eq!(result, or.map(|g| vec![g]));
    }

    #[test]
    fn prop_validated_by_equals_map_then_combined(values in prop::collection::vec(any::<i16>(), 0..16)) {
        let check = |v: i16| -> Or<i16, Every<String>> {
            if v % 3 == 0 {
                Or::Bad(Every::one(format!("{} divisible by 3", v)))
            } else {
                Or::Good(v)
            }
        };
        let fused: Or<Vec<i16>, Every<String>> = validated_by(values.clone(), check);
        let staged: Or<Vec<i16>, Every<String>> = combined(values.into_iter().map(check));
        prop_assert_eq!(fused, staged);
    }

    #[test]
    fn prop_with_good_errors_follow_argument_order(a in acc_or(), b in acc_or(), c in acc_or(), d in acc_or()) {
        let inputs = vec![a.clone(), b.clone(), c.clone(), d.clone()];
        let expected_errors = errors_of(&inputs);
        let result = with_good((a, b, c, d), |a: i32, b: i32, c: i32, d: i32| (a, b, c, d));
        match result {
            Or::Good((a, b, c, d)) => {
                prop_assert!(expected_errors.is_empty());
                prop_assert_eq!(vec![a, b, c, d], inputs.into_iter().map(Or::unwrap_good).collect::<Vec<_>>());
            }
            Or::Bad(errors) => prop_assert_eq!(errors.into_vec(), expected_errors),
        }
    }

    #[test]
    fn prop_when_collects_failures_in_validator_order(value in any::<i32>(), limits in prop::collection::vec(any::<i32>(), 0..8)) {
        let validators: Vec<Box<dyn Fn(&i32) -> Validation<String>>> = limits
            .iter()
            .map(|&limit| -> Box<dyn Fn(&i32) -> Validation<String>> {
                Box::new(move |v: &i32| Validation::check(*v <= limit, || format!("over {}", limit)))
            })
            .collect();
        let expected: Vec<String> = limits
            .iter()
            .filter(|&&limit| value > limit)
            .map(|limit| format!("over {}", limit))
            .collect();

        let result = Or::<i32, Every<String>>::Good(value).when(validators);
        match Every::from_vec(expected) {
            None => prop_assert_eq!(result, Or::Good(value)),
            Some(errors) => prop_assert_eq!(result, Or::Bad(errors)),
        }
    }

    #[test]
    fn prop_zip_double_bad_is_right(left in acc_or(), right in acc_or()) {
        let zipped = left.clone().zip(right.clone());
        match (left, right) {
            (Or::Good(a), Or::Good(b)) => prop_assert_eq!(zipped, Or::Good((a, b))),
            (_, Or::Bad(errors)) => prop_assert_eq!(zipped, Or::Bad(errors)),
            (Or::Bad(errors), Or::Good(_)) => prop_assert_eq!(zipped, Or::Bad(errors)),
        }
    }
}
