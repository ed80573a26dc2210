use std::cmp::Ordering;

use appver_core::{Version, compare_versions};
use proptest::prelude::*;

fn version_string() -> impl Strategy<Value = String> {
    prop::collection::vec(0u32..50, 1..6).prop_map(|segments| {
        segments
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".")
    })
}

proptest! {
    #[test]
    fn reflexive(a in version_string()) {
        prop_assert_eq!(compare_versions(&a, &a), Ordering::Equal);
    }

    #[test]
    fn antisymmetric(a in version_string(), b in version_string()) {
        prop_assert_eq!(compare_versions(&a, &b), compare_versions(&b, &a).reverse());
    }

    #[test]
    fn trailing_zero_padding_is_ignored(a in version_string(), zeros in 1usize..4) {
        let padded = format!("{a}{}", ".0".repeat(zeros));
        prop_assert_eq!(compare_versions(&a, &padded), Ordering::Equal);
    }

    #[test]
    fn transitive(a in version_string(), b in version_string(), c in version_string()) {
        let mut sorted = [a, b, c];
        sorted.sort_by(|x, y| compare_versions(x, y));
        let [low, mid, high] = &sorted;
        prop_assert_ne!(compare_versions(low, mid), Ordering::Greater);
        prop_assert_ne!(compare_versions(mid, high), Ordering::Greater);
        prop_assert_ne!(compare_versions(low, high), Ordering::Greater);
    }

    #[test]
    fn never_panics_on_arbitrary_input(a in ".*", b in ".*") {
        let sign = compare_versions(&a, &b) as i8;
        prop_assert!((-1..=1).contains(&sign));
    }

    #[test]
    fn parsed_version_agrees_with_string_comparator(a in ".{0,24}", b in ".{0,24}") {
        prop_assert_eq!(Version::parse(&a).cmp(&Version::parse(&b)), compare_versions(&a, &b));
    }

    #[test]
    fn numeric_segments_follow_integer_order(a in any::<u64>(), b in any::<u64>()) {
        prop_assert_eq!(compare_versions(&a.to_string(), &b.to_string()), a.cmp(&b));
    }

    #[test]
    fn digit_runs_wider_than_u64_are_larger(small in any::<u64>(), wide in "[1-9][0-9]{20,30}") {
        prop_assert_eq!(
            compare_versions(&format!("1.{wide}"), &format!("1.{small}")),
            Ordering::Greater
        );
        prop_assert_eq!(compare_versions(&wide, &format!("000{wide}")), Ordering::Equal);
    }
}
