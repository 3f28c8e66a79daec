//! # Name Collation
//!
//! Entries are listed alphabetically by name, ignoring case and accents:
//! `Évolution` sorts between `adidas` and `Zappos`, not after `Zappos` as a
//! byte comparison would place it.
//!
//! Comparison keys, most significant first:
//!
//! 1. the name with accents removed and special letters spelled out
//!    (`Ø` as `o`, `ß` as `ss`), lowercased;
//! 2. the lowercased name, so accented and plain spellings order stably;
//! 3. the name itself, so the ordering is total and deterministic.

use std::cmp::Ordering;

use crate::fold::fold_name;

/// Compare two entry names for display order.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    fold_name(a)
        .cmp(&fold_name(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

/// Sort items in place by the name returned from `name_of`.
pub fn sort_by_name<T, F>(items: &mut [T], name_of: F)
where
    F: Fn(&T) -> &str,
{
    items.sort_by(|a, b| compare_names(name_of(a), name_of(b)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_case_and_accent_insensitive_order() {
        let mut names = vec!["Zappos", "adidas", "Évolution"];
        sort_by_name(&mut names, |n| *n);
        assert_eq!(names, vec!["adidas", "Évolution", "Zappos"]);
    }

    #[test]
    fn test_case_only_difference_is_not_equal() {
        assert_ne!(compare_names("acme", "Acme"), Ordering::Equal);
        assert_eq!(compare_names("Acme", "Acme"), Ordering::Equal);
    }

    #[test]
    fn test_accent_ties_broken_deterministically() {
        let mut forward = vec!["Evo", "Évo"];
        let mut backward = vec!["Évo", "Evo"];
        sort_by_name(&mut forward, |n| *n);
        sort_by_name(&mut backward, |n| *n);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_multi_word_names() {
        let mut names = vec!["New Balance", "Naturalizer", "Munro"];
        sort_by_name(&mut names, |n| *n);
        assert_eq!(names, vec!["Munro", "Naturalizer", "New Balance"]);
    }

    #[test]
    fn test_undecomposable_letters_sort_among_ascii() {
        let mut names = vec!["Zappos", "Østerberg", "Nike"];
        sort_by_name(&mut names, |n| *n);
        assert_eq!(names, vec!["Nike", "Østerberg", "Zappos"]);

        let mut names = vec!["Zeta", "Æther", "Straße", "Łukasz", "Bravo"];
        sort_by_name(&mut names, |n| *n);
        assert_eq!(names, vec!["Æther", "Bravo", "Łukasz", "Straße", "Zeta"]);
    }

    proptest! {
        #[test]
        fn prop_order_is_antisymmetric(a in "\\PC{0,20}", b in "\\PC{0,20}") {
            prop_assert_eq!(compare_names(&a, &b), compare_names(&b, &a).reverse());
        }

        #[test]
        fn prop_only_identical_names_are_equal(a in "\\PC{0,20}", b in "\\PC{0,20}") {
            prop_assert_eq!(compare_names(&a, &b) == Ordering::Equal, a == b);
        }

        #[test]
        fn prop_case_does_not_decide_order(a in "[A-Za-z ]{1,20}", b in "[A-Za-z ]{1,20}") {
            prop_assume!(a.to_lowercase() != b.to_lowercase());
            prop_assert_eq!(
                compare_names(&a, &b),
                compare_names(&a.to_lowercase(), &b.to_uppercase())
            );
        }
    }
}
