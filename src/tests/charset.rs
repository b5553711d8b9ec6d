use super::*;

#[test]
fn sets_have_expected_sizes() {
    assert_eq!(DIGITS.len(), 10);
    assert_eq!(UPPERCASE.len(), 26);
    assert_eq!(LOWERCASE.len(), 26);
    assert_eq!(SPECIAL.len(), 33);
}

#[test]
fn unions_match_their_parts() {
    assert_eq!(ALPHA, [UPPERCASE, LOWERCASE].concat());
    assert_eq!(ALPHANUMERIC, [DIGITS, ALPHA].concat());
    assert_eq!(ALL, [ALPHANUMERIC, SPECIAL].concat());
}

#[test]
fn sets_are_printable_ascii() {
    for ch in ALL.chars() {
        assert!(ch.is_ascii(), "non-ascii char {ch:?}");
        assert!(!ch.is_ascii_control(), "control char {ch:?}");
    }
}

#[test]
fn sets_have_no_duplicates() {
    for set in [DIGITS, UPPERCASE, LOWERCASE, SPECIAL, ALL] {
        let mut seen = std::collections::HashSet::new();
        for ch in set.chars() {
            assert!(seen.insert(ch), "duplicate char {ch:?}");
        }
    }
}
