use randomex::{charset, random, StringGen};

// Successive full-class strings from the thread-local source should not
// repeat; 16 characters over 95 candidates makes a collision absurd.
#[test]
fn successive_strings_differ() {
    let mut previous = String::new();
    for _ in 0..100 {
        let next = random(16);
        assert_ne!(previous, next);
        previous = next;
    }
}

#[test]
fn random_draws_from_the_union_of_all_classes() {
    let pass = random(64);
    assert_eq!(pass.len(), 64);
    assert!(pass.chars().all(|c| charset::ALL.contains(c)));
}

#[test]
fn owned_generators_are_independent() {
    let mut a = StringGen::new();
    let mut b = StringGen::new();
    assert_eq!(a.random(16).len(), 16);
    assert_eq!(b.random(16).len(), 16);
}
