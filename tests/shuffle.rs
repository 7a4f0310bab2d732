use std::collections::HashMap;

use rand::SeedableRng;
use rand::rngs::StdRng;

use player_guesser::shuffle::{is_permutation, shuffle, shuffle_with};

#[test]
fn shuffle_is_a_permutation_for_all_small_sizes() {
    for n in 0..50 {
        let order = shuffle(n);
        assert_eq!(order.len(), n);
        assert!(is_permutation(&order, n), "n={n} order={order:?}");
    }
}

#[test]
fn degenerate_sizes_are_trivial() {
    assert!(shuffle(0).is_empty());
    assert_eq!(shuffle(1), vec![0]);
}

#[test]
fn seeded_shuffles_are_reproducible() {
    let a = shuffle_with(20, &mut StdRng::seed_from_u64(7));
    let b = shuffle_with(20, &mut StdRng::seed_from_u64(7));
    assert_eq!(a, b);
    assert!(is_permutation(&a, 20));
}

#[test]
fn three_items_hit_all_six_orders_evenly() {
    const RUNS: usize = 60_000;
    let mut rng = StdRng::seed_from_u64(42);
    let mut counts: HashMap<Vec<usize>, usize> = HashMap::new();
    for _ in 0..RUNS {
        *counts.entry(shuffle_with(3, &mut rng)).or_default() += 1;
    }

    assert_eq!(counts.len(), 6);
    let expected = RUNS / 6;
    for (order, count) in &counts {
        let diff = count.abs_diff(expected);
        assert!(
            diff < expected / 10,
            "order {order:?} seen {count} times, expected about {expected}"
        );
    }
}
