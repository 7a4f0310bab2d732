use rand::Rng;

/// Uniform random permutation of `0..n` (Fisher–Yates).
pub fn shuffle(n: usize) -> Vec<usize> {
    shuffle_with(n, &mut rand::thread_rng())
}

pub fn shuffle_with<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut order: Vec<usize> = (0..n).collect();
    // Ranges are empty for n < 2, so the rng is never touched.
    for j in (1..n).rev() {
        let r = rng.gen_range(0..=j);
        order.swap(j, r);
    }
    order
}

/// True when `order` holds every index of `0..n` exactly once.
pub fn is_permutation(order: &[usize], n: usize) -> bool {
    if order.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &idx in order {
        match seen.get_mut(idx) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permutation_check_rejects_duplicates_and_out_of_range() {
        assert!(is_permutation(&[2, 0, 1], 3));
        assert!(!is_permutation(&[0, 0, 1], 3));
        assert!(!is_permutation(&[0, 1, 3], 3));
        assert!(!is_permutation(&[0, 1], 3));
        assert!(is_permutation(&[], 0));
    }
}
