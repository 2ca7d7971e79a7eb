use crate::error::{AppError, AppResult};
use rand::Rng;
use rand::seq::SliceRandom;

/// Shuffles tried before giving up on a draw
pub const MAX_ATTEMPTS: u32 = 100;

/// Returns a shuffled copy of `participants` in which no position holds the
/// same value as the input at that position.
///
/// Rejection sampling over fair shuffles, capped at [`MAX_ATTEMPTS`]. Names are
/// compared by value, so inputs made only of repeated names can never pass and
/// end in `DerangementUnattainable`.
pub fn generate_derangement<T, R>(participants: &[T], rng: &mut R) -> AppResult<Vec<T>>
where
    T: Clone + PartialEq,
    R: Rng + ?Sized,
{
    let mut shuffled = participants.to_vec();

    for _ in 0..MAX_ATTEMPTS {
        shuffled.shuffle(rng);
        if !has_fixed_point(participants, &shuffled) {
            return Ok(shuffled);
        }
    }

    Err(AppError::DerangementUnattainable {
        attempts: MAX_ATTEMPTS,
    })
}

fn has_fixed_point<T: PartialEq>(original: &[T], permutation: &[T]) -> bool {
    original.iter().zip(permutation).any(|(a, b)| a == b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn sorted(mut v: Vec<String>) -> Vec<String> {
        v.sort();
        v
    }

    #[test]
    fn test_three_names() {
        let input = names(&["Alice", "Bob", "Carol"]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let out = generate_derangement(&input, &mut rng).unwrap();
            assert!(!has_fixed_point(&input, &out));
            assert_eq!(sorted(out), sorted(input.clone()));
        }
    }

    #[test]
    fn test_input_is_untouched() {
        let input = names(&["Alice", "Bob", "Carol", "Dave"]);
        let before = input.clone();
        let mut rng = StdRng::seed_from_u64(1);
        let _ = generate_derangement(&input, &mut rng).unwrap();
        assert_eq!(input, before);
    }

    #[test]
    fn test_identical_names_exhaust_attempts() {
        let input = names(&["Sam", "Sam", "Sam"]);
        let mut rng = StdRng::seed_from_u64(3);
        let err = generate_derangement(&input, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            AppError::DerangementUnattainable { attempts: MAX_ATTEMPTS }
        ));
    }

    #[test]
    fn test_three_names_reach_both_derangements() {
        let input = names(&["Alice", "Bob", "Carol"]);
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(generate_derangement(&input, &mut rng).unwrap());
        }
        // [B, C, A] and [C, A, B]
        assert_eq!(seen.len(), 2);
    }

    proptest! {
        #[test]
        fn prop_distinct_participants_always_deranged(n in 3usize..40, seed in any::<u64>()) {
            let input: Vec<String> = (0..n).map(|i| format!("participant-{i}")).collect();
            let mut rng = StdRng::seed_from_u64(seed);
            let out = generate_derangement(&input, &mut rng).unwrap();

            prop_assert_eq!(out.len(), input.len());
            for (k, receiver) in out.iter().enumerate() {
                prop_assert_ne!(receiver, &input[k]);
            }
            prop_assert_eq!(sorted(out), sorted(input));
        }
    }
}
