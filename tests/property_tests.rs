//! Property-based tests for the step-sorter invariants.
//!
//! Validated properties:
//! 1. Running either stepper to completion sorts the sequence in the
//!    requested direction and preserves the multiset of values.
//! 2. Bubble sort performs exactly n(n-1)/2 advances (comparisons) and at
//!    most that many swap-suspensions, regardless of the data.
//! 3. Value generation respects its bounds and count.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sortviz::model::{
    generate_values, Algorithm, Direction, GenerationParams, SortStepper, StepOutcome,
};

/// Drive a stepper over `values` until Done, returning (advances, swaps).
fn run_to_done(stepper: &mut SortStepper, values: &mut [u32]) -> (usize, usize) {
    let mut advances = 0;
    let mut swaps = 0;
    loop {
        match stepper.step(values) {
            StepOutcome::Done => return (advances, swaps),
            StepOutcome::Swapped { .. } => {
                advances += 1;
                swaps += 1;
            }
            StepOutcome::Compared { .. } => advances += 1,
        }
    }
}

fn sorted_for(direction: Direction, values: &[u32]) -> bool {
    match direction {
        Direction::Ascending => values.windows(2).all(|w| w[0] <= w[1]),
        Direction::Descending => values.windows(2).all(|w| w[0] >= w[1]),
    }
}

fn is_permutation(original: &[u32], result: &[u32]) -> bool {
    let mut a = original.to_vec();
    let mut b = result.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

proptest! {
    #[test]
    fn bubble_sorts_and_permutes(
        values in prop::collection::vec(0u32..=100, 0..60),
        descending in any::<bool>(),
    ) {
        let direction = if descending { Direction::Descending } else { Direction::Ascending };
        let mut data = values.clone();
        let mut stepper = SortStepper::new(Algorithm::Bubble, data.len(), direction);
        run_to_done(&mut stepper, &mut data);
        prop_assert!(sorted_for(direction, &data));
        prop_assert!(is_permutation(&values, &data));
    }

    #[test]
    fn insertion_sorts_and_permutes(
        values in prop::collection::vec(0u32..=100, 0..60),
        descending in any::<bool>(),
    ) {
        let direction = if descending { Direction::Descending } else { Direction::Ascending };
        let mut data = values.clone();
        let mut stepper = SortStepper::new(Algorithm::Insertion, data.len(), direction);
        run_to_done(&mut stepper, &mut data);
        prop_assert!(sorted_for(direction, &data));
        prop_assert!(is_permutation(&values, &data));
    }

    #[test]
    fn bubble_advances_exactly_n_choose_2(
        values in prop::collection::vec(0u32..=100, 0..60),
    ) {
        let n = values.len();
        let mut data = values;
        let mut stepper = SortStepper::new(Algorithm::Bubble, n, Direction::Ascending);
        let (advances, swaps) = run_to_done(&mut stepper, &mut data);
        let bound = n.saturating_sub(1) * n / 2;
        prop_assert_eq!(advances, bound, "every inner-loop comparison is one advance");
        prop_assert!(swaps <= bound);
    }

    #[test]
    fn insertion_swaps_stay_within_n_choose_2(
        values in prop::collection::vec(0u32..=100, 0..60),
    ) {
        let n = values.len();
        let mut data = values;
        let mut stepper = SortStepper::new(Algorithm::Insertion, n, Direction::Ascending);
        let (_, swaps) = run_to_done(&mut stepper, &mut data);
        prop_assert!(swaps <= n.saturating_sub(1) * n / 2);
    }

    #[test]
    fn sorting_twice_is_idempotent(
        values in prop::collection::vec(0u32..=100, 2..40),
    ) {
        let mut data = values;
        let mut first = SortStepper::new(Algorithm::Bubble, data.len(), Direction::Ascending);
        run_to_done(&mut first, &mut data);
        let sorted = data.clone();
        let mut second = SortStepper::new(Algorithm::Bubble, data.len(), Direction::Ascending);
        let (_, swaps) = run_to_done(&mut second, &mut data);
        prop_assert_eq!(swaps, 0, "a sorted sequence admits no swaps");
        prop_assert_eq!(data, sorted);
    }

    #[test]
    fn generation_respects_count_and_bounds(
        count in 1usize..200,
        min in 0u32..50,
        span in 0u32..100,
        seed in any::<u64>(),
    ) {
        let max = min + span;
        let params = GenerationParams::new(count, min, max).expect("valid params");
        let mut rng = StdRng::seed_from_u64(seed);
        let values = generate_values(&params, &mut rng);
        prop_assert_eq!(values.len(), count);
        prop_assert!(values.iter().all(|&v| v >= min && v <= max));
    }
}
