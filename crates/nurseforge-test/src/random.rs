//! Reproducible random schedules.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generates a 0/1 schedule where each bit is set with probability one half.
pub fn random_schedule(len: usize, seed: u64) -> Vec<u8> {
    random_schedule_with_density(len, 0.5, seed)
}

/// Generates a 0/1 schedule where each bit is set with probability `density`.
///
/// # Panics
///
/// Panics if `density` is outside `[0, 1]`.
pub fn random_schedule_with_density(len: usize, density: f64, seed: u64) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| u8::from(rng.random_bool(density))).collect()
}

/// Returns a random ordering of `0..staff_count`.
pub fn random_permutation(staff_count: usize, seed: u64) -> Vec<usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut order: Vec<usize> = (0..staff_count).collect();
    order.shuffle(&mut rng);
    order
}

/// Reorders the staff chunks of a flat schedule.
///
/// Chunk `i` of the result is chunk `order[i]` of the input.
pub fn permute_staff(schedule: &[u8], slots_per_staff: usize, order: &[usize]) -> Vec<u8> {
    let chunks: Vec<&[u8]> = schedule.chunks(slots_per_staff).collect();
    order
        .iter()
        .flat_map(|&i| chunks[i].iter().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_schedule() {
        assert_eq!(random_schedule(63, 7), random_schedule(63, 7));
        assert_ne!(random_schedule(63, 7), random_schedule(63, 8));
    }

    #[test]
    fn test_density_extremes() {
        assert!(random_schedule_with_density(50, 0.0, 1)
            .iter()
            .all(|&bit| bit == 0));
        assert!(random_schedule_with_density(50, 1.0, 1)
            .iter()
            .all(|&bit| bit == 1));
    }

    #[test]
    fn test_permutation_covers_all_staff() {
        let mut order = random_permutation(10, 3);
        order.sort_unstable();
        assert_eq!(order, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_permute_staff_moves_chunks() {
        let schedule = [1, 1, 2, 2, 3, 3];
        assert_eq!(permute_staff(&schedule, 2, &[2, 0, 1]), [3, 3, 1, 1, 2, 2]);
    }
}
