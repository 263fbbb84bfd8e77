//! Uniform study-goal sampling without replacement.

use rand::Rng;
use rand::seq::SliceRandom;

/// Outcome of a sampling request.
///
/// `Partial` and `Empty` are informational: the caller warns the user that
/// fewer julgados were returned than requested; neither is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleStatus {
    /// Exactly the requested count was drawn.
    Full,
    /// Fewer entities were available than requested; all were returned.
    Partial,
    /// Nothing was available.
    Empty,
}

/// Draw a study goal of `k` ids, uniformly without replacement.
///
/// With at least `k` ids available, returns exactly `k` distinct ids. With
/// fewer, returns everything flagged [`SampleStatus::Partial`]. The input
/// is never mutated.
pub fn sample_study_goal_with<R: Rng + ?Sized>(
    ids: &[String],
    k: usize,
    rng: &mut R,
) -> (Vec<String>, SampleStatus) {
    if ids.is_empty() {
        return (Vec::new(), SampleStatus::Empty);
    }
    if ids.len() < k {
        return (ids.to_vec(), SampleStatus::Partial);
    }
    let chosen = ids.choose_multiple(rng, k).cloned().collect();
    (chosen, SampleStatus::Full)
}

/// [`sample_study_goal_with`] seeded from the thread RNG: repeated calls
/// are independent draws.
pub fn sample_study_goal(ids: &[String], k: usize) -> (Vec<String>, SampleStatus) {
    sample_study_goal_with(ids, k, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn ids(n: usize) -> Vec<String> {
        (0..n).map(|i| i.to_string()).collect()
    }

    #[test]
    fn full_sample_has_exactly_k_distinct_elements_from_input() {
        let pool = ids(20);
        let mut rng = StdRng::seed_from_u64(7);
        let (sampled, status) = sample_study_goal_with(&pool, 5, &mut rng);

        assert_eq!(status, SampleStatus::Full);
        assert_eq!(sampled.len(), 5);
        let distinct: HashSet<&String> = sampled.iter().collect();
        assert_eq!(distinct.len(), 5);
        assert!(sampled.iter().all(|id| pool.contains(id)));
    }

    #[test]
    fn sampling_everything_is_a_permutation() {
        let pool = ids(8);
        let mut rng = StdRng::seed_from_u64(3);
        let (sampled, status) = sample_study_goal_with(&pool, 8, &mut rng);

        assert_eq!(status, SampleStatus::Full);
        let expected: HashSet<&String> = pool.iter().collect();
        let got: HashSet<&String> = sampled.iter().collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn short_pool_returns_everything_flagged_partial() {
        let pool = ids(3);
        let mut rng = StdRng::seed_from_u64(1);
        let (sampled, status) = sample_study_goal_with(&pool, 10, &mut rng);

        assert_eq!(status, SampleStatus::Partial);
        assert_eq!(sampled, pool);
    }

    #[test]
    fn empty_pool_is_flagged_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        let (sampled, status) = sample_study_goal_with(&[], 5, &mut rng);
        assert!(sampled.is_empty());
        assert_eq!(status, SampleStatus::Empty);
    }

    #[test]
    fn input_is_not_mutated() {
        let pool = ids(10);
        let before = pool.clone();
        let mut rng = StdRng::seed_from_u64(42);
        let _ = sample_study_goal_with(&pool, 4, &mut rng);
        assert_eq!(pool, before);
    }

    #[test]
    fn zero_requested_is_a_full_empty_draw() {
        let pool = ids(4);
        let mut rng = StdRng::seed_from_u64(9);
        let (sampled, status) = sample_study_goal_with(&pool, 0, &mut rng);
        assert!(sampled.is_empty());
        assert_eq!(status, SampleStatus::Full);
    }
}
