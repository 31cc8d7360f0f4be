// src/selection.rs

use rand::Rng;
use std::path::PathBuf;

/// Picks `min(count, candidates.len())` distinct videos uniformly at random.
/// Every subset of that size is equally likely; the order of the result is random too.
///
/// # Arguments
///
/// * `candidates` - The videos to choose from.
/// * `count` - The maximum number of videos to pick.
/// * `rng` - Source of randomness. `rand::rng()` in normal runs, a seeded RNG in tests.
pub fn sample_videos<R: Rng + ?Sized>(
    candidates: &[PathBuf],
    count: usize,
    rng: &mut R,
) -> Vec<PathBuf> {
    let amount = count.min(candidates.len());
    rand::seq::index::sample(rng, candidates.len(), amount)
        .into_iter()
        .map(|i| candidates[i].clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::{HashMap, HashSet};

    fn candidates(n: usize) -> Vec<PathBuf> {
        (0..n)
            .map(|i| PathBuf::from(format!("/videos/clip{:02}.mp4", i)))
            .collect()
    }

    #[test]
    fn test_sample_size_is_min_of_count_and_candidates() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in [1, 2, 5, 20, 33] {
            let pool = candidates(n);
            for count in [1, 3, 20, 50] {
                let picked = sample_videos(&pool, count, &mut rng);
                assert_eq!(picked.len(), n.min(count), "n={} count={}", n, count);

                let unique: HashSet<_> = picked.iter().collect();
                assert_eq!(unique.len(), picked.len(), "duplicate pick for n={}", n);
                assert!(picked.iter().all(|p| pool.contains(p)));
            }
        }
    }

    #[test]
    fn test_fewer_candidates_than_count_picks_all() {
        let pool = candidates(3);
        let picked = sample_videos(&pool, 20, &mut StdRng::seed_from_u64(1));

        let picked: HashSet<_> = picked.into_iter().collect();
        let expected: HashSet<_> = pool.into_iter().collect();
        assert_eq!(picked, expected);
    }

    #[test]
    fn test_empty_candidates_yield_empty_selection() {
        let picked = sample_videos(&[], 20, &mut StdRng::seed_from_u64(1));
        assert!(picked.is_empty());
    }

    #[test]
    fn test_selection_varies_and_covers_every_file() {
        let pool = candidates(10);
        let mut rng = StdRng::seed_from_u64(42);
        let mut hits: HashMap<PathBuf, usize> = HashMap::new();
        let mut distinct_selections = HashSet::new();

        for _ in 0..2000 {
            let picked = sample_videos(&pool, 3, &mut rng);
            for path in &picked {
                *hits.entry(path.clone()).or_insert(0) += 1;
            }
            let mut key = picked.clone();
            key.sort();
            distinct_selections.insert(key);
        }

        assert!(distinct_selections.len() > 1);
        // Each file is expected 600 times (2000 * 3 / 10).
        for path in &pool {
            let count = hits.get(path).copied().unwrap_or(0);
            assert!(
                (400..=800).contains(&count),
                "{} picked {} times",
                path.display(),
                count
            );
        }
    }
}
