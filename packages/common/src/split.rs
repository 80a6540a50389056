use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::error::ScoringError;

/// Row indices of the two partitions produced by [`train_test_split`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainTestSplit {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

/// Shuffle `0..records` with a seeded RNG and hold out `ceil(records * test_ratio)`
/// indices for testing.
///
/// The same `(records, test_ratio, seed)` always yields the same partitions.
pub fn train_test_split(
    records: usize,
    test_ratio: f64,
    seed: u64,
) -> Result<TrainTestSplit, ScoringError> {
    if !(test_ratio > 0.0 && test_ratio < 1.0) {
        return Err(ScoringError::InvalidRatio(test_ratio));
    }

    let test_len = (records as f64 * test_ratio).ceil() as usize;
    let train_len = records.saturating_sub(test_len);
    if test_len == 0 || train_len == 0 {
        return Err(ScoringError::InsufficientData {
            records,
            train: train_len,
            test: test_len,
        });
    }

    let mut indices: Vec<usize> = (0..records).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let train = indices.split_off(test_len);
    Ok(TrainTestSplit {
        train,
        test: indices,
    })
}
