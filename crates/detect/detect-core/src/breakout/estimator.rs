//! EDM-X breakout estimation.
//!
//! Implements the E-Divisive with Medians estimator over a fixed window,
//! with a permutation test for significance. See "Leveraging Cloud Data to
//! Mitigate User Experience from 'Breaking Bad'" by James et al.
//! (https://arxiv.org/abs/1411.7955).

use rand::seq::SliceRandom;
use rand::Rng;

use detect_spi::{DetectError, Result};

use crate::breakout::running_median::RunningMedian;

/// Outcome of one EDM-X estimation over a window of samples.
#[derive(Debug, Clone, PartialEq)]
pub struct EdmxEstimate {
    /// Index of the estimated breakout within the window. `None` when no
    /// split produced a positive statistic, as happens for a constant
    /// series.
    pub location: Option<usize>,
    /// Energy distance between the pre- and post-breakout segments.
    pub energy_distance: f64,
    /// Permutation-test p-value for the energy distance.
    pub p_value: f64,
    /// Median of the pre-breakout segment.
    pub pre_median: f64,
    /// Median of the post-breakout segment.
    pub post_median: f64,
}

/// Best split found by scanning the window.
#[derive(Debug, Clone, Copy)]
struct SplitCandidate {
    location: Option<usize>,
    stat: f64,
    pre_median: f64,
    post_median: f64,
}

/// Runs EDM-X on the given window.
///
/// The window is unit-scaled before estimation so the energy-distance
/// statistic is comparable across metrics. `delta` is the minimum segment
/// size on either side of a candidate split, so the window must hold at
/// least `2 * delta` samples.
pub fn estimate<R: Rng>(
    data: &[f64],
    delta: usize,
    num_perms: usize,
    rng: &mut R,
) -> Result<EdmxEstimate> {
    if delta == 0 {
        return Err(DetectError::invalid_parameter(
            "delta",
            "must be greater than 0",
        ));
    }
    if data.len() < 2 * delta {
        return Err(DetectError::invalid_parameter(
            "data",
            format!("must hold at least 2 * delta ({}) samples", 2 * delta),
        ));
    }

    let scaled = unit_scale(data);
    let best = best_split(&scaled, delta);
    let p_value = estimate_p_value(&scaled, delta, num_perms, best.stat, rng);

    Ok(EdmxEstimate {
        location: best.location,
        energy_distance: best.stat,
        p_value,
        pre_median: best.pre_median,
        post_median: best.post_median,
    })
}

/// Scales values into [0, 1]. A constant series maps to all zeros.
fn unit_scale(data: &[f64]) -> Vec<f64> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &value in data {
        min = min.min(value);
        max = max.max(value);
    }
    let range = max - min;
    let divisor = if range == 0.0 { 1.0 } else { range };
    data.iter().map(|&value| (value - min) / divisor).collect()
}

/// Scans every admissible split of the window and keeps the one with the
/// largest energy-distance statistic.
///
/// The left median grows incrementally as the split point advances; the
/// right median is rebuilt per split point and grows as the right edge
/// advances. The initial best statistic is the smallest positive double, so
/// a window whose every split has zero statistic reports no location.
fn best_split(data: &[f64], delta: usize) -> SplitCandidate {
    let n = data.len();
    let mut best = SplitCandidate {
        location: None,
        stat: f64::MIN_POSITIVE,
        pre_median: 0.0,
        post_median: 0.0,
    };

    let mut left = RunningMedian::new();
    for &value in &data[..delta - 1] {
        left.add(value);
    }
    for i in delta..=(n - delta) {
        left.add(data[i - 1]);
        let pre_median = match left.median() {
            Some(median) => median,
            None => continue,
        };

        let mut right = RunningMedian::new();
        for &value in &data[i..i + delta - 1] {
            right.add(value);
        }
        for j in (i + delta)..=n {
            right.add(data[j - 1]);
            let post_median = match right.median() {
                Some(median) => median,
                None => continue,
            };

            let diff = pre_median - post_median;
            let stat = diff * diff * (i as f64) * ((j - i) as f64) / (j as f64);
            if stat > best.stat {
                best = SplitCandidate {
                    location: Some(i),
                    stat,
                    pre_median,
                    post_median,
                };
            }
        }
    }

    best
}

/// Fraction of shuffled windows whose best statistic reaches the observed
/// one. The denominator counts the unshuffled window as one arrangement.
fn estimate_p_value<R: Rng>(
    data: &[f64],
    delta: usize,
    num_perms: usize,
    test_stat: f64,
    rng: &mut R,
) -> f64 {
    let mut perm = data.to_vec();
    let mut num_greater = 0usize;

    for _ in 0..num_perms {
        perm.shuffle(rng);
        let candidate = best_split(&perm, delta);
        if candidate.stat >= test_stat {
            num_greater += 1;
        }
    }

    num_greater as f64 / (num_perms + 1) as f64
}
