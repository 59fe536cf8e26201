//! Stochastic wait durations
//!
//! One draw from N(mean, stddev²), optionally clamped to a floor. Without a
//! floor the raw draw is returned and may be negative; the scheduler treats
//! non-positive waits as zero-length sleeps (see `Scheduler::wait_secs`).

use crate::stochastic::Stochastic;

/// Draw one wait duration in seconds.
///
/// With `floor` the result is `max(draw, floor)`; without it the draw is
/// returned unclamped.
pub fn sample<S: Stochastic>(source: &mut S, mean: f64, stddev: f64, floor: Option<f64>) -> f64 {
    let draw = mean + stddev * source.standard_normal();
    match floor {
        Some(min) => draw.max(min),
        None => draw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stochastic::RngSource;

    #[test]
    fn test_floored_sample_never_goes_below_floor() {
        let mut source = RngSource::seeded(1);
        for _ in 0..10_000 {
            let wait = sample(&mut source, 2.0, 1.0, Some(0.0));
            assert!(wait >= 0.0, "floored draw went negative: {wait}");
        }
    }

    #[test]
    fn test_unfloored_sample_matches_distribution() {
        let mut source = RngSource::seeded(2);
        let trials = 10_000;

        let draws: Vec<f64> = (0..trials)
            .map(|_| sample(&mut source, 10.0, 3.0, None))
            .collect();

        let mean = draws.iter().sum::<f64>() / trials as f64;
        let variance =
            draws.iter().map(|d| (d - mean).powi(2)).sum::<f64>() / (trials - 1) as f64;
        let stddev = variance.sqrt();

        assert!((9.85..10.15).contains(&mean), "sample mean {mean}");
        assert!((2.85..3.15).contains(&stddev), "sample stddev {stddev}");
    }

    #[test]
    fn test_unfloored_sample_can_be_negative() {
        let mut source = RngSource::seeded(3);
        let negative = (0..1_000).any(|_| sample(&mut source, 0.0, 1.0, None) < 0.0);
        assert!(negative, "expected negative draws for a zero-mean normal");
    }
}
