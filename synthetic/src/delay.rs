use std::time::Duration;

use crate::{generator, params::HyperparameterSet};

/// Shortest simulated training time.
pub const MIN_DELAY: Duration = Duration::from_millis(1500);
/// Longest simulated training time.
pub const MAX_DELAY: Duration = Duration::from_millis(2500);

/// How long the caller should pretend the model is training before showing
/// the result of a run.
///
/// Grows with the fabricated elapsed time but always stays within
/// `[MIN_DELAY, MAX_DELAY)`.
pub fn training_delay(params: &HyperparameterSet) -> Duration {
    let elapsed = generator::elapsed_secs(params).max(0.0);
    let spread = (MAX_DELAY - MIN_DELAY).as_secs_f64();
    MIN_DELAY + Duration::from_secs_f64(spread * elapsed / (elapsed + 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::Algorithm;

    #[test]
    fn delay_stays_in_window() {
        for algorithm in Algorithm::ALL {
            for params in [
                HyperparameterSet::minimums(algorithm),
                HyperparameterSet::defaults(algorithm),
            ] {
                let delay = training_delay(&params);
                assert!(delay >= MIN_DELAY, "{algorithm}: {delay:?}");
                assert!(delay < MAX_DELAY, "{algorithm}: {delay:?}");
            }
        }
    }

    #[test]
    fn bigger_jobs_wait_longer() {
        let small = HyperparameterSet::defaults(Algorithm::XgBoost);
        let mut big = small.clone();
        big.assign("n_estimators=500").unwrap();
        assert!(training_delay(&big) > training_delay(&small));
    }
}
