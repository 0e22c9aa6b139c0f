use rand::{Rng, SeedableRng, rngs::StdRng};

/// Amplitude used when jitter is turned on.
pub const DEFAULT_AMPLITUDE: f64 = 0.1;

/// Cosmetic noise added on top of the chart series.
///
/// Nothing load bearing ever reads from it: metrics and curves are computed
/// without it.
pub struct Jitter {
    rng: StdRng,
    amplitude: f64,
}

impl Jitter {
    /// Creates a new `Jitter` source.
    ///
    /// # Arguments
    /// * `seed` - Seed for reproducible noise, a random one is used when `None`.
    pub fn new(seed: Option<u64>) -> Self {
        Self::with_amplitude(seed, DEFAULT_AMPLITUDE)
    }

    /// Creates a new `Jitter` source with a custom amplitude.
    ///
    /// # Arguments
    /// * `seed` - Seed for reproducible noise, a random one is used when `None`.
    /// * `amplitude` - Samples are drawn uniformly from `[-amplitude, amplitude]`.
    pub fn with_amplitude(seed: Option<u64>, amplitude: f64) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            rng,
            amplitude: amplitude.abs(),
        }
    }

    /// A source that always yields zero.
    pub fn none() -> Self {
        Self::with_amplitude(Some(0), 0.0)
    }

    /// Draws the next noise sample.
    pub fn sample(&mut self) -> f64 {
        if self.amplitude == 0.0 {
            return 0.0;
        }
        self.rng.random_range(-self.amplitude..=self.amplitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_jitter_repeats() {
        let mut a = Jitter::new(Some(7));
        let mut b = Jitter::new(Some(7));
        for _ in 0..20 {
            assert_eq!(a.sample(), b.sample());
        }
    }

    #[test]
    fn samples_stay_within_amplitude() {
        let mut j = Jitter::with_amplitude(Some(3), 0.25);
        for _ in 0..500 {
            assert!(j.sample().abs() <= 0.25);
        }
    }

    #[test]
    fn none_is_silent() {
        let mut j = Jitter::none();
        assert!((0..50).all(|_| j.sample() == 0.0));
    }
}
