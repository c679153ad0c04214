use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::error::ScalarGradError;

/// Bounds used by [`Neuron`](crate::nn::Neuron) when none are given.
pub const DEFAULT_LOW: f64 = -1.0;
pub const DEFAULT_HIGH: f64 = 1.0;

/// Draws `count` samples from `U(low, high)`.
///
/// # Errors
/// `InvalidConfig` unless both bounds are finite and `low < high`.
pub fn uniform<R: Rng + ?Sized>(
    count: usize,
    low: f64,
    high: f64,
    rng: &mut R,
) -> Result<Vec<f64>, ScalarGradError> {
    if !low.is_finite() || !high.is_finite() || low >= high {
        return Err(ScalarGradError::InvalidConfig(format!(
            "uniform init needs finite bounds with low < high, got [{}, {})",
            low, high
        )));
    }
    let dist = Uniform::new(low, high);
    Ok((0..count).map(|_| dist.sample(rng)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_uniform_within_bounds() -> Result<(), ScalarGradError> {
        let mut rng = StdRng::seed_from_u64(7);
        let samples = uniform(1000, -1.0, 1.0, &mut rng)?;
        assert_eq!(samples.len(), 1000);
        assert!(samples.iter().all(|&x| (-1.0..1.0).contains(&x)));
        Ok(())
    }

    #[test]
    fn test_uniform_is_reproducible_with_seed() -> Result<(), ScalarGradError> {
        let a = uniform(5, 0.0, 2.0, &mut StdRng::seed_from_u64(42))?;
        let b = uniform(5, 0.0, 2.0, &mut StdRng::seed_from_u64(42))?;
        assert_eq!(a, b);
        Ok(())
    }

    #[test]
    fn test_uniform_rejects_bad_bounds() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(uniform(1, 1.0, 1.0, &mut rng), Err(ScalarGradError::InvalidConfig(_))));
        assert!(matches!(uniform(1, 2.0, -2.0, &mut rng), Err(ScalarGradError::InvalidConfig(_))));
        assert!(matches!(
            uniform(1, f64::NEG_INFINITY, 0.0, &mut rng),
            Err(ScalarGradError::InvalidConfig(_))
        ));
    }
}
