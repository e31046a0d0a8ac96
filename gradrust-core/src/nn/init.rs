use crate::error::GradRustError;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use rand_distr::Normal;

/// Parameter initialisation scheme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Init {
    /// Uniform over `[low, high)`.
    Uniform { low: f64, high: f64 },
    Normal { mean: f64, std: f64 },
}

impl Default for Init {
    /// Uniform over `[-1, 1)`.
    fn default() -> Self {
        Init::Uniform {
            low: -1.0,
            high: 1.0,
        }
    }
}

impl Init {
    /// Draws `n` samples.
    ///
    /// # Errors
    /// `InvalidConfig` when the distribution parameters are unusable (`low >= high`,
    /// negative or non-finite standard deviation, non-finite bounds).
    pub fn sample<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Vec<f64>, GradRustError> {
        match *self {
            Init::Uniform { low, high } => {
                if !(low.is_finite() && high.is_finite()) || low >= high {
                    return Err(GradRustError::InvalidConfig(format!(
                        "uniform init requires finite low < high, got [{}, {})",
                        low, high
                    )));
                }
                let dist = Uniform::new(low, high);
                Ok((0..n).map(|_| dist.sample(rng)).collect())
            }
            Init::Normal { mean, std } => {
                if !mean.is_finite() {
                    return Err(GradRustError::InvalidConfig(format!(
                        "normal init requires a finite mean, got {}",
                        mean
                    )));
                }
                let dist = Normal::new(mean, std).map_err(|e| {
                    GradRustError::InvalidConfig(format!("normal init (mean {}, std {}): {}", mean, std, e))
                })?;
                Ok((0..n).map(|_| dist.sample(rng)).collect())
            }
        }
    }
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
