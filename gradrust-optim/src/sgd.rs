// gradrust-optim/src/sgd.rs

use crate::Optimizer;
use gradrust_core::{GradRustError, Value};
use log::{debug, warn};

/// Hyperparameters for [`Sgd`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SgdConfig {
    /// Learning rate.
    pub lr: f64,
    /// Momentum factor, `0.0` disables the velocity buffers.
    pub momentum: f64,
    /// L2 penalty added to each gradient as `weight_decay * p`.
    pub weight_decay: f64,
}

impl Default for SgdConfig {
    fn default() -> Self {
        SgdConfig {
            lr: 0.01,
            momentum: 0.0,
            weight_decay: 0.0,
        }
    }
}

impl SgdConfig {
    pub fn new(lr: f64) -> Self {
        SgdConfig {
            lr,
            ..Default::default()
        }
    }

    pub fn with_momentum(mut self, momentum: f64) -> Self {
        self.momentum = momentum;
        self
    }

    pub fn with_weight_decay(mut self, weight_decay: f64) -> Self {
        self.weight_decay = weight_decay;
        self
    }

    fn validate(&self) -> Result<(), GradRustError> {
        if !(self.lr.is_finite() && self.lr > 0.0) {
            return Err(GradRustError::InvalidConfig(format!(
                "SGD learning rate must be positive and finite, got {}",
                self.lr
            )));
        }
        if !(0.0..1.0).contains(&self.momentum) {
            return Err(GradRustError::InvalidConfig(format!(
                "SGD momentum must be in [0, 1), got {}",
                self.momentum
            )));
        }
        if !(self.weight_decay.is_finite() && self.weight_decay >= 0.0) {
            return Err(GradRustError::InvalidConfig(format!(
                "SGD weight decay must be non-negative, got {}",
                self.weight_decay
            )));
        }
        Ok(())
    }
}

/// Implements stochastic gradient descent (optionally with momentum).
///
/// Updates each parameter `p` according to the rule:
/// `g = grad(p) + weight_decay * p`
/// `v = momentum * v + g`
/// `p = p - lr * v`
#[derive(Debug)]
pub struct Sgd {
    params: Vec<Value>,
    config: SgdConfig,
    // One velocity per parameter, same order as `params`.
    velocity: Vec<f64>,
    steps: u64,
}

impl Sgd {
    /// Creates a new SGD optimizer over `params`.
    ///
    /// # Errors
    /// `InvalidConfig` if the learning rate, momentum or weight decay is out of range.
    pub fn new(params: Vec<Value>, config: SgdConfig) -> Result<Self, GradRustError> {
        config.validate()?;
        let velocity = vec![0.0; params.len()];
        Ok(Sgd {
            params,
            config,
            velocity,
            steps: 0,
        })
    }

    pub fn config(&self) -> &SgdConfig {
        &self.config
    }

    pub fn set_lr(&mut self, lr: f64) -> Result<(), GradRustError> {
        let config = SgdConfig { lr, ..self.config };
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Number of completed calls to [`Optimizer::step`].
    pub fn steps(&self) -> u64 {
        self.steps
    }
}

impl Optimizer for Sgd {
    /// Updates every parameter, or none of them: all handles are checked and all new
    /// values computed before the first write, so a stale or non-leaf parameter fails
    /// the step without leaving the others half-updated.
    fn step(&mut self) -> Result<(), GradRustError> {
        let SgdConfig {
            lr,
            momentum,
            weight_decay,
        } = self.config;

        let mut updates = Vec::with_capacity(self.params.len());
        for (index, (param, &velocity)) in self.params.iter().zip(self.velocity.iter()).enumerate() {
            if !param.op()?.is_leaf() {
                return Err(GradRustError::NotALeaf {
                    index: param.id().index(),
                });
            }
            let data = param.try_data()?;
            let mut d_p = param.try_grad()?;
            if !d_p.is_finite() {
                warn!(
                    "SGD step {}: skipping parameter {} with non-finite gradient {}",
                    self.steps, index, d_p
                );
                continue;
            }

            if weight_decay != 0.0 {
                d_p += weight_decay * data;
            }
            let mut new_velocity = velocity;
            if momentum != 0.0 {
                new_velocity = momentum * velocity + d_p;
                d_p = new_velocity;
            }
            updates.push((index, data - lr * d_p, new_velocity));
        }

        for (index, value, velocity) in updates {
            self.params[index].set_data(value)?;
            self.velocity[index] = velocity;
        }

        self.steps += 1;
        debug!(
            "SGD step {} updated {} parameters (lr={})",
            self.steps,
            self.params.len(),
            lr
        );
        Ok(())
    }

    fn params(&self) -> &[Value] {
        &self.params
    }
}
