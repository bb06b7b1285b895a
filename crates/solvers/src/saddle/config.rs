use thiserror::Error;

/// Configuration shared by the saddle-point solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    learning_rate: f64,
    tolerance: f64,
    max_iters: usize,
}

/// Errors that can occur when validating a saddle solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("learning_rate must be finite and positive")]
    LearningRate,

    #[error("tolerance must be finite and positive")]
    Tolerance,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(0.1, 1e-5, 10_000).unwrap()
    }
}

impl Config {
    /// Creates a new config with a validated learning rate and tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if the learning rate or tolerance is non-positive or
    /// non-finite.
    pub fn new(learning_rate: f64, tolerance: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !learning_rate.is_finite() || learning_rate <= 0.0 {
            return Err(ConfigError::LearningRate);
        }
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }

        Ok(Self {
            learning_rate,
            tolerance,
            max_iters,
        })
    }

    /// Creates a config with the customary twisted gradient descent stopping
    /// rule: tolerance `1e-3` and at most 1000 iterations.
    ///
    /// # Errors
    ///
    /// Returns an error if the learning rate is non-positive or non-finite.
    pub fn twisted(learning_rate: f64) -> Result<Self, ConfigError> {
        Self::new(learning_rate, 1e-3, 1000)
    }

    /// Returns the step size η.
    #[must_use]
    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Returns the gradient-norm tolerance τ.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the maximum number of update steps.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}
