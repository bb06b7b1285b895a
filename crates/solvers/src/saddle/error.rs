use std::error::Error as StdError;

use saddle_core::Point;

use super::{Algorithm, SelectorError};

/// Errors that can occur during a saddle-point solve.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("problem error: {0}")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),

    /// `J + η·H` could not be inverted during an implicit update.
    #[error("singular system J + ηH at iteration {iter}, point {point}")]
    SingularSystem { iter: usize, point: Point },

    #[error("{0} requires a Hessian")]
    HessianRequired(Algorithm),

    #[error("invalid algorithm selector: {0}")]
    Selector(#[from] SelectorError),
}

impl Error {
    pub(crate) fn problem<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Problem(Box::new(err))
    }
}
