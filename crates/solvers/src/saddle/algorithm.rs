use std::{fmt, str::FromStr};

use thiserror::Error;

/// The update rules available to [`SaddlePoint`](super::SaddlePoint).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Simultaneous gradient descent in `x` and ascent in `y`.
    ///
    /// See [`gradient_descent_ascent`](super::gradient_descent_ascent).
    GradientDescentAscent,

    /// Explicit twisted gradient descent (ETGD).
    ///
    /// See [`explicit_twisted`](super::explicit_twisted).
    ExplicitTwisted,

    /// Implicit twisted gradient descent (ITGD). Requires a Hessian.
    ///
    /// See [`implicit_twisted`](super::implicit_twisted).
    ImplicitTwisted,
}

/// Errors from parsing an [`Algorithm`] selector.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectorError {
    #[error("unknown algorithm `{0}`")]
    Unknown(String),

    /// The selector names an update rule that has no implementation.
    #[error("algorithm `{0}` is not implemented")]
    Unimplemented(String),
}

impl Algorithm {
    /// All algorithms, in declaration order.
    pub const ALL: [Self; 3] = [
        Self::GradientDescentAscent,
        Self::ExplicitTwisted,
        Self::ImplicitTwisted,
    ];

    /// Returns the canonical selector name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::GradientDescentAscent => "gradient_descent",
            Self::ExplicitTwisted => "explicit_twisted_gradient_descent",
            Self::ImplicitTwisted => "implicit_twisted_gradient_descent",
        }
    }

    /// Returns `true` if the update needs second derivatives.
    #[must_use]
    pub fn requires_hessian(self) -> bool {
        matches!(self, Self::ImplicitTwisted)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gradient_descent" | "gda" => Ok(Self::GradientDescentAscent),
            "explicit_twisted_gradient_descent" | "etgd" => Ok(Self::ExplicitTwisted),
            "implicit_twisted_gradient_descent" | "itgd" => Ok(Self::ImplicitTwisted),
            // Placeholder names that never had an update rule behind them.
            "twisted_gradient_descent" | "other_algorithm" => {
                Err(SelectorError::Unimplemented(s.to_owned()))
            }
            other => Err(SelectorError::Unknown(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_names() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>(), Ok(algorithm));
        }
    }

    #[test]
    fn parses_short_names() {
        assert_eq!("gda".parse(), Ok(Algorithm::GradientDescentAscent));
        assert_eq!("etgd".parse(), Ok(Algorithm::ExplicitTwisted));
        assert_eq!("itgd".parse(), Ok(Algorithm::ImplicitTwisted));
    }

    #[test]
    fn placeholders_are_unimplemented() {
        assert_eq!(
            "twisted_gradient_descent".parse::<Algorithm>(),
            Err(SelectorError::Unimplemented(
                "twisted_gradient_descent".into()
            ))
        );
        assert_eq!(
            "other_algorithm".parse::<Algorithm>(),
            Err(SelectorError::Unimplemented("other_algorithm".into()))
        );
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(
            "newton".parse::<Algorithm>(),
            Err(SelectorError::Unknown("newton".into()))
        );
        assert_eq!(
            "".parse::<Algorithm>(),
            Err(SelectorError::Unknown(String::new()))
        );
    }

    #[test]
    fn only_implicit_needs_hessian() {
        assert!(!Algorithm::GradientDescentAscent.requires_hessian());
        assert!(!Algorithm::ExplicitTwisted.requires_hessian());
        assert!(Algorithm::ImplicitTwisted.requires_hessian());
    }

    #[test]
    fn displays_canonical_name() {
        assert_eq!(Algorithm::ExplicitTwisted.to_string(), "explicit_twisted_gradient_descent");
    }
}
