//! Errors reported by the quadrature routines.

use thiserror::Error;

/// The error type for every fallible operation in `gridquad`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuadratureError {
    /// An argument is outside the domain the routine accepts, e.g. a
    /// subdivision count that is not a positive integer.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// A `Result` alias with [`QuadratureError`] as the error type.
pub type Result<T> = std::result::Result<T, QuadratureError>;

/// Checks that `n` subdivisions per axis describe a non-empty grid.
pub(crate) fn check_precision(n: usize) -> Result<()> {
    if n == 0 {
        return Err(QuadratureError::InvalidArgument(
            "precision must be a positive integer".to_string(),
        ));
    }
    Ok(())
}

/// Converts a signed subdivision count, as received from C or a command
/// line, into the unsigned count used by the quadrature routines.
///
/// Every value `<= 0` is rejected with [`QuadratureError::InvalidArgument`].
pub fn precision_from_signed(n: i64) -> Result<usize> {
    if n <= 0 {
        return Err(QuadratureError::InvalidArgument(format!(
            "precision must be a positive integer, got {n}"
        )));
    }
    usize::try_from(n).map_err(|_| {
        QuadratureError::InvalidArgument(format!("precision {n} does not fit in usize"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_precision_is_rejected() {
        assert!(matches!(
            check_precision(0),
            Err(QuadratureError::InvalidArgument(_))
        ));
        assert_eq!(check_precision(1), Ok(()));
    }

    #[test]
    fn test_signed_precision() {
        assert_eq!(precision_from_signed(100), Ok(100));
        for n in [0, -1, -100, i64::MIN] {
            assert!(
                matches!(
                    precision_from_signed(n),
                    Err(QuadratureError::InvalidArgument(_))
                ),
                "precision {n} should be rejected"
            );
        }
    }

    #[test]
    fn test_error_message() {
        let err = precision_from_signed(-3).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid argument: precision must be a positive integer, got -3"
        );
    }
}
