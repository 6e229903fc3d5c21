//! Domain error types.
//!
//! These errors represent rejected query parameters. They are raised before
//! any file is touched and are distinct from lookup and IO errors.

use super::{InvalidStationPrefix, InvalidTrainNumber, InvalidWagonNumber};

/// Errors from validating a section query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error(transparent)]
    Station(#[from] InvalidStationPrefix),

    #[error(transparent)]
    Train(#[from] InvalidTrainNumber),

    #[error(transparent)]
    Wagon(#[from] InvalidWagonNumber),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = QueryError::from(InvalidStationPrefix);
        assert_eq!(err.to_string(), "Invalid station shortcode");

        let err = QueryError::from(InvalidTrainNumber);
        assert_eq!(err.to_string(), "Invalid train Number");

        let err = QueryError::from(InvalidWagonNumber);
        assert_eq!(err.to_string(), "Invalid number");
    }
}
