//! Error types for the ACS solver.
//!
//! Every check runs before the optimization loop starts; once a run has been
//! accepted it cannot fail.

use thiserror::Error;

/// Result type alias for solver operations.
pub type AcsResult<T> = Result<T, AcsError>;

/// Errors reported while validating a problem instance or configuration.
#[derive(Debug, Error)]
pub enum AcsError {
    /// A tour needs at least two cities.
    #[error("at least 2 cities are required, got {count}")]
    TooFewCities {
        /// Number of cities supplied.
        count: usize,
    },

    /// The x and y coordinate arrays differ in length.
    #[error("coordinate arrays differ in length: {xs} x-values, {ys} y-values")]
    CoordinateLengthMismatch {
        /// Number of x-coordinates.
        xs: usize,
        /// Number of y-coordinates.
        ys: usize,
    },

    /// A coordinate is NaN or infinite.
    #[error("city {index} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Index of the offending city.
        index: usize,
    },

    /// A city's id differs from its position in the instance.
    #[error("city at position {index} has id {id}; ids must equal positions")]
    CityIdMismatch {
        /// Position in the city slice.
        index: usize,
        /// Id carried by the city.
        id: usize,
    },

    /// An algorithm parameter is outside its valid range.
    #[error("parameter `{name}` = {value} is out of range (expected {expected})")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Supplied value.
        value: f64,
        /// Human-readable valid range.
        expected: &'static str,
    },

    /// All cities share one location, so every tour has zero length.
    #[error("all cities coincide; tour lengths are zero and the initial pheromone is undefined")]
    DegenerateGeometry,

    /// A JSON configuration could not be parsed.
    #[error("configuration parse error: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_too_few_cities() {
        let err = AcsError::TooFewCities { count: 1 };
        assert_eq!(err.to_string(), "at least 2 cities are required, got 1");
    }

    #[test]
    fn test_display_invalid_parameter() {
        let err = AcsError::InvalidParameter {
            name: "alpha",
            value: 1.5,
            expected: "(0, 1)",
        };
        assert!(err.to_string().contains("alpha"));
        assert!(err.to_string().contains("(0, 1)"));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<u32>("not json").expect_err("invalid json");
        let err: AcsError = json_err.into();
        assert!(matches!(err, AcsError::Config(_)));
    }
}
