use thiserror::Error;

/// Errors a prediction request can surface to the user.
///
/// `Display` is the exact message the front end shows; the fields carry the
/// offending input for tests and debugging. Both variants are recovered at
/// the front-end boundary and never propagate past a single request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    /// A text field did not parse as a number.
    #[error("Invalid input. Please enter valid numbers.")]
    Parse { field: &'static str, value: String },

    /// A numeric reading fell outside its documented bound.
    #[error("Values out of range! Please enter valid inputs.")]
    OutOfRange { field: &'static str, value: f64 },
}

impl PredictionError {
    /// Name of the reading field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            PredictionError::Parse { field, .. } | PredictionError::OutOfRange { field, .. } => {
                field
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_renders_fixed_message() {
        let err = PredictionError::Parse {
            field: "humidity",
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid input. Please enter valid numbers.");
        assert_eq!(err.field(), "humidity");
    }

    #[test]
    fn out_of_range_renders_fixed_message() {
        let err = PredictionError::OutOfRange {
            field: "humidity",
            value: 150.0,
        };
        assert_eq!(
            err.to_string(),
            "Values out of range! Please enter valid inputs."
        );
    }
}
