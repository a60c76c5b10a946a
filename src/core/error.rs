use thiserror::Error;

/// Errors from the strict parsing boundary of the calculation engine.
///
/// The calculators themselves are infallible; errors only arise when raw
/// category codes are parsed strictly instead of taking the permissive
/// zero-rate default.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VatError {
    /// A VAT category code not in the STANDARD/REDUCED/ZERO/EXEMPT set.
    #[error("unknown VAT category '{0}'")]
    UnknownVatCategory(String),

    /// A vehicle category code not in the car/van/motorcycle/bike set.
    #[error("unknown vehicle category '{0}'")]
    UnknownVehicleCategory(String),

    /// One or more draft validation rules failed.
    #[error("validation failed: {0}")]
    Validation(String),
}

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot/index path to the invalid field (e.g. "lineItems[2].quantity").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl VatError {
    /// Collapse a list of validation errors into a single [`VatError::Validation`].
    pub fn from_validation_errors(errors: &[ValidationError]) -> Self {
        let msg = errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        Self::Validation(msg)
    }
}
