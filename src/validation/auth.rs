use garde::Validate;

use crate::error::{AppError, Result};

/// Runs the garde rules of `value`, turning a failed report into
/// `AppError::Validation`.
///
/// # Arguments
///
/// * `value` - The payload to validate.
///
/// # Returns
///
/// A `Result<()>` indicating whether the payload is valid.
pub fn validate_payload<T>(value: &T) -> Result<()>
where
    T: Validate<Context = ()>,
{
    value.validate().map_err(|report| {
        tracing::debug!("❌ Payload rejected: {}", report);
        AppError::from(report)
    })
}

/// Whether a form currently satisfies its rules, i.e. whether its submit
/// action is enabled.
pub fn is_valid<T>(value: &T) -> bool
where
    T: Validate<Context = ()>,
{
    value.validate().is_ok()
}

/// Parses a numeric path identifier, rejecting anything else as a bad request.
pub fn parse_id(raw: &str) -> Result<u64> {
    raw.parse::<u64>()
        .map_err(|_| AppError::BadRequest(format!("Invalid id: {}", raw)))
}
