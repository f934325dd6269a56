use thiserror::Error;

/// Minimum task text length after trimming, in characters
pub const MIN_TEXT_CHARS: usize = 3;

/// Maximum task text length after trimming, in characters
pub const MAX_TEXT_CHARS: usize = 200;

/// Rejection reasons for task text input. Surfaced synchronously on the
/// form before any mutation is attempted; never logged as a system fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Task description is required")]
    Required,
    #[error("Task must be at least {} characters long", MIN_TEXT_CHARS)]
    TooShort,
    #[error("Task must be less than {} characters", MAX_TEXT_CHARS)]
    TooLong,
}

/// Check task text against the length constraints. Operates on the
/// trimmed input and counts characters, not bytes.
pub fn validate_text(raw: &str) -> Result<(), ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required);
    }

    let chars = trimmed.chars().count();
    if chars < MIN_TEXT_CHARS {
        return Err(ValidationError::TooShort);
    }
    if chars > MAX_TEXT_CHARS {
        return Err(ValidationError::TooLong);
    }

    Ok(())
}
