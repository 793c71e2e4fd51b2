//! Input parsing and validation for disk scheduling.
//!
//! The algorithms trust their input. This module is the gate in front of
//! them: it turns request text into tracks and checks that every request
//! and the head lie within `0..device_size`. Detects:
//! - Blank or non-integer request text
//! - Negative values
//! - A zero device size
//! - An empty request list
//! - Requests or head outside the device

use thiserror::Error;

use crate::models::{DeviceSize, Track};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// Request text parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input contained no values.
    #[error("request list is empty; enter one or more comma-separated integers")]
    Empty,
    /// A piece was not an integer (or did not fit a track number).
    #[error("invalid request value: '{0}'; use only integers separated by commas")]
    InvalidValue(String),
    /// A piece was a negative integer.
    #[error("requests must be non-negative integers (got {0})")]
    Negative(i64),
}

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Device has no tracks.
    ZeroDeviceSize,
    /// No requests were given.
    EmptyRequests,
    /// A request is `>= device_size`.
    RequestOutOfRange,
    /// The head is `>= device_size`.
    HeadOutOfRange,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Parses comma-separated request text into tracks.
///
/// Whitespace around values and empty pieces (e.g. a trailing comma) are
/// ignored. Fails on the first bad piece.
///
/// # Example
/// ```
/// use u_disk_schedule::validation::parse_requests;
///
/// assert_eq!(parse_requests("98, 183, 37,").unwrap(), vec![98, 183, 37]);
/// assert!(parse_requests("1, x").is_err());
/// ```
pub fn parse_requests(input: &str) -> Result<Vec<Track>, ParseError> {
    let mut requests = Vec::new();

    for piece in input.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let value: i64 = piece
            .parse()
            .map_err(|_| ParseError::InvalidValue(piece.to_string()))?;
        if value < 0 {
            return Err(ParseError::Negative(value));
        }
        let track =
            Track::try_from(value).map_err(|_| ParseError::InvalidValue(piece.to_string()))?;
        requests.push(track);
    }

    if requests.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(requests)
}

/// Validates a scheduling input.
///
/// Checks:
/// 1. `device_size > 0`
/// 2. At least one request
/// 3. Every request `< device_size`
/// 4. `head < device_size`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    requests: &[Track],
    head: Track,
    device_size: DeviceSize,
) -> ValidationResult {
    let mut errors = Vec::new();

    if device_size == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroDeviceSize,
            "device size must be at least 1",
        ));
    }

    if requests.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyRequests,
            "request list is empty",
        ));
    }

    for (idx, &track) in requests.iter().enumerate() {
        if track >= device_size {
            errors.push(ValidationError::new(
                ValidationErrorKind::RequestOutOfRange,
                format!("request #{idx} ({track}) must be below device size {device_size}"),
            ));
        }
    }

    if head >= device_size {
        errors.push(ValidationError::new(
            ValidationErrorKind::HeadOutOfRange,
            format!(
                "head position {head} must be between 0 and {}",
                device_size.saturating_sub(1)
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
