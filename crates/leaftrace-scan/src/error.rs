//! Error types for scan intake.

use thiserror::Error;

/// User-input validation errors.
///
/// Both variants are recovered locally with a visible message; neither
/// navigates nor crashes the screen, and there are no retries - the user
/// simply submits again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// Manual entry was empty or whitespace-only
    #[error("Please enter a batch code.")]
    EmptyCode,

    /// The (simulated) decoder produced an empty payload
    #[error("Invalid QR code. Please try again.")]
    InvalidCode,
}
