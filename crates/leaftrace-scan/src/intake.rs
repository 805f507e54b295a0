//! Scan sources and the intake flow.

use crate::error::ScanError;
use crate::normalize::normalize_code;
use leaftrace_domain::ProductId;
use std::time::Duration;
use tokio::time::sleep;

/// Placeholder payload the simulated camera scan always decodes to.
pub const CAMERA_PAYLOAD: &str = "camera-batch-789";

/// Placeholder payload the simulated image upload always decodes to.
pub const UPLOAD_PAYLOAD: &str = "uploaded-qr-batch-456";

/// A simulated scan source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanSource {
    /// Camera scan simulation (3 s)
    Camera,

    /// Image upload simulation (2 s)
    Upload,
}

impl ScanSource {
    fn payload(&self) -> &'static str {
        match self {
            ScanSource::Camera => CAMERA_PAYLOAD,
            ScanSource::Upload => UPLOAD_PAYLOAD,
        }
    }
}

/// Durations the simulated sources take to "decode".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanTiming {
    /// Camera scan duration
    pub camera: Duration,

    /// Upload scan duration
    pub upload: Duration,
}

impl ScanTiming {
    /// Zero delays, for tests and `--no-delay` runs.
    pub fn immediate() -> Self {
        Self {
            camera: Duration::ZERO,
            upload: Duration::ZERO,
        }
    }
}

impl Default for ScanTiming {
    fn default() -> Self {
        Self {
            camera: Duration::from_secs(3),
            upload: Duration::from_secs(2),
        }
    }
}

/// Scan intake: validates and normalizes codes into product identifiers.
///
/// Intake retains no state between scans; the returned identifier is the
/// navigation request, and each flow has at most one simulated scan
/// outstanding at a time.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanIntake {
    timing: ScanTiming,
}

impl ScanIntake {
    /// Create an intake with the given timing.
    pub fn new(timing: ScanTiming) -> Self {
        Self { timing }
    }

    /// Validate and normalize a manually typed code.
    ///
    /// Empty or whitespace-only input is rejected with
    /// [`ScanError::EmptyCode`] and does not navigate.
    pub fn manual_entry(&self, raw: &str) -> Result<ProductId, ScanError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ScanError::EmptyCode);
        }
        decode(trimmed)
    }

    /// Run a simulated scan: sleep for the source's duration, then decode
    /// its fixed placeholder payload.
    pub async fn simulate(&self, source: ScanSource) -> Result<ProductId, ScanError> {
        let delay = match source {
            ScanSource::Camera => self.timing.camera,
            ScanSource::Upload => self.timing.upload,
        };

        sleep(delay).await;
        decode(source.payload())
    }
}

/// Decode a scanned payload into an identifier. An empty payload is the
/// decoder reporting a non-match.
fn decode(payload: &str) -> Result<ProductId, ScanError> {
    if payload.is_empty() {
        return Err(ScanError::InvalidCode);
    }
    Ok(ProductId::new(normalize_code(payload)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[test]
    fn test_manual_entry_trims_and_normalizes() {
        let intake = ScanIntake::default();
        let id = intake.manual_entry(" BT-123456 ").unwrap();
        assert_eq!(id.as_str(), "BT123456");
    }

    #[test]
    fn test_manual_entry_rejects_blank_input() {
        let intake = ScanIntake::default();

        assert_eq!(intake.manual_entry(""), Err(ScanError::EmptyCode));
        assert_eq!(intake.manual_entry("   "), Err(ScanError::EmptyCode));
    }

    #[test]
    fn test_manual_entry_symbols_fall_back_to_default() {
        let intake = ScanIntake::default();
        let id = intake.manual_entry("!!!").unwrap();
        assert_eq!(id.as_str(), "demo-batch-123");
    }

    #[tokio::test(start_paused = true)]
    async fn test_camera_scan_takes_three_seconds() {
        let intake = ScanIntake::default();
        let start = Instant::now();

        let id = intake.simulate(ScanSource::Camera).await.unwrap();

        assert_eq!(start.elapsed(), Duration::from_secs(3));
        assert_eq!(id.as_str(), "camerabatch789");
    }

    #[tokio::test(start_paused = true)]
    async fn test_upload_scan_takes_two_seconds() {
        let intake = ScanIntake::default();
        let start = Instant::now();

        let id = intake.simulate(ScanSource::Upload).await.unwrap();

        assert_eq!(start.elapsed(), Duration::from_secs(2));
        assert_eq!(id.as_str(), "uploadedqrbatch456");
    }

    #[tokio::test]
    async fn test_immediate_timing_skips_delays() {
        let intake = ScanIntake::new(ScanTiming::immediate());
        let id = intake.simulate(ScanSource::Camera).await.unwrap();
        assert_eq!(id.as_str(), "camerabatch789");
    }
}
