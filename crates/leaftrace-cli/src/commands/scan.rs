//! Scan command implementation.

use crate::cli::ScanArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use leaftrace_domain::ProductId;
use leaftrace_scan::{ScanIntake, ScanSource, ScanTiming};

/// Execute the scan command: run one of the three intake paths and return
/// the normalized identifier as the navigation request.
pub async fn execute_scan(
    args: ScanArgs,
    simulate_delays: bool,
    formatter: &Formatter,
) -> Result<ProductId> {
    let timing = if simulate_delays {
        ScanTiming::default()
    } else {
        ScanTiming::immediate()
    };
    let intake = ScanIntake::new(timing);

    let product = if args.camera {
        println!("{}", formatter.info("Scanning for QR code..."));
        intake.simulate(ScanSource::Camera).await?
    } else if args.upload {
        println!("{}", formatter.info("Reading QR code from image..."));
        intake.simulate(ScanSource::Upload).await?
    } else if let Some(code) = args.code.as_deref() {
        intake.manual_entry(code)?
    } else {
        return Err(CliError::InvalidInput(
            "Provide a batch code or choose --camera/--upload".to_string(),
        ));
    };

    println!(
        "{}",
        formatter.success(&format!("Code accepted: {}", product))
    );

    Ok(product)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    fn plain_formatter() -> Formatter {
        Formatter::new(OutputFormat::Table, false)
    }

    #[tokio::test]
    async fn test_manual_scan_normalizes() {
        let args = ScanArgs {
            code: Some(" BT-123456 ".to_string()),
            camera: false,
            upload: false,
        };

        let product = execute_scan(args, false, &plain_formatter()).await.unwrap();
        assert_eq!(product.as_str(), "BT123456");
    }

    #[tokio::test]
    async fn test_blank_manual_scan_is_rejected() {
        let args = ScanArgs {
            code: Some("   ".to_string()),
            camera: false,
            upload: false,
        };

        let err = execute_scan(args, false, &plain_formatter())
            .await
            .expect_err("blank code rejected");
        assert_eq!(err.to_string(), "Please enter a batch code.");
    }

    #[tokio::test]
    async fn test_camera_scan_yields_placeholder() {
        let args = ScanArgs {
            code: None,
            camera: true,
            upload: false,
        };

        let product = execute_scan(args, false, &plain_formatter()).await.unwrap();
        assert_eq!(product.as_str(), "camerabatch789");
    }

    #[tokio::test]
    async fn test_missing_source_is_invalid_input() {
        let args = ScanArgs {
            code: None,
            camera: false,
            upload: false,
        };

        assert!(execute_scan(args, false, &plain_formatter()).await.is_err());
    }
}
