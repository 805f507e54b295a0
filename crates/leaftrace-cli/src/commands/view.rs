//! View command implementation.

use crate::cli::ViewArgs;
use crate::error::Result;
use crate::output::Formatter;
use leaftrace_domain::ProductId;
use leaftrace_ledger::MockLedger;
use leaftrace_scan::{ScanIntake, ScanTiming, DEFAULT_CODE};
use leaftrace_viewer::{Phase, Tab, Viewer, FETCH_DELAY};
use std::time::Duration;

/// Open a viewer for a product: wait out the simulated fetch delay,
/// resolve the record, and print the record header (or the not-found
/// rendering, which recovers locally and yields `None`).
pub async fn open_product(
    product: ProductId,
    simulate_delays: bool,
    formatter: &Formatter,
) -> Result<Option<Viewer>> {
    let delay = if simulate_delays {
        FETCH_DELAY
    } else {
        Duration::ZERO
    };

    println!(
        "{}",
        formatter.info("Fetching product information from the ledger...")
    );

    let mut viewer = Viewer::new(product);
    viewer.load(&MockLedger::new(), delay).await;

    match viewer.phase() {
        Phase::Loaded(_) => {
            let record = viewer.record().expect("phase is loaded");
            println!("{}", formatter.format_record(record)?);
            Ok(Some(viewer))
        }
        Phase::NotFound => {
            println!("{}", formatter.error("Product Not Found"));
            println!("The requested product information could not be retrieved.");
            Ok(None)
        }
        Phase::Loading => Ok(None),
    }
}

/// Print the active tab of a loaded viewer.
pub fn render_current_tab(viewer: &Viewer, formatter: &Formatter) {
    if !formatter.is_table() {
        return;
    }
    if let Some(record) = viewer.record() {
        println!();
        println!(
            "{}",
            formatter.format_tab(
                record,
                viewer.tab(),
                viewer.map_selection(),
                viewer.report_view(),
                viewer.report_selection(),
            )
        );
    }
}

/// Open a product and render one tab.
pub async fn show(
    product: ProductId,
    tab: Tab,
    simulate_delays: bool,
    formatter: &Formatter,
) -> Result<()> {
    if let Some(mut viewer) = open_product(product, simulate_delays, formatter).await? {
        viewer.select_tab(tab);
        render_current_tab(&viewer, formatter);
    }
    Ok(())
}

/// Execute the view command.
pub async fn execute_view(
    args: ViewArgs,
    simulate_delays: bool,
    formatter: &Formatter,
) -> Result<()> {
    show(
        ProductId::new(args.code),
        args.tab.into(),
        simulate_delays,
        formatter,
    )
    .await
}

/// Execute the demo command: the stubbed demo action views the fixed
/// default code.
pub async fn execute_demo(simulate_delays: bool, formatter: &Formatter) -> Result<()> {
    let intake = ScanIntake::new(ScanTiming::immediate());
    let product = intake.manual_entry(DEFAULT_CODE)?;

    show(product, Tab::Timeline, simulate_delays, formatter).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    fn plain_formatter() -> Formatter {
        Formatter::new(OutputFormat::Table, false)
    }

    #[tokio::test]
    async fn test_open_product_loads_the_record() {
        let viewer = open_product(ProductId::new("BT123456"), false, &plain_formatter())
            .await
            .unwrap()
            .expect("mock ledger always resolves");

        assert_eq!(
            viewer.record().unwrap().batch_number,
            "BATCH-BT123456"
        );
        assert_eq!(viewer.tab(), Tab::Timeline);
    }

    #[tokio::test]
    async fn test_demo_uses_the_default_code() {
        // The demo flow normalizes the default code before navigating
        let intake = ScanIntake::new(ScanTiming::immediate());
        let product = intake.manual_entry(DEFAULT_CODE).unwrap();

        assert_eq!(product.as_str(), "demobatch123");
        assert!(execute_demo(false, &plain_formatter()).await.is_ok());
    }
}
