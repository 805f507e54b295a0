//! Command implementations.

pub mod scan;
pub mod view;

pub use self::scan::execute_scan;
pub use self::view::{execute_demo, execute_view, open_product, render_current_tab, show};
