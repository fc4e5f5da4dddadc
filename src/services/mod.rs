pub mod report;
pub mod theme;

pub use report::{extract_report, lch_report, ReportService};
pub use theme::{theme_export, theme_json};
