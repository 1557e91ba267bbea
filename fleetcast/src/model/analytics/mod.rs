mod accuracy_report;
pub mod analytics_ops;

pub use accuracy_report::AccuracyReport;
