mod console;
mod json;
mod model;

pub use console::ConsoleReporter;
pub use json::JsonReportGenerator;
pub use model::{Report, ReportSummary};
