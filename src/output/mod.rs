//! Report rendering and saving

pub mod formatter;
pub mod report;

pub use formatter::ReportGenerator;
pub use report::ReportDocument;
