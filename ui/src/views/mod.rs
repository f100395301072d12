mod report;
pub use report::ReportView;
