pub mod client;
pub mod format;
pub mod gviz;
pub mod report;
pub mod session;
