//! Shared UI crate for Tiến Độ. The report logic and views live here so the
//! web and desktop entrypoints stay thin.

pub mod components;
pub mod core;
pub mod views;
