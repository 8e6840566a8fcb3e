//! Dashboard HTTP module
//!
//! Serves the dashboard page and the JSON endpoints behind it.
//! Run with `sheetboard serve`.

pub mod handlers;
pub mod server;

pub use server::run_server;
