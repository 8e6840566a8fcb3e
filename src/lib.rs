//! Sheetboard - interactive dashboard for a published spreadsheet tab
//!
//! Fetches a spreadsheet tab over its public CSV export URL, infers which
//! text columns hold `%d/%m/%Y` dates, and serves a dashboard where a user
//! picks X and Y columns and gets a combined scatter/line chart with a
//! date-aware range slider.
//!
//! The pipeline is linear: loader → normalizer → view.
//!
//! # Example
//!
//! ```no_run
//! use sheetboard::loader::parse_csv;
//! use sheetboard::normalize::normalize;
//! use sheetboard::chart::build_chart;
//!
//! let raw = parse_csv("Date,Revenue\n01/02/2023,100\n15/03/2023,200\n")?;
//! let table = normalize(&raw);
//!
//! let chart = build_chart(&table, "Date", "Revenue").unwrap();
//! assert_eq!(chart.layout.xaxis.axis_type, "date");
//! # Ok::<(), sheetboard::error::SheetError>(())
//! ```

pub mod api;
pub mod chart;
pub mod config;
pub mod error;
pub mod loader;
pub mod normalize;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use chart::{build_chart, ChartDescription};
pub use error::{SheetError, SheetResult};
pub use types::{Column, ColumnValue, Table};
pub use view::Dashboard;
