//! UK Official Charts singles chart scraper
//!
//! Fetches the chart page for a date and turns its table into a
//! position-indexed list of entries:
//! - row classification (song rows vs ads and decoration)
//! - row extraction into typed [`ChartEntry`] values
//! - concurrent assembly into a [`Chart`]

pub mod assembler;
pub mod classifier;
pub mod client;
pub mod config;
pub mod error;
pub mod extractor;
pub mod logging;
pub mod model;

pub use assembler::parse_chart;
pub use classifier::is_chart_row;
pub use client::{fetch_chart, ChartClient};
pub use config::ChartConfig;
pub use error::{ChartError, ExtractError, FetchError, ValidationError};
pub use extractor::extract_entry;
pub use model::{Chart, ChartDate, ChartEntry, Trend};
