//! Error types for chart retrieval

use std::num::ParseIntError;

use thiserror::Error;

/// Out-of-range date component, raised before any network activity
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid day, expecting value between 1-31 inclusive, got {0}")]
    Day(i32),
    #[error("invalid month, expecting value between 1-12 inclusive, got {0}")]
    Month(i32),
    #[error("invalid year, expecting value between 1952 and current year, got {0}")]
    Year(i32),
}

/// Failure retrieving the chart page
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
}

/// A required field of a chart row could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("converting {field} to integer, got {value:?}")]
    Integer {
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("{field} must be at least 1, got {value}")]
    BelowOne { field: &'static str, value: i64 },
}

/// The single error returned per chart request
#[derive(Debug, Error)]
pub enum ChartError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("building chart url")]
    InvalidUrl(#[from] url::ParseError),

    #[error("visiting {url}")]
    Fetch {
        url: String,
        #[source]
        source: FetchError,
    },

    #[error("chart table not found on page")]
    MarkupMissing,

    #[error("chart rows found but chart size uninitialised")]
    UninitialisedSize,

    #[error("processing song")]
    Row(#[source] ExtractError),

    #[error("song position {position} outside chart of {size} entries")]
    PositionOutOfRange { position: u32, size: usize },

    #[error("song position {0} appears more than once")]
    DuplicatePosition(u32),

    #[error("no song found for position {0}")]
    MissingPosition(usize),

    #[error("song extraction task failed")]
    Task(#[source] tokio::task::JoinError),
}
