//! Chart assembly
//!
//! Turns a fetched chart page into a position-indexed [`Chart`]:
//! 1. size the chart from the first chart table body
//! 2. capture every accepted row in that body
//! 3. extract rows concurrently, placing each by its declared position

use std::sync::LazyLock;

use scraper::{Html, Selector};
use tokio::task::JoinSet;

use crate::classifier::is_chart_row;
use crate::error::ChartError;
use crate::extractor::RowCells;
use crate::model::{Chart, ChartDate, ChartEntry};

pub const TABLE_BODY_SELECTOR: &str = "section.chart .chart-positions tbody";
pub const ROW_SELECTOR: &str = "section.chart .chart-positions tr";

static TABLE_BODY: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(TABLE_BODY_SELECTOR).expect("invalid selector: table body"));
static ROWS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(ROW_SELECTOR).expect("invalid selector: rows"));
static BODY_ROWS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr").expect("invalid selector: tr"));

/// Rows captured from the page, ready for extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartRows {
    /// Number of accepted rows in the sized table body
    pub size: usize,
    pub rows: Vec<RowCells>,
}

/// Locate the chart table, count its entries and capture each accepted row.
///
/// Only the first matching table body sizes the chart, and only rows inside
/// it are captured.
pub fn collect_rows(html: &str) -> Result<ChartRows, ChartError> {
    let document = Html::parse_document(html);

    let Some(body) = document.select(&TABLE_BODY).next() else {
        if document.select(&ROWS).next().is_some() {
            return Err(ChartError::UninitialisedSize);
        }
        return Err(ChartError::MarkupMissing);
    };

    let size = body
        .select(&BODY_ROWS)
        .filter(|row| is_chart_row(*row))
        .count();
    tracing::debug!(size, "sized chart from table body");

    let rows = document
        .select(&ROWS)
        .filter(|row| row.ancestors().any(|node| node.id() == body.id()))
        .filter(|row| is_chart_row(*row))
        .map(RowCells::capture)
        .collect();

    Ok(ChartRows { size, rows })
}

/// Parse a fetched chart page for `date`.
///
/// Rows are extracted on a task group; the first failure aborts the rest and
/// no partial chart is returned.
pub async fn parse_chart(date: ChartDate, html: &str) -> Result<Chart, ChartError> {
    let ChartRows { size, rows } = collect_rows(html)?;
    let entries = extract_rows(size, rows).await?;

    Ok(Chart { date, entries })
}

/// Extract `rows` concurrently into a chart of exactly `size` entries.
pub async fn extract_rows(size: usize, rows: Vec<RowCells>) -> Result<Vec<ChartEntry>, ChartError> {
    let mut slots: Vec<Option<ChartEntry>> = vec![None; size];

    let mut tasks = JoinSet::new();
    for cells in rows {
        tasks.spawn(async move { cells.into_entry() });
    }
    tracing::debug!(dispatched = tasks.len(), size, "dispatched row extraction");

    while let Some(joined) = tasks.join_next().await {
        let entry = joined
            .map_err(ChartError::Task)?
            .map_err(|err| {
                tracing::warn!(%err, "row extraction failed");
                ChartError::Row(err)
            })?;
        place(&mut slots, entry)?;
    }

    slots
        .into_iter()
        .enumerate()
        .map(|(index, slot)| slot.ok_or(ChartError::MissingPosition(index + 1)))
        .collect()
}

/// Write `entry` into the slot owned by its position.
fn place(slots: &mut [Option<ChartEntry>], entry: ChartEntry) -> Result<(), ChartError> {
    let size = slots.len();
    let slot = (entry.position as usize)
        .checked_sub(1)
        .and_then(|index| slots.get_mut(index))
        .ok_or(ChartError::PositionOutOfRange {
            position: entry.position,
            size,
        })?;

    if slot.is_some() {
        return Err(ChartError::DuplicatePosition(entry.position));
    }
    *slot = Some(entry);

    Ok(())
}
