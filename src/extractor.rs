//! Chart row extraction
//!
//! Extraction is split in two so rows can be processed off the parsing
//! thread (`scraper::Html` is not `Send`):
//! - [`RowCells::capture`] copies the raw text and attributes out of the row
//! - [`RowCells::into_entry`] turns them into a typed [`ChartEntry`]

use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

use crate::error::ExtractError;
use crate::model::{ChartEntry, Trend};

/// "Last week" text of a song entering the chart for the first time.
pub const BRAND_NEW_MARKER: &str = "New";
/// "Last week" text of a song returning to the chart.
pub const REENTRY_MARKER: &str = "Re";

const TREND_UP_CLASS: &str = "icon-up";
const TREND_DOWN_CLASS: &str = "icon-down";

const SMALL_COVER_SEGMENT: &str = "img/small?";
const LARGE_COVER_SEGMENT: &str = "img/large?";

fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {css:?}: {e}"))
}

static POSITION: LazyLock<Selector> = LazyLock::new(|| selector(".position"));
static LAST_WEEK: LazyLock<Selector> = LazyLock::new(|| selector(".last-week"));
static PEAK_POSITION: LazyLock<Selector> = LazyLock::new(|| selector("td:nth-child(4)"));
static WEEKS_ON_CHART: LazyLock<Selector> = LazyLock::new(|| selector("td:nth-child(5)"));
static ARTIST: LazyLock<Selector> = LazyLock::new(|| selector(".title-artist .artist a"));
static TITLE: LazyLock<Selector> = LazyLock::new(|| selector(".title-artist .title a"));
static LABEL: LazyLock<Selector> = LazyLock::new(|| selector(".label"));
static COVER: LazyLock<Selector> = LazyLock::new(|| selector(".track .cover img"));

/// Raw cell contents of one chart row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowCells {
    pub position: String,
    pub last_week: String,
    pub last_week_class: String,
    pub peak_position: String,
    pub weeks_on_chart: String,
    pub artist: String,
    pub title: String,
    pub label: String,
    pub cover_src: String,
}

impl RowCells {
    /// Copy the known sub-elements of `row`. Missing elements become empty
    /// strings; nothing outside the row's subtree is read.
    pub fn capture(row: ElementRef<'_>) -> Self {
        Self {
            position: text_of(row, &POSITION),
            last_week: text_of(row, &LAST_WEEK),
            last_week_class: attr_of(row, &LAST_WEEK, "class"),
            peak_position: text_of(row, &PEAK_POSITION),
            weeks_on_chart: text_of(row, &WEEKS_ON_CHART),
            artist: text_of(row, &ARTIST),
            title: text_of(row, &TITLE),
            label: text_of(row, &LABEL),
            cover_src: attr_of(row, &COVER, "src"),
        }
    }

    pub fn into_entry(self) -> Result<ChartEntry, ExtractError> {
        let position = parse_rank("position", &self.position)?;

        let (position_last_week, is_reentry) = match self.last_week.as_str() {
            BRAND_NEW_MARKER => (-1, false),
            REENTRY_MARKER => (-1, true),
            other => (parse_rank("position last week", other)?, false),
        };

        let peak_position = parse_rank("peak position", &self.peak_position)?;
        let weeks_on_chart = parse_int("weeks on chart", &self.weeks_on_chart)?;

        let trend = trend_from_class(&self.last_week_class);
        let cover_image_large_url = large_cover_url(&self.cover_src);

        Ok(ChartEntry {
            artist: self.artist,
            title: self.title,
            position,
            peak_position,
            position_last_week,
            trend,
            is_reentry,
            weeks_on_chart,
            record_label: self.label,
            cover_image_small_url: self.cover_src,
            cover_image_large_url,
        })
    }
}

/// Extract a typed entry from a row accepted by
/// [`is_chart_row`](crate::classifier::is_chart_row).
pub fn extract_entry(row: ElementRef<'_>) -> Result<ChartEntry, ExtractError> {
    RowCells::capture(row).into_entry()
}

/// Trend from the "last week" cell's class list.
pub fn trend_from_class(class: &str) -> Trend {
    if class.contains(TREND_UP_CLASS) {
        Trend::Up
    } else if class.contains(TREND_DOWN_CLASS) {
        Trend::Down
    } else {
        Trend::New
    }
}

/// Large cover art URL derived from the small one. Empty in, empty out.
pub fn large_cover_url(small: &str) -> String {
    small.replacen(SMALL_COVER_SEGMENT, LARGE_COVER_SEGMENT, 1)
}

/// Concatenated, trimmed text of every match
fn text_of(row: ElementRef<'_>, selector: &Selector) -> String {
    let text = row
        .select(selector)
        .flat_map(|el| el.text())
        .collect::<String>();
    text.trim().to_string()
}

/// Attribute of the first match
fn attr_of(row: ElementRef<'_>, selector: &Selector, name: &str) -> String {
    row.select(selector)
        .next()
        .and_then(|el| el.value().attr(name))
        .unwrap_or_default()
        .to_string()
}

fn parse_int<T>(field: &'static str, value: &str) -> Result<T, ExtractError>
where
    T: std::str::FromStr<Err = std::num::ParseIntError>,
{
    value.parse().map_err(|source| ExtractError::Integer {
        field,
        value: value.to_string(),
        source,
    })
}

/// Chart ranks start at 1
fn parse_rank<T>(field: &'static str, value: &str) -> Result<T, ExtractError>
where
    T: std::str::FromStr<Err = std::num::ParseIntError> + Copy + Into<i64>,
{
    let rank: T = parse_int(field, value)?;
    if rank.into() < 1 {
        return Err(ExtractError::BelowOne {
            field,
            value: rank.into(),
        });
    }

    Ok(rank)
}
