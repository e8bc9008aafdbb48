//! Chart data types

use serde::Serialize;

use crate::error::ValidationError;

/// Earliest year the singles chart was published.
pub const FIRST_CHART_YEAR: i32 = 1952;

/// Direction a song moved since last week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    /// No directional marker: brand new entries and re-entries.
    New,
}

/// One song's listing for one week
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartEntry {
    pub artist: String,
    pub title: String,
    pub position: u32,
    pub peak_position: u32,
    /// `-1` when the song is new or re-entering this week
    pub position_last_week: i32,
    pub trend: Trend,
    pub is_reentry: bool,
    pub weeks_on_chart: u32,
    pub record_label: String,
    pub cover_image_small_url: String,
    pub cover_image_large_url: String,
}

/// Requested publication date, kept exactly as given
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartDate {
    pub day: i32,
    pub month: i32,
    pub year: i32,
}

impl ChartDate {
    /// Validate against the current local year.
    pub fn new(day: i32, month: i32, year: i32) -> Result<Self, ValidationError> {
        use chrono::Datelike;

        Self::with_current_year(day, month, year, chrono::Local::now().year())
    }

    pub fn with_current_year(
        day: i32,
        month: i32,
        year: i32,
        current_year: i32,
    ) -> Result<Self, ValidationError> {
        if !(1..=31).contains(&day) {
            return Err(ValidationError::Day(day));
        }
        if !(1..=12).contains(&month) {
            return Err(ValidationError::Month(month));
        }
        if year < FIRST_CHART_YEAR || year > current_year {
            return Err(ValidationError::Year(year));
        }

        Ok(Self { day, month, year })
    }

    /// Path of this date's chart page, relative to the site root.
    ///
    /// Components are concatenated without padding, matching the site's
    /// own links (31 Oct 1992 is `19921031`, 5 Jan 1992 is `199215`).
    pub fn chart_path(&self) -> String {
        format!(
            "charts/singles-chart/{}{}{}/",
            self.year, self.month, self.day
        )
    }
}

/// One week's full listing, `entries[i].position == i + 1`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chart {
    pub date: ChartDate,
    pub entries: Vec<ChartEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i32 = 2026;

    #[test]
    fn test_date_bounds_accepted() {
        for (day, month, year) in [(1, 1, 1952), (31, 12, NOW), (31, 10, 1992)] {
            let date = ChartDate::with_current_year(day, month, year, NOW).unwrap();
            assert_eq!((date.day, date.month, date.year), (day, month, year));
        }
    }

    #[test]
    fn test_date_bounds_rejected() {
        let cases = [
            ((0, 1, 1992), ValidationError::Day(0)),
            ((32, 1, 1992), ValidationError::Day(32)),
            ((1, 0, 1992), ValidationError::Month(0)),
            ((1, 13, 1992), ValidationError::Month(13)),
            ((1, 1, 1951), ValidationError::Year(1951)),
            ((1, 1, NOW + 1), ValidationError::Year(NOW + 1)),
        ];

        for ((day, month, year), expected) in cases {
            let err = ChartDate::with_current_year(day, month, year, NOW).unwrap_err();
            assert_eq!(err, expected);
        }
    }

    #[test]
    fn test_validation_messages() {
        let err = ChartDate::with_current_year(50, 1, 1952, NOW).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid day, expecting value between 1-31 inclusive, got 50"
        );

        // month is checked before year
        let err = ChartDate::with_current_year(1, 100, 1950, NOW).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid month, expecting value between 1-12 inclusive, got 100"
        );

        let err = ChartDate::with_current_year(1, 1, 1950, NOW).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid year, expecting value between 1952 and current year, got 1950"
        );
    }

    #[test]
    fn test_current_year_is_accepted() {
        use chrono::Datelike;

        let year = chrono::Local::now().year();
        assert!(ChartDate::new(1, 1, year).is_ok());
        assert_eq!(
            ChartDate::new(1, 1, year + 1),
            Err(ValidationError::Year(year + 1))
        );
    }

    #[test]
    fn test_chart_path_is_unpadded() {
        let halloween = ChartDate::with_current_year(31, 10, 1992, NOW).unwrap();
        assert_eq!(halloween.chart_path(), "charts/singles-chart/19921031/");

        let january = ChartDate::with_current_year(5, 1, 1992, NOW).unwrap();
        assert_eq!(january.chart_path(), "charts/singles-chart/199215/");
    }

    #[test]
    fn test_trend_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Trend::Up).unwrap(), r#""up""#);
        assert_eq!(serde_json::to_string(&Trend::New).unwrap(), r#""new""#);
    }
}
