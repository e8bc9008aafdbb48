//! Chart page retrieval
//!
//! One GET per requested date; the body is handed to the assembler.

use url::Url;

use crate::assembler::parse_chart;
use crate::config::ChartConfig;
use crate::error::{ChartError, FetchError};
use crate::model::{Chart, ChartDate};

/// Fetches and parses singles charts
#[derive(Debug, Clone)]
pub struct ChartClient {
    client: reqwest::Client,
    base_url: Url,
}

impl ChartClient {
    pub fn new(config: ChartConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    /// Address of the chart page for `date`.
    pub fn chart_url(&self, date: &ChartDate) -> Result<Url, ChartError> {
        Ok(self.base_url.join(&date.chart_path())?)
    }

    /// Fetch the singles chart published on the given date.
    ///
    /// The date is validated before any request is made.
    pub async fn fetch_chart(&self, day: i32, month: i32, year: i32) -> Result<Chart, ChartError> {
        let date = ChartDate::new(day, month, year)?;
        let url = self.chart_url(&date)?;

        let html = self
            .fetch_html(&url)
            .await
            .map_err(|source| {
                tracing::warn!(%url, err = %source, "chart fetch failed");
                ChartError::Fetch {
                    url: url.to_string(),
                    source,
                }
            })?;

        let chart = parse_chart(date, &html).await?;
        tracing::info!(%url, entries = chart.entries.len(), "fetched chart");

        Ok(chart)
    }

    async fn fetch_html(&self, url: &Url) -> Result<String, FetchError> {
        tracing::debug!(%url, "requesting chart page");
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        Ok(response.text().await?)
    }
}

/// Fetch a chart with the default configuration.
pub async fn fetch_chart(day: i32, month: i32, year: i32) -> Result<Chart, ChartError> {
    ChartDate::new(day, month, year)?;

    let client = ChartClient::new(ChartConfig::default()).map_err(|source| ChartError::Fetch {
        url: crate::config::DEFAULT_BASE_URL.to_string(),
        source,
    })?;

    client.fetch_chart(day, month, year).await
}
