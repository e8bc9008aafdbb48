//! Client configuration

use std::time::Duration;

use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://www.officialcharts.com/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where and how the chart page is fetched
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Site root the chart path is joined onto; keep the trailing slash
    pub base_url: Url,
    pub user_agent: String,
    pub timeout: Duration,
}

impl ChartConfig {
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("valid default base url"),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
