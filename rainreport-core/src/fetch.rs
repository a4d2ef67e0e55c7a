use std::{fmt::Debug, time::Duration};

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::{debug, instrument};

use crate::{
    error::FetchError,
    format,
    model::{Coordinates, RainReport},
};

/// Path of the report endpoint, relative to the service URL.
pub const REPORT_PATH: &str = "isitraining/";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Something that can produce a rain report for a position.
#[async_trait]
pub trait ReportSource: Send + Sync + Debug {
    async fn fetch(&self, coords: Coordinates) -> Result<RainReport, FetchError>;
}

/// Fetches rain reports from the `isitraining/` endpoint of a service.
#[derive(Debug, Clone)]
pub struct ReportFetcher {
    http: Client,
    endpoint: Url,
}

impl ReportFetcher {
    /// `service_url` is the base the report path is resolved against; a
    /// missing trailing slash is added so the path is appended.
    pub fn new(service_url: &str, timeout: Duration) -> Result<Self> {
        let base = Url::parse(&with_trailing_slash(service_url))
            .with_context(|| format!("Invalid service URL: {service_url}"))?;
        let endpoint = base
            .join(REPORT_PATH)
            .with_context(|| format!("Cannot resolve {REPORT_PATH} against {base}"))?;

        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { http, endpoint })
    }

    /// Full request URL for `coords`, e.g.
    /// `http://host/isitraining/?latitude=13.37&longitude=90.01`.
    pub fn report_url(&self, coords: Coordinates) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("latitude", &format::coordinate(coords.latitude))
            .append_pair("longitude", &format::coordinate(coords.longitude));
        url
    }
}

#[async_trait]
impl ReportSource for ReportFetcher {
    #[instrument(skip(self), level = "info")]
    async fn fetch(&self, coords: Coordinates) -> Result<RainReport, FetchError> {
        let url = self.report_url(coords);
        debug!(%url, "requesting rain report");

        let res = self.http.get(url).send().await?;

        let status = res.status();
        if status != StatusCode::OK {
            debug!(%status, "rain report request was not successful");
            return Err(FetchError::Status(status));
        }

        let body = res.text().await?;

        RainReport::from_json(&body).map_err(FetchError::MalformedBody)
    }
}

fn with_trailing_slash(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{url}/")
    }
}
