//! reqwest-backed [`DashboardApi`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use gympi_core::api::DashboardApi;
use gympi_core::constants::{DEVICES_PATH, HISTORY_PATH_PREFIX};
use gympi_core::error::DashboardError;
use gympi_core::model::{decode_devices, decode_history, DeviceSummary, WorkoutRecord};

/// HTTP client for the telemetry service.
#[derive(Debug, Clone)]
pub struct HttpDashboardApi {
    client: Client,
    base: Url,
}

impl HttpDashboardApi {
    /// Create a client rooted at `base_url`.
    ///
    /// `timeout` bounds each request end to end; `None` waits forever.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, DashboardError> {
        let base = Url::parse(base_url)
            .map_err(|e| DashboardError::Config(format!("invalid base URL {base_url:?}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(DashboardError::Config(format!(
                "base URL {base_url:?} cannot carry a path"
            )));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| DashboardError::Config(format!("cannot build HTTP client: {e}")))?;

        Ok(Self { client, base })
    }

    /// The service root this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// URL of the device summary listing.
    #[must_use]
    pub fn devices_url(&self) -> Url {
        self.join_segments(split_path(DEVICES_PATH))
    }

    /// URL of one device's history. The id becomes a single encoded segment.
    #[must_use]
    pub fn history_url(&self, device_id: &str) -> Url {
        self.join_segments(split_path(HISTORY_PATH_PREFIX).chain(std::iter::once(device_id)))
    }

    fn join_segments<'a>(&self, segments: impl Iterator<Item = &'a str>) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_body(&self, url: &Url) -> Result<Vec<u8>, DashboardError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| transport_error(url, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DashboardError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| transport_error(url, &e))?;
        debug!(url = %url, bytes = body.len(), "fetched");
        Ok(body.to_vec())
    }
}

#[async_trait]
impl DashboardApi for HttpDashboardApi {
    async fn fetch_devices(&self) -> Result<Vec<DeviceSummary>, DashboardError> {
        let url = self.devices_url();
        let body = self.get_body(&url).await?;
        decode_devices(&body).map_err(|e| DashboardError::payload(url.as_str(), &e))
    }

    async fn fetch_history(&self, device_id: &str) -> Result<Vec<WorkoutRecord>, DashboardError> {
        let url = self.history_url(device_id);
        let body = self.get_body(&url).await?;
        decode_history(&body).map_err(|e| DashboardError::payload(url.as_str(), &e))
    }
}

fn split_path(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

fn transport_error(url: &Url, err: &reqwest::Error) -> DashboardError {
    DashboardError::Transport {
        url: url.to_string(),
        message: err.to_string(),
    }
}
