use std::time::Duration;

use log::{debug, info, warn};
use reqwest::Client;

use crate::error::FetchError;
use crate::steplib::Manifest;

pub const STEPLIB_SPEC_URL: &str = "https://bitrise-steplib-collection.s3.amazonaws.com/spec.json";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct SteplibClient {
    client: Client,
    endpoint: String,
}

impl SteplibClient {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|err| {
                warn!("fetch: falling back to default HTTP client configuration ({err})");
                Client::new()
            });
        Self {
            client,
            endpoint: STEPLIB_SPEC_URL.to_owned(),
        }
    }

    /// Download the steplib spec and decode it into a [`Manifest`] with step ids assigned.
    ///
    /// # Errors
    /// [`FetchError::Network`] or [`FetchError::Status`] when the endpoint cannot
    /// be read, [`FetchError::Decode`] when the body is not a valid spec.
    pub async fn fetch(&self) -> Result<Manifest, FetchError> {
        let url = self.endpoint.as_str();
        info!("fetch: requesting {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Network {
                url: url.to_owned(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_owned(),
                status,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Network {
                url: url.to_owned(),
                source,
            })?;
        debug!("fetch: received {} bytes", body.len());

        let manifest = Manifest::from_slice(&body)?;
        log_summary(&manifest);
        Ok(manifest)
    }
}

fn log_summary(manifest: &Manifest) {
    let generated = manifest
        .generated_at()
        .map(|at| at.to_string())
        .unwrap_or_else(|| "unknown".to_owned());
    info!(
        "fetch: {} steps in spec {} from {} (generated {})",
        manifest.steps.len(),
        manifest.format_version,
        manifest.steplib_source,
        generated
    );
    for location in &manifest.download_locations {
        debug!("fetch: download location {} -> {}", location.kind, location.src);
    }
    debug!("fetch: assets served from {}", manifest.assets_download_base_uri);
}
