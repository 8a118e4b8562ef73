use std::time::Duration;

use async_trait::async_trait;

use business::domain::connectivity::errors::ConnectivityError;
use business::domain::connectivity::model::ProbeReport;
use business::domain::connectivity::services::UpstreamProbeService;

use crate::client::PerplexityClient;
use crate::prompt::build_probe_request;

pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(10);

pub struct UpstreamProbePerplexity {
    client: PerplexityClient,
    timeout: Duration,
}

impl UpstreamProbePerplexity {
    pub fn new(client: PerplexityClient, timeout: Duration) -> Self {
        Self { client, timeout }
    }
}

#[async_trait]
impl UpstreamProbeService for UpstreamProbePerplexity {
    async fn probe(&self) -> Result<ProbeReport, ConnectivityError> {
        let request = build_probe_request(&self.client.model);
        let response = self.client.send(&request, self.timeout).await?;

        Ok(ProbeReport {
            status_code: response.status_code,
            body: response.body,
        })
    }
}
