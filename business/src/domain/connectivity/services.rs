use async_trait::async_trait;

use super::errors::ConnectivityError;
use super::model::ProbeReport;

/// Service port for checking that the upstream API accepts our credential.
#[async_trait]
pub trait UpstreamProbeService: Send + Sync {
    async fn probe(&self) -> Result<ProbeReport, ConnectivityError>;
}
