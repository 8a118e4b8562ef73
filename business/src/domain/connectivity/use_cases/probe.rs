use async_trait::async_trait;

use crate::domain::connectivity::errors::ConnectivityError;
use crate::domain::connectivity::model::ProbeReport;

#[async_trait]
pub trait ProbeUpstreamUseCase: Send + Sync {
    async fn execute(&self) -> Result<ProbeReport, ConnectivityError>;
}
