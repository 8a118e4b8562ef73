use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::connectivity::errors::ConnectivityError;
use crate::domain::connectivity::model::ProbeReport;
use crate::domain::connectivity::services::UpstreamProbeService;
use crate::domain::connectivity::use_cases::probe::ProbeUpstreamUseCase;
use crate::domain::logger::Logger;

pub struct ProbeUpstreamUseCaseImpl {
    pub prober: Arc<dyn UpstreamProbeService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ProbeUpstreamUseCase for ProbeUpstreamUseCaseImpl {
    async fn execute(&self) -> Result<ProbeReport, ConnectivityError> {
        self.logger.info("Testing Perplexity API connection");

        let report = self.prober.probe().await.inspect_err(|err| {
            self.logger.error(&format!("Connectivity probe failed: {}", err));
        })?;

        if report.is_success() {
            self.logger.info("Perplexity API connection working");
        } else {
            self.logger.warn(&format!(
                "Perplexity API answered probe with status {}",
                report.status_code
            ));
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;

    mock! {
        pub Prober {}

        #[async_trait]
        impl UpstreamProbeService for Prober {
            async fn probe(&self) -> Result<ProbeReport, ConnectivityError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_report_when_upstream_answers() {
        let mut mock_prober = MockProber::new();
        mock_prober.expect_probe().times(1).returning(|| {
            Ok(ProbeReport {
                status_code: 200,
                body: r#"{"choices":[]}"#.to_string(),
            })
        });

        let use_case = ProbeUpstreamUseCaseImpl {
            prober: Arc::new(mock_prober),
            logger: mock_logger(),
        };

        let report = use_case.execute().await.unwrap();

        assert!(report.is_success());
    }

    #[tokio::test]
    async fn should_return_report_when_upstream_rejects_credential() {
        let mut mock_prober = MockProber::new();
        mock_prober.expect_probe().returning(|| {
            Ok(ProbeReport {
                status_code: 401,
                body: "Unauthorized".to_string(),
            })
        });

        let use_case = ProbeUpstreamUseCaseImpl {
            prober: Arc::new(mock_prober),
            logger: mock_logger(),
        };

        let report = use_case.execute().await.unwrap();

        assert_eq!(report.status_code, 401);
    }

    #[tokio::test]
    async fn should_return_error_when_key_missing() {
        let mut mock_prober = MockProber::new();
        mock_prober
            .expect_probe()
            .returning(|| Err(ConnectivityError::Configuration));

        let use_case = ProbeUpstreamUseCaseImpl {
            prober: Arc::new(mock_prober),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(matches!(
            result.unwrap_err(),
            ConnectivityError::Configuration
        ));
    }
}
