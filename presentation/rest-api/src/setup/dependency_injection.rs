use std::sync::Arc;

use environment::ProcessEnvironment;
use logger::TracingLogger;

use perplexity::client::PerplexityClient;
use perplexity::connectivity_probe::UpstreamProbePerplexity;
use perplexity::recipe_extractor::RecipeExtractorPerplexity;

use business::application::connectivity::probe::ProbeUpstreamUseCaseImpl;
use business::application::diagnostics::get::GetDiagnosticsUseCaseImpl;
use business::application::recipe::extract::ExtractRecipeUseCaseImpl;

use crate::config::perplexity_config::PerplexityConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub recipe_api: crate::api::recipe::routes::RecipeApi,
    pub diagnostics_api: crate::api::diagnostics::routes::DiagnosticsApi,
    pub connectivity_api: crate::api::connectivity::routes::ConnectivityApi,
}

impl DependencyContainer {
    pub fn new(perplexity_config: &PerplexityConfig) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let client = PerplexityClient::new(
            perplexity_config.api_key.clone(),
            perplexity_config.base_url.clone(),
            perplexity_config.model.clone(),
        );
        let recipe_extractor = Arc::new(RecipeExtractorPerplexity::new(
            client.clone(),
            perplexity_config.prompt_version,
            perplexity_config.timeout,
        ));
        let upstream_prober = Arc::new(UpstreamProbePerplexity::new(
            client,
            perplexity_config.probe_timeout,
        ));
        let environment = Arc::new(ProcessEnvironment);

        // Use cases
        let extract_use_case = Arc::new(ExtractRecipeUseCaseImpl {
            extractor: recipe_extractor,
            logger: logger.clone(),
        });
        let probe_use_case = Arc::new(ProbeUpstreamUseCaseImpl {
            prober: upstream_prober,
            logger: logger.clone(),
        });
        let diagnostics_use_case = Arc::new(GetDiagnosticsUseCaseImpl {
            environment,
            credential_var: perplexity_config.credential_var.clone(),
            logger,
        });

        let recipe_api = crate::api::recipe::routes::RecipeApi::new(extract_use_case);
        let diagnostics_api =
            crate::api::diagnostics::routes::DiagnosticsApi::new(diagnostics_use_case);
        let connectivity_api =
            crate::api::connectivity::routes::ConnectivityApi::new(probe_use_case);

        Self {
            health_api,
            recipe_api,
            diagnostics_api,
            connectivity_api,
        }
    }
}
