use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use scriba::application::ports::LlmClient;
use scriba::application::services::StudyService;
use scriba::infrastructure::llm::create_openai_client;
use scriba::infrastructure::observability::{TracingConfig, init_tracing};
use scriba::infrastructure::text_processing::CompositeFileLoader;
use scriba::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(anyhow::Error::msg)?;

    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&TracingConfig::from_settings(
        environment,
        &settings.logging,
    ));

    let llm_client = Arc::new(
        create_openai_client(&settings.llm).context("Failed to build completion client")?,
    );

    if llm_client.is_configured() {
        tracing::info!(
            base_url = %settings.llm.base_url,
            model = %settings.llm.model,
            "Completion provider configured"
        );
    } else {
        tracing::warn!(
            "No completion provider API key configured; set GROQ_API_KEY or APP_LLM__API_KEY. Model-backed endpoints will return 500."
        );
    }

    let file_loader = Arc::new(CompositeFileLoader::with_default_adapters());
    let study_service = Arc::new(StudyService::new(
        file_loader,
        llm_client,
        settings.generation_config(),
    ));

    let state = AppState::new(study_service).with_upload_limit(settings.max_upload_bytes());
    let router = create_router(state);

    let host: std::net::IpAddr = settings
        .server
        .host
        .parse()
        .with_context(|| format!("Invalid server.host: {}", settings.server.host))?;
    let addr = SocketAddr::new(host, settings.server.port);
    tracing::info!(
        %addr,
        combined_dispatch = ?settings.generation.combined_dispatch,
        "Listening"
    );

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
