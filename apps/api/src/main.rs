mod analysis;
mod config;
mod enrichment;
mod errors;
mod extract;
mod llm_client;
mod models;
mod parser;
mod pipeline;
mod report;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::enrichment::GitHubClient;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;

/// Default `EnvFilter` directive when `RUST_LOG` is unset. Scoped to this
/// crate's own event targets so pipeline logs are visible out of the box.
fn default_log_directive(level: &str) -> String {
    format!("{}={}", env!("CARGO_CRATE_NAME"), level)
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_log_directive(&config.rust_log))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting TalentSleuth API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client. A missing key is a permanent degraded mode, not
    // a startup failure — AI-backed routes will report unavailability.
    let llm = GeminiClient::new(config.gemini_api_key.clone());
    if llm.is_configured() {
        info!("LLM client initialized (model: {})", llm_client::MODEL);
    } else {
        warn!("GEMINI_API_KEY not set — AI analysis disabled");
    }

    // Initialize GitHub enrichment client
    let enricher = GitHubClient::new(config.github_api_base.clone());
    info!("GitHub client initialized ({})", config.github_api_base);

    let state = AppState {
        llm: Arc::new(llm),
        enricher: Arc::new(enricher),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_directive_targets_this_crate() {
        // Events from this binary carry targets like `api::pipeline`, so the
        // fallback directive must scope to the actual crate name.
        assert_eq!(
            default_log_directive("info"),
            format!("{}=info", env!("CARGO_CRATE_NAME"))
        );
        assert!(default_log_directive("debug").starts_with("api="));
    }

    #[test]
    fn test_default_log_directive_parses_as_env_filter() {
        let filter: Result<EnvFilter, _> = default_log_directive("info").parse();
        assert!(filter.is_ok());
    }
}
