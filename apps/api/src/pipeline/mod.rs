//! Orchestrator — sequences validate → extract → parse → enrich → analyze
//! into one `CandidateBundle` per request.
//!
//! The pipeline is strictly single-flow: each stage is a full data dependency
//! of the next, and each invocation owns all of its intermediate objects.
//! Expected failure modes travel as values (`Option`/`Result`), never as
//! control-flow panics; enrichment failures are recovered locally while
//! parse/analysis failures always propagate to the caller.

pub mod handlers;

use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::analyze_candidate;
use crate::enrichment::{stub_from_url, ProfileEnricher};
use crate::errors::AppError;
use crate::extract::{extract_text, validate_upload, UploadedDocument, MIN_RESUME_CHARS};
use crate::llm_client::TextGenerator;
use crate::models::candidate::CandidateBundle;
use crate::models::github::GitHubData;
use crate::parser::parse_resume;

/// Runs the full analysis pipeline for one uploaded resume.
pub async fn run_pipeline(
    llm: &dyn TextGenerator,
    enricher: &dyn ProfileEnricher,
    doc: UploadedDocument,
    job_description: &str,
) -> Result<CandidateBundle, AppError> {
    // Validation halts the pipeline before any network call.
    validate_upload(&doc)?;

    info!("Extracting text from file...");
    let raw_text = extract_text(&doc)?;
    if raw_text.trim().len() < MIN_RESUME_CHARS {
        return Err(AppError::InsufficientContent);
    }

    info!("Parsing resume data...");
    let resume = parse_resume(llm, &raw_text).await?;

    let github = match resume.github_url.as_deref() {
        Some(url) => {
            info!("Attempting to fetch GitHub data...");
            enrich_or_stub(enricher, url).await
        }
        None => None,
    };

    info!("Analyzing candidate...");
    let analysis = analyze_candidate(llm, &resume, github.as_ref(), job_description).await?;

    Ok(CandidateBundle {
        resume,
        github,
        analysis,
        candidate_id: format!("candidate-{}", Uuid::new_v4()),
    })
}

/// Live lookup first; on any failure, degrade to the URL-derived stub, or to
/// `None` if even the URL cannot be parsed. Enrichment failures are never
/// surfaced to the caller.
async fn enrich_or_stub(enricher: &dyn ProfileEnricher, url: &str) -> Option<GitHubData> {
    match enricher.enrich(url).await {
        Some(data) => Some(data),
        None => {
            warn!("GitHub API unavailable, extracting basic info from URL...");
            stub_from_url(url)
        }
    }
}

/// Maps a pipeline error to the user-facing message returned in-band as
/// `{success: false, error}`.
pub fn user_message(err: &AppError) -> String {
    match err {
        // Validation messages are already user-facing; surface them verbatim.
        AppError::Validation(msg) => msg.clone(),
        AppError::Extraction(_) => {
            "Failed to extract text from file. Please try a different file.".to_string()
        }
        AppError::InsufficientContent => err.to_string(),
        // AI failures are never silently swallowed into a default bundle.
        AppError::Llm(e) => e.to_string(),
        AppError::Internal(_) => "An unexpected error occurred. Please try again.".to_string(),
    }
}
