//! Axum route handlers for the candidate analysis API.

use axum::extract::{Multipart, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;
use crate::extract::UploadedDocument;
use crate::models::candidate::{CandidateBundle, ResumeRecord};
use crate::parser::heuristics;
use crate::pipeline::{run_pipeline, user_message};
use crate::report::render_report;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// In-band result envelope for the analyze route. Expected pipeline failures
/// come back as `{success: false, error}` with HTTP 200 — the caller gets a
/// single synchronous result either way, no job id to poll.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<CandidateBundle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalyzeResponse {
    fn ok(data: CandidateBundle) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ParsePreviewRequest {
    pub raw_text: String,
}

#[derive(Debug, Serialize)]
pub struct ParsePreviewResponse {
    pub resume: ResumeRecord,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/candidates/analyze
///
/// Multipart form: `resume` file part + optional `jobDescription` text part.
/// Runs the full pipeline and returns the combined `CandidateBundle`.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Json<AnalyzeResponse> {
    let mut doc: Option<UploadedDocument> = None;
    let mut job_description = String::new();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                warn!("Failed to read multipart body: {e}");
                return Json(AnalyzeResponse::failed(
                    "An unexpected error occurred. Please try again.",
                ));
            }
        };

        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("resume") => {
                let media_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                match field.bytes().await {
                    Ok(bytes) => doc = Some(UploadedDocument { bytes, media_type }),
                    Err(e) => {
                        warn!("Failed to read resume part: {e}");
                        return Json(AnalyzeResponse::failed(
                            "An unexpected error occurred. Please try again.",
                        ));
                    }
                }
            }
            Some("jobDescription") => {
                job_description = field.text().await.unwrap_or_default();
            }
            _ => {}
        }
    }

    let Some(doc) = doc else {
        return Json(AnalyzeResponse::failed("No file provided"));
    };

    match run_pipeline(
        state.llm.as_ref(),
        state.enricher.as_ref(),
        doc,
        &job_description,
    )
    .await
    {
        Ok(bundle) => Json(AnalyzeResponse::ok(bundle)),
        Err(e) => {
            warn!("Analysis pipeline failed: {e}");
            Json(AnalyzeResponse::failed(user_message(&e)))
        }
    }
}

/// POST /api/v1/candidates/parse-preview
///
/// Runs only the heuristic (regex) parser over raw text. Needs no AI
/// credential; useful for previewing extraction without burning a model call.
pub async fn handle_parse_preview(
    Json(request): Json<ParsePreviewRequest>,
) -> Result<Json<ParsePreviewResponse>, AppError> {
    if request.raw_text.trim().is_empty() {
        return Err(AppError::Validation("raw_text cannot be empty".to_string()));
    }

    let resume = heuristics::parse_resume_text(&request.raw_text);

    Ok(Json(ParsePreviewResponse { resume }))
}

/// POST /api/v1/candidates/report
///
/// Renders a previously returned `CandidateBundle` into the flat
/// multi-section plain-text report. Read-only over the bundle.
pub async fn handle_report(Json(bundle): Json<CandidateBundle>) -> String {
    render_report(&bundle)
}
