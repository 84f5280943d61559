use serde::{Deserialize, Serialize};

use crate::models::analysis::AiAnalysis;
use crate::models::github::GitHubData;

/// Structured resume data, produced once per analysis request and immutable
/// thereafter. `raw_text` always carries the original extracted text, even
/// when no structured field could be populated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeRecord {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub summary: Option<String>,
    pub skills: Vec<String>,
    pub experience: Vec<WorkExperience>,
    pub education: Vec<Education>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub portfolio_url: Option<String>,
    pub raw_text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkExperience {
    pub company: String,
    pub position: String,
    pub duration: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub field: Option<String>,
    pub year: Option<String>,
}

/// The terminal aggregate handed to the presentation layer. Created once at
/// the end of a successful pipeline run; only ever re-read afterwards (report
/// rendering, export).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateBundle {
    pub resume: ResumeRecord,
    pub github: Option<GitHubData>,
    pub analysis: AiAnalysis,
    pub candidate_id: String,
}
