use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Scored candidate assessment. Every numeric field is guaranteed to be in
/// [0, 100] and every list/summary field is guaranteed non-degenerate by the
/// normalization pass in `analysis::normalize_analysis` — the raw model reply
/// never reaches callers directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiAnalysis {
    pub overall_score: u8,
    pub role_match_score: u8,
    pub technical_skills_score: u8,
    pub experience_score: u8,
    pub profile_completeness_score: u8,
    pub data_consistency_score: u8,
    pub strengths: Vec<String>,
    pub red_flags: Vec<String>,
    pub recommendations: Vec<String>,
    pub interview_questions: Vec<String>,
    pub summary: String,
    /// Skill → alignment score in [0, 100]. Keys unique, no ordering guarantee.
    pub skill_alignment: BTreeMap<String, u8>,
}
