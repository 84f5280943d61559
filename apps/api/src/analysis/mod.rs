//! Candidate Analyzer — combines resume, enrichment, and job description
//! into one scored assessment via a single model call.
//!
//! The model is treated as unreliable: it may omit fields, return scores out
//! of range, or wrap JSON in prose. `normalize_analysis` repairs the reply
//! field-by-field against a fixed default table — this is mandatory
//! normalization applied unconditionally, not an error path.

pub mod prompts;

use std::collections::BTreeMap;

use serde_json::Value;

use crate::analysis::prompts::ANALYZE_PROMPT_TEMPLATE;
use crate::llm_client::{extract_json_object, LlmError, TextGenerator};
use crate::models::analysis::AiAnalysis;
use crate::models::candidate::ResumeRecord;
use crate::models::github::GitHubData;

const DEFAULT_STRENGTHS: [&str; 2] = ["Strong technical background", "Good experience progression"];
const DEFAULT_RECOMMENDATIONS: [&str; 2] =
    ["Consider for technical interview", "Assess cultural fit"];
const DEFAULT_INTERVIEW_QUESTIONS: [&str; 2] = [
    "Tell me about your recent projects",
    "How do you approach problem-solving?",
];
const DEFAULT_SUMMARY: &str =
    "Candidate shows promise with relevant technical skills and experience.";

/// Scores the candidate against the job description. One model call, then
/// mandatory field-by-field normalization of the reply.
pub async fn analyze_candidate(
    llm: &dyn TextGenerator,
    resume: &ResumeRecord,
    github: Option<&GitHubData>,
    job_description: &str,
) -> Result<AiAnalysis, LlmError> {
    let prompt = build_prompt(resume, github, job_description);
    let reply = llm.generate(&prompt).await?;

    let json = extract_json_object(&reply).ok_or(LlmError::NoJson)?;
    let raw: Value = serde_json::from_str(json)?;

    Ok(normalize_analysis(&raw))
}

pub fn build_prompt(
    resume: &ResumeRecord,
    github: Option<&GitHubData>,
    job_description: &str,
) -> String {
    let job_description = if job_description.trim().is_empty() {
        "No job description provided"
    } else {
        job_description
    };

    ANALYZE_PROMPT_TEMPLATE
        .replace("{resume_block}", &format_resume_block(resume))
        .replace("{github_block}", &format_github_block(github))
        .replace("{job_description}", job_description)
}

fn format_resume_block(resume: &ResumeRecord) -> String {
    let skills = if resume.skills.is_empty() {
        "None listed".to_string()
    } else {
        resume.skills.join(", ")
    };

    let experience = if resume.experience.is_empty() {
        "None listed".to_string()
    } else {
        resume
            .experience
            .iter()
            .map(|exp| format!("{} at {} ({})", exp.position, exp.company, exp.duration))
            .collect::<Vec<_>>()
            .join("; ")
    };

    format!(
        "RESUME DATA:\n\
         Name: {}\n\
         Email: {}\n\
         Skills: {}\n\
         Experience: {}\n\
         GitHub URL: {}\n\
         LinkedIn URL: {}",
        resume.name.as_deref().unwrap_or("Not provided"),
        resume.email.as_deref().unwrap_or("Not provided"),
        skills,
        experience,
        resume.github_url.as_deref().unwrap_or("Not provided"),
        resume.linkedin_url.as_deref().unwrap_or("Not provided"),
    )
}

fn format_github_block(github: Option<&GitHubData>) -> String {
    let Some(data) = github else {
        return "GITHUB DATA: Not available".to_string();
    };

    let languages = if data.languages.is_empty() {
        "None detected".to_string()
    } else {
        data.languages
            .iter()
            .map(|(lang, count)| format!("{lang} ({count} repos)"))
            .collect::<Vec<_>>()
            .join(", ")
    };

    let top_repos = if data.repositories.is_empty() {
        "No repositories found".to_string()
    } else {
        data.repositories
            .iter()
            .take(5)
            .map(|repo| {
                format!(
                    "{} ({}, {} stars)",
                    repo.name,
                    repo.language.as_deref().unwrap_or("Unknown"),
                    repo.stargazers_count
                )
            })
            .collect::<Vec<_>>()
            .join("; ")
    };

    format!(
        "GITHUB DATA:\n\
         Profile: {}\n\
         Bio: {}\n\
         Company: {}\n\
         Location: {}\n\
         Public Repos: {}\n\
         Followers: {}\n\
         Programming Languages: {}\n\
         Recent Activity: {}\n\
         Top Repositories: {}",
        data.profile.name.as_deref().unwrap_or(&data.profile.login),
        data.profile.bio.as_deref().unwrap_or("No bio"),
        data.profile.company.as_deref().unwrap_or("Not specified"),
        data.profile.location.as_deref().unwrap_or("Not specified"),
        data.profile.public_repos,
        data.profile.followers,
        languages,
        data.recent_activity,
        top_repos,
    )
}

/// Repairs a raw model reply into a well-formed `AiAnalysis`.
///
/// Every field gets a named default when absent or of the wrong shape; the
/// six scores are clamped into [0, 100] when present (a model-returned value
/// inside the range is stored as-is, including an honest zero). Applied per
/// field — a single bad field never short-circuits the rest.
pub fn normalize_analysis(raw: &Value) -> AiAnalysis {
    AiAnalysis {
        overall_score: score_field(raw, "overallScore", 75),
        role_match_score: score_field(raw, "roleMatchScore", 80),
        technical_skills_score: score_field(raw, "technicalSkillsScore", 85),
        experience_score: score_field(raw, "experienceScore", 70),
        profile_completeness_score: score_field(raw, "profileCompletenessScore", 90),
        data_consistency_score: score_field(raw, "dataConsistencyScore", 95),
        strengths: list_field(raw, "strengths", &DEFAULT_STRENGTHS),
        red_flags: list_field(raw, "redFlags", &[]),
        recommendations: list_field(raw, "recommendations", &DEFAULT_RECOMMENDATIONS),
        interview_questions: list_field(raw, "interviewQuestions", &DEFAULT_INTERVIEW_QUESTIONS),
        summary: raw
            .get("summary")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| DEFAULT_SUMMARY.to_string()),
        skill_alignment: alignment_field(raw, "skillAlignment"),
    }
}

fn score_field(raw: &Value, key: &str, default: u8) -> u8 {
    match raw.get(key).and_then(Value::as_f64) {
        Some(v) => v.clamp(0.0, 100.0).round() as u8,
        None => default,
    }
}

/// Arrays that are absent, wrong-shaped, or contain no string items fall back
/// to the default list.
fn list_field(raw: &Value, key: &str, default: &[&str]) -> Vec<String> {
    let items: Vec<String> = raw
        .get(key)
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    if items.is_empty() && !default.is_empty() {
        return default.iter().map(|s| s.to_string()).collect();
    }
    items
}

fn alignment_field(raw: &Value, key: &str) -> BTreeMap<String, u8> {
    raw.get(key)
        .and_then(Value::as_object)
        .map(|obj| {
            obj.iter()
                .filter_map(|(skill, v)| {
                    v.as_f64()
                        .map(|score| (skill.clone(), score.clamp(0.0, 100.0).round() as u8))
                })
                .collect()
        })
        .unwrap_or_default()
}
