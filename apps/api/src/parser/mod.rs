//! Resume parsing — the LLM-backed structured path plus the standalone
//! heuristic (regex) path in `heuristics`.

pub mod heuristics;
pub mod prompts;

use crate::llm_client::{extract_json_object, LlmError, TextGenerator};
use crate::models::candidate::ResumeRecord;
use crate::parser::prompts::RESUME_PARSE_PROMPT_TEMPLATE;

/// Parses raw resume text into a `ResumeRecord` via one model call.
///
/// The model's reply is scanned for its first brace-delimited JSON object and
/// decoded; `raw_text` is then force-set to the original input — the model's
/// own echo, if any, is discarded.
pub async fn parse_resume(
    llm: &dyn TextGenerator,
    raw_text: &str,
) -> Result<ResumeRecord, LlmError> {
    let prompt = RESUME_PARSE_PROMPT_TEMPLATE.replace("{raw_text}", raw_text);
    let reply = llm.generate(&prompt).await?;

    let json = extract_json_object(&reply).ok_or(LlmError::NoJson)?;
    let mut record: ResumeRecord = serde_json::from_str(json)?;

    // Always retain the original extracted text.
    record.raw_text = raw_text.to_string();

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FixedReply(&'static str);

    #[async_trait]
    impl TextGenerator for FixedReply {
        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            Ok(self.0.to_string())
        }
    }

    #[tokio::test]
    async fn test_parse_resume_decodes_json_and_forces_raw_text() {
        let llm = FixedReply(
            r#"Sure! Here is the parsed resume:
            {"name": "Jane Doe", "email": "jane@example.com", "skills": ["Python"],
             "githubUrl": "github.com/janedoe", "rawText": "MODEL ECHO"}"#,
        );
        let record = parse_resume(&llm, "original raw text").await.unwrap();
        assert_eq!(record.name.as_deref(), Some("Jane Doe"));
        assert_eq!(record.skills, vec!["Python"]);
        assert_eq!(record.github_url.as_deref(), Some("github.com/janedoe"));
        // The model's echo is discarded.
        assert_eq!(record.raw_text, "original raw text");
    }

    #[tokio::test]
    async fn test_parse_resume_missing_fields_default() {
        let llm = FixedReply(r#"{"email": "jane@example.com"}"#);
        let record = parse_resume(&llm, "text").await.unwrap();
        assert_eq!(record.name, None);
        assert!(record.experience.is_empty());
        assert!(record.education.is_empty());
    }

    #[tokio::test]
    async fn test_parse_resume_no_json_in_reply() {
        let llm = FixedReply("I could not parse that resume, sorry.");
        let err = parse_resume(&llm, "text").await.unwrap_err();
        assert!(matches!(err, LlmError::NoJson));
    }

    #[tokio::test]
    async fn test_parse_resume_malformed_json() {
        let llm = FixedReply(r#"{"name": "Jane", "skills": [unquoted]}"#);
        let err = parse_resume(&llm, "text").await.unwrap_err();
        assert!(matches!(err, LlmError::Parse(_)));
    }

    #[tokio::test]
    async fn test_parse_resume_is_idempotent() {
        let llm = FixedReply(r#"{"name": "Jane Doe", "skills": ["Python", "Rust"]}"#);
        let a = parse_resume(&llm, "same input").await.unwrap();
        let b = parse_resume(&llm, "same input").await.unwrap();
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}
