// LLM prompt constants for the structured resume parser.

/// Resume parsing prompt template. Replace `{raw_text}` before sending.
/// The schema mirrors `ResumeRecord`'s wire format exactly.
pub const RESUME_PARSE_PROMPT_TEMPLATE: &str = r#"You are an expert resume parser. Extract the following fields from the provided resume text and return a JSON object:
{
  "name": string,
  "email": string,
  "phone": string,
  "location": string,
  "summary": string,
  "skills": string[],
  "experience": [
    {
      "company": string,
      "position": string,
      "duration": string,
      "description": string
    }
  ],
  "education": [
    {
      "institution": string,
      "degree": string,
      "field": string,
      "year": string
    }
  ],
  "githubUrl": string,
  "linkedinUrl": string,
  "portfolioUrl": string
}

Omit any field you cannot find. Do NOT include any text outside the JSON object.

Resume Text:
{raw_text}"#;
