// LLM prompt constants for the candidate analyzer.

/// Candidate analysis prompt template.
/// Replace: {resume_block}, {github_block}, {job_description}
pub const ANALYZE_PROMPT_TEMPLATE: &str = r#"You are an expert AI talent analyst. Analyze the following candidate data and provide a comprehensive assessment.

{resume_block}

{github_block}

JOB DESCRIPTION:
{job_description}

Please provide a comprehensive analysis in the following JSON format:
{
  "overallScore": number (0-100),
  "roleMatchScore": number (0-100),
  "technicalSkillsScore": number (0-100),
  "experienceScore": number (0-100),
  "profileCompletenessScore": number (0-100),
  "dataConsistencyScore": number (0-100),
  "strengths": ["strength1", "strength2", "strength3"],
  "redFlags": ["flag1", "flag2"],
  "recommendations": ["recommendation1", "recommendation2", "recommendation3"],
  "interviewQuestions": ["question1", "question2", "question3"],
  "summary": "A comprehensive 2-3 sentence summary of the candidate",
  "skillAlignment": {
    "skill1": score (0-100),
    "skill2": score (0-100)
  }
}

Focus on:
1. Technical skill alignment with job requirements
2. Experience relevance and progression
3. GitHub activity and code quality indicators (if available)
4. Red flags like employment gaps, skill mismatches, no relevant projects on GitHub
5. Specific recommendations for the hiring decision
6. Tailored interview questions based on the analysis
7. roleMatchScore based on how well the candidate fits the job description and overallScore

Provide specific, actionable insights based on the data provided."#;
