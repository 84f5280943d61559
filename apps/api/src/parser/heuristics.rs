//! Heuristic Resume Parser — regex rule table over normalized text.
//!
//! One named extractor per rule, each independent and order-insensitive, so
//! every heuristic can be unit-tested and swapped without touching
//! orchestration. This parser is advisory, not authoritative: it never fails,
//! and the worst case is an all-empty record with `raw_text` preserved.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::candidate::{Education, ResumeRecord, WorkExperience};

/// Fixed known-skill vocabulary matched case-insensitively anywhere in the
/// text once a skills-section heading is present.
const KNOWN_SKILLS: [&str; 30] = [
    "JavaScript",
    "TypeScript",
    "React",
    "Node.js",
    "Python",
    "Java",
    "C++",
    "C#",
    "HTML",
    "CSS",
    "Angular",
    "Vue",
    "Express",
    "MongoDB",
    "PostgreSQL",
    "MySQL",
    "AWS",
    "Docker",
    "Kubernetes",
    "Git",
    "Linux",
    "REST",
    "GraphQL",
    "Redux",
    "Next.js",
    "Tailwind",
    "Bootstrap",
    "Firebase",
    "Redis",
    "Elasticsearch",
];

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w.\-]+@[\w.\-]+\.\w+").unwrap());

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+?\d{1,3}[-.\s]?)?(?:\(\d{3}\)|\d{3})[-.\s]?\d{3}[-.\s]?\d{4}").unwrap()
});

static GITHUB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:https?://)?(?:www\.)?github\.com/[\w.\-]+").unwrap()
});

static LINKEDIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:https?://)?(?:www\.)?linkedin\.com/in/[\w.\-]+").unwrap()
});

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:https?://)?(?:www\.)?[\w\-]+(?:\.[\w\-]+)*\.(?:com|dev|io|net|org)(?:/[\w.\-/]*)?")
        .unwrap()
});

static NAME_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^([A-Z][a-z]+ [A-Z][a-z]+)").unwrap());

static NAME_LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i:name):?\s*([A-Z][a-z]+ [A-Z][a-z]+)").unwrap());

// Unanchored: "Core Skills:" or "Relevant skills include..." mid-line both
// count as a trigger.
static SKILLS_HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:Technical\s+Skills?|Skills?|Technologies?)").unwrap()
});

static EXPERIENCE_HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^\s*(?:Experience|Work History|Employment)\b").unwrap()
});

static EXPERIENCE_END_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)^\s*(?:Education|Skills?)\b").unwrap());

static EDUCATION_HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^\s*(?:Education(?:\s*&\s*Training)?|Academic Background)\b").unwrap()
});

static EDUCATION_END_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)^\s*(?:Experience|Work History|Skills?)\b").unwrap());

static JOB_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^\s*([A-Z][^,\n]*?),\s*([A-Za-z][^,\n]*?(?:Engineer|Developer|Manager|Analyst|Specialist))\s*,?\s*((?:19|20)\d{2}\s*(?:(?:[-\x{2013}]|to)\s*(?:(?:19|20)\d{2}|Present|Current))?)\s*$",
    )
    .unwrap()
});

static DEGREE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)((?:Bachelor|Master|PhD|B\.S\.|M\.S\.|B\.A\.|M\.A\.|BA|BS|MA|MS)[^,\n]*),\s*([A-Za-z .&'\-]*(?:University|College|Institute|School))(?:\s*,\s*((?:19|20)\d{2}))?",
    )
    .unwrap()
});

static INSTITUTION_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^.*(?:University|College|Institute|School).*$").unwrap()
});

/// Parses raw resume text with regexes alone. Never fails.
pub fn parse_resume_text(text: &str) -> ResumeRecord {
    let clean = normalize(text);

    ResumeRecord {
        name: extract_name(&clean),
        email: extract_email(&clean),
        phone: extract_phone(&clean),
        location: None,
        summary: None,
        skills: extract_skills(&clean),
        experience: extract_experience(&clean),
        education: extract_education(&clean),
        github_url: extract_github_url(&clean),
        linkedin_url: extract_linkedin_url(&clean),
        portfolio_url: extract_portfolio_url(&clean),
        raw_text: clean,
    }
}

/// Normalizes CRLF/CR line endings to LF.
fn normalize(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

pub fn extract_phone(text: &str) -> Option<String> {
    PHONE_RE.find(text).map(|m| m.as_str().to_string())
}

pub fn extract_github_url(text: &str) -> Option<String> {
    GITHUB_RE.find(text).map(|m| m.as_str().to_string())
}

pub fn extract_linkedin_url(text: &str) -> Option<String> {
    LINKEDIN_RE.find(text).map(|m| m.as_str().to_string())
}

/// First URL-shaped token on a generic domain that is not a github/linkedin
/// link, not an email-provider domain, and not the domain half of an email
/// address.
pub fn extract_portfolio_url(text: &str) -> Option<String> {
    for m in URL_RE.find_iter(text) {
        let url = m.as_str();
        let lower = url.to_lowercase();
        if lower.contains("github.com")
            || lower.contains("linkedin.com")
            || lower.contains("email.com")
            || lower.contains("gmail.com")
        {
            continue;
        }
        if text[..m.start()].ends_with('@') {
            continue; // domain part of an email token
        }
        return Some(url.to_string());
    }
    None
}

/// First line matching a two-capitalized-word pattern, or text following a
/// literal "Name:" label.
pub fn extract_name(text: &str) -> Option<String> {
    NAME_LINE_RE
        .captures(text)
        .or_else(|| NAME_LABEL_RE.captures(text))
        .map(|c| c[1].to_string())
}

/// Intersection of the known-skill vocabulary with case-insensitive substring
/// presence anywhere in the text. The skills-section heading acts only as a
/// trigger; matching is not limited to the section body.
pub fn extract_skills(text: &str) -> Vec<String> {
    if !SKILLS_HEADING_RE.is_match(text) {
        return Vec::new();
    }
    let lower = text.to_lowercase();
    KNOWN_SKILLS
        .iter()
        .filter(|skill| lower.contains(&skill.to_lowercase()))
        .map(|skill| skill.to_string())
        .collect()
}

pub fn extract_experience(text: &str) -> Vec<WorkExperience> {
    let Some(section) = labeled_section(text, &EXPERIENCE_HEADING_RE, &EXPERIENCE_END_RE) else {
        return Vec::new();
    };
    JOB_LINE_RE
        .captures_iter(section)
        .map(|c| WorkExperience {
            company: c[1].trim().to_string(),
            position: c[2].trim().to_string(),
            duration: c[3].trim().to_string(),
            description: None,
        })
        .collect()
}

pub fn extract_education(text: &str) -> Vec<Education> {
    let Some(section) = labeled_section(text, &EDUCATION_HEADING_RE, &EDUCATION_END_RE) else {
        return Vec::new();
    };

    let detailed: Vec<Education> = DEGREE_RE
        .captures_iter(section)
        .map(|c| Education {
            degree: c[1].trim().to_string(),
            institution: c[2].trim().to_string(),
            field: None,
            year: c.get(3).map(|y| y.as_str().to_string()),
        })
        .collect();
    if !detailed.is_empty() {
        return detailed;
    }

    // Fallback: any line naming an institution.
    INSTITUTION_LINE_RE
        .find_iter(section)
        .filter_map(|m| {
            let parts: Vec<&str> = m
                .as_str()
                .split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .collect();
            match parts.as_slice() {
                [] => None,
                [only] => Some(Education {
                    institution: only.to_string(),
                    degree: String::new(),
                    field: None,
                    year: None,
                }),
                [degree, institution, rest @ ..] => Some(Education {
                    degree: degree.to_string(),
                    institution: institution.to_string(),
                    field: None,
                    year: rest.first().map(|y| y.to_string()),
                }),
            }
        })
        .collect()
}

/// Slices the text from a section heading up to the next terminator heading
/// (or end of text). Unmatched headings yield `None`, never an error.
fn labeled_section<'a>(text: &'a str, heading: &Regex, terminators: &Regex) -> Option<&'a str> {
    let start = heading.find(text)?;
    let body_offset = start.end();
    let end = terminators
        .find(&text[body_offset..])
        .map(|t| body_offset + t.start())
        .unwrap_or(text.len());
    Some(&text[start.start()..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Jane Doe\n\
        jane@example.com | +1 415-555-1234\n\
        github.com/janedoe | linkedin.com/in/janedoe | https://janedoe.dev\n\
        \n\
        Technical Skills\n\
        Python, TypeScript, React, Docker, PostgreSQL\n\
        \n\
        Experience\n\
        Acme Corp, Senior Software Engineer, 2019 - Present\n\
        Initech, Backend Developer, 2016 - 2019\n\
        \n\
        Education\n\
        Bachelor of Science in Computer Science, Stanford University, 2016\n";

    #[test]
    fn test_extract_email_first_match() {
        assert_eq!(
            extract_email(SAMPLE).as_deref(),
            Some("jane@example.com")
        );
    }

    #[test]
    fn test_extract_phone() {
        assert_eq!(extract_phone(SAMPLE).as_deref(), Some("+1 415-555-1234"));
    }

    #[test]
    fn test_extract_github_url_case_insensitive() {
        assert_eq!(
            extract_github_url("see HTTPS://GitHub.com/JaneDoe for code").as_deref(),
            Some("HTTPS://GitHub.com/JaneDoe")
        );
    }

    #[test]
    fn test_extract_linkedin_url() {
        assert_eq!(
            extract_linkedin_url(SAMPLE).as_deref(),
            Some("linkedin.com/in/janedoe")
        );
    }

    #[test]
    fn test_portfolio_skips_github_linkedin_and_email_domains() {
        assert_eq!(
            extract_portfolio_url(SAMPLE).as_deref(),
            Some("https://janedoe.dev")
        );
    }

    #[test]
    fn test_portfolio_none_when_only_excluded_domains() {
        let text = "jane@gmail.com github.com/janedoe linkedin.com/in/janedoe";
        assert_eq!(extract_portfolio_url(text), None);
    }

    #[test]
    fn test_extract_name_from_first_line() {
        assert_eq!(extract_name(SAMPLE).as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_extract_name_from_label() {
        let text = "resume\nname: John Smith\n";
        assert_eq!(extract_name(text).as_deref(), Some("John Smith"));
    }

    #[test]
    fn test_skills_require_section_heading_as_trigger() {
        let without_heading = "I know Python and Docker very well.";
        assert!(extract_skills(without_heading).is_empty());

        let skills = extract_skills(SAMPLE);
        assert!(skills.contains(&"Python".to_string()));
        assert!(skills.contains(&"TypeScript".to_string()));
        assert!(skills.contains(&"Docker".to_string()));
        assert!(skills.contains(&"PostgreSQL".to_string()));
        assert!(!skills.contains(&"Kubernetes".to_string()));
    }

    #[test]
    fn test_skills_trigger_matches_mid_line() {
        let prefixed = "Core Skills: Python, Docker, AWS";
        let skills = extract_skills(prefixed);
        assert!(skills.contains(&"Python".to_string()));
        assert!(skills.contains(&"Docker".to_string()));
        assert!(skills.contains(&"AWS".to_string()));

        let prose = "Relevant skills include Python and React.";
        let skills = extract_skills(prose);
        assert!(skills.contains(&"Python".to_string()));
        assert!(skills.contains(&"React".to_string()));
    }

    #[test]
    fn test_extract_experience_triples() {
        let jobs = extract_experience(SAMPLE);
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].company, "Acme Corp");
        assert_eq!(jobs[0].position, "Senior Software Engineer");
        assert_eq!(jobs[0].duration, "2019 - Present");
        assert_eq!(jobs[1].company, "Initech");
    }

    #[test]
    fn test_experience_section_stops_at_education() {
        let jobs = extract_experience(SAMPLE);
        assert!(jobs.iter().all(|j| !j.company.contains("Stanford")));
    }

    #[test]
    fn test_extract_education_detailed() {
        let edu = extract_education(SAMPLE);
        assert_eq!(edu.len(), 1);
        assert!(edu[0].degree.starts_with("Bachelor of Science"));
        assert_eq!(edu[0].institution, "Stanford University");
        assert_eq!(edu[0].year.as_deref(), Some("2016"));
    }

    #[test]
    fn test_extract_education_institution_fallback() {
        let text = "Education\nStanford University\n";
        let edu = extract_education(text);
        assert_eq!(edu.len(), 1);
        assert_eq!(edu[0].institution, "Stanford University");
        assert_eq!(edu[0].degree, "");
    }

    #[test]
    fn test_unmatched_sections_yield_empty_lists() {
        let text = "Jane Doe\njane@example.com\nNothing else here.";
        assert!(extract_experience(text).is_empty());
        assert!(extract_education(text).is_empty());
    }

    #[test]
    fn test_parse_never_fails_and_preserves_raw_text() {
        let record = parse_resume_text("");
        assert_eq!(record, ResumeRecord::default());

        let record = parse_resume_text("garbage \u{fffd}\u{fffd} text\r\nmore");
        assert_eq!(record.raw_text, "garbage \u{fffd}\u{fffd} text\nmore");
    }

    #[test]
    fn test_normalize_line_endings() {
        let record = parse_resume_text("Jane Doe\r\njane@example.com\r");
        assert_eq!(record.raw_text, "Jane Doe\njane@example.com\n");
        assert_eq!(record.name.as_deref(), Some("Jane Doe"));
    }
}
