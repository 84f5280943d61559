//! Report rendering — flattens a `CandidateBundle` into a multi-section
//! plain-text document for export. Read-only consumer of the bundle.

use std::fmt::Write;

use crate::models::candidate::CandidateBundle;

pub fn render_report(bundle: &CandidateBundle) -> String {
    let mut out = String::new();
    let resume = &bundle.resume;
    let analysis = &bundle.analysis;

    section(&mut out, "CANDIDATE ASSESSMENT REPORT");
    let _ = writeln!(out, "Candidate ID: {}", bundle.candidate_id);
    out.push('\n');

    section(&mut out, "IDENTITY");
    line(&mut out, "Name", resume.name.as_deref());
    line(&mut out, "Email", resume.email.as_deref());
    line(&mut out, "Phone", resume.phone.as_deref());
    line(&mut out, "Location", resume.location.as_deref());
    line(&mut out, "GitHub", resume.github_url.as_deref());
    line(&mut out, "LinkedIn", resume.linkedin_url.as_deref());
    line(&mut out, "Portfolio", resume.portfolio_url.as_deref());
    out.push('\n');

    section(&mut out, "SCORES");
    score(&mut out, "Overall", analysis.overall_score);
    score(&mut out, "Role Match", analysis.role_match_score);
    score(&mut out, "Technical Skills", analysis.technical_skills_score);
    score(&mut out, "Experience", analysis.experience_score);
    score(
        &mut out,
        "Profile Completeness",
        analysis.profile_completeness_score,
    );
    score(&mut out, "Data Consistency", analysis.data_consistency_score);
    out.push('\n');

    section(&mut out, "SUMMARY");
    let _ = writeln!(out, "{}", analysis.summary);
    out.push('\n');

    section(&mut out, "STRENGTHS");
    bullets(&mut out, &analysis.strengths);
    out.push('\n');

    section(&mut out, "RED FLAGS");
    if analysis.red_flags.is_empty() {
        let _ = writeln!(out, "- None identified");
    } else {
        bullets(&mut out, &analysis.red_flags);
    }
    out.push('\n');

    section(&mut out, "WORK HISTORY");
    if resume.experience.is_empty() {
        let _ = writeln!(out, "- None listed");
    } else {
        for exp in &resume.experience {
            let _ = writeln!(out, "- {} at {} ({})", exp.position, exp.company, exp.duration);
        }
    }
    out.push('\n');

    section(&mut out, "RECOMMENDATIONS");
    bullets(&mut out, &analysis.recommendations);
    out.push('\n');

    section(&mut out, "INTERVIEW QUESTIONS");
    bullets(&mut out, &analysis.interview_questions);

    out
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "=".repeat(title.len()));
}

fn line(out: &mut String, label: &str, value: Option<&str>) {
    let _ = writeln!(out, "{label}: {}", value.unwrap_or("Not provided"));
}

fn score(out: &mut String, label: &str, value: u8) {
    let _ = writeln!(out, "{label}: {value}/100");
}

fn bullets(out: &mut String, items: &[String]) {
    for item in items {
        let _ = writeln!(out, "- {item}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::analysis::normalize_analysis;
    use crate::models::candidate::{ResumeRecord, WorkExperience};

    fn sample_bundle() -> CandidateBundle {
        CandidateBundle {
            resume: ResumeRecord {
                name: Some("Jane Doe".to_string()),
                email: Some("jane@example.com".to_string()),
                experience: vec![WorkExperience {
                    company: "Acme Corp".to_string(),
                    position: "Engineer".to_string(),
                    duration: "2019 - Present".to_string(),
                    description: None,
                }],
                raw_text: "raw".to_string(),
                ..Default::default()
            },
            github: None,
            analysis: normalize_analysis(&json!({
                "overallScore": 82,
                "redFlags": ["Short tenures"],
            })),
            candidate_id: "candidate-test".to_string(),
        }
    }

    #[test]
    fn test_report_contains_all_sections() {
        let report = render_report(&sample_bundle());
        for heading in [
            "IDENTITY",
            "SCORES",
            "SUMMARY",
            "STRENGTHS",
            "RED FLAGS",
            "WORK HISTORY",
            "RECOMMENDATIONS",
            "INTERVIEW QUESTIONS",
        ] {
            assert!(report.contains(heading), "missing section {heading}");
        }
    }

    #[test]
    fn test_report_renders_scores_and_history() {
        let report = render_report(&sample_bundle());
        assert!(report.contains("Overall: 82/100"));
        assert!(report.contains("- Engineer at Acme Corp (2019 - Present)"));
        assert!(report.contains("- Short tenures"));
        assert!(report.contains("Candidate ID: candidate-test"));
    }

    #[test]
    fn test_report_handles_sparse_bundle() {
        let mut bundle = sample_bundle();
        bundle.resume.experience.clear();
        bundle.analysis.red_flags.clear();
        let report = render_report(&bundle);
        assert!(report.contains("Name: Jane Doe"));
        assert!(report.contains("Phone: Not provided"));
        assert!(report.contains("- None identified"));
        assert!(report.contains("- None listed"));
    }
}
