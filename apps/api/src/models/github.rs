use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Profile attributes as returned by `GET /users/{handle}`.
/// Field names follow the GitHub REST API and are kept snake_case on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubProfile {
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
    pub created_at: String,
    pub updated_at: String,
    pub avatar_url: String,
    pub html_url: String,
}

/// One repository summary from `GET /users/{handle}/repos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GitHubRepo {
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    pub updated_at: DateTime<Utc>,
    pub html_url: String,
    #[serde(default)]
    pub topics: Vec<String>,
}

/// Combined enrichment record. Either fully live (API success), a URL-derived
/// stub (zeroed counts, empty repositories), or absent entirely — a record is
/// never assembled from a mix of sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitHubData {
    pub profile: GitHubProfile,
    pub repositories: Vec<GitHubRepo>,
    /// Primary language → number of fetched repositories using it.
    pub languages: BTreeMap<String, u32>,
    /// Total star count across fetched repositories — a heuristic proxy for
    /// commit volume, not a true commit count.
    pub total_commits: u32,
    pub recent_activity: String,
}
