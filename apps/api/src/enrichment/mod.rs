//! Profile Enrichment Client — augments a resume with public GitHub signal.
//!
//! Enrichment is best-effort by contract: every network failure, timeout,
//! rate limit, or unknown handle yields `None`, never an error. The
//! orchestrator is responsible for the URL-derived stub fallback
//! (`stub_from_url`) so a record is always from one consistent source —
//! fully live or fully stubbed, never mixed.

use std::collections::BTreeMap;
use std::sync::LazyLock;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Months, Utc};
use regex::Regex;
use reqwest::Client;
use tracing::warn;

use crate::models::github::{GitHubData, GitHubProfile, GitHubRepo};

const USER_AGENT: &str = "TalentSleuth-AI-1.0";
const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";
const CACHE_CONTROL: &str = "max-age=300";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
/// Fixed pre-emptive delay before each outbound call, as a rate-limit courtesy.
const COURTESY_DELAY: Duration = Duration::from_secs(1);
/// Recency window for the derived activity description.
const RECENT_WINDOW_MONTHS: u32 = 6;

static HANDLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)github\.com/([^/?#\s]+)").unwrap());

/// Profile lookup backend. Held in `AppState` as `Arc<dyn ProfileEnricher>`
/// so pipeline tests can script live/failed lookups without a network.
#[async_trait]
pub trait ProfileEnricher: Send + Sync {
    /// Resolves a profile URL to a fully populated `GitHubData`, or `None`
    /// on any failure (bad URL, 403/404, timeout, malformed reply).
    async fn enrich(&self, github_url: &str) -> Option<GitHubData>;
}

/// Unauthenticated GitHub REST client.
#[derive(Clone)]
pub struct GitHubClient {
    client: Client,
    base_url: String,
}

impl GitHubClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .user_agent(USER_AGENT)
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
        }
    }

    async fn fetch_profile(&self, handle: &str) -> Option<GitHubProfile> {
        let url = format!("{}/users/{}", self.base_url, handle);
        let response = match self
            .client
            .get(&url)
            .header("Accept", ACCEPT_HEADER)
            .header("Cache-Control", CACHE_CONTROL)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                warn!("GitHub profile request failed: {e}");
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            match status.as_u16() {
                403 => warn!("GitHub API rate limit exceeded or access forbidden"),
                404 => warn!("GitHub user not found: {handle}"),
                other => warn!("GitHub API error: {other}"),
            }
            return None;
        }

        match response.json::<GitHubProfile>().await {
            Ok(profile) => Some(profile),
            Err(e) => {
                warn!("Failed to decode GitHub profile: {e}");
                None
            }
        }
    }

    /// Fetches up to 10 most-recently-updated repositories.
    /// A failure here is non-fatal — enrichment continues with an empty list.
    async fn fetch_repos(&self, handle: &str) -> Vec<GitHubRepo> {
        let url = format!(
            "{}/users/{}/repos?sort=updated&per_page=10",
            self.base_url, handle
        );
        let response = match self
            .client
            .get(&url)
            .header("Accept", ACCEPT_HEADER)
            .header("Cache-Control", CACHE_CONTROL)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                warn!("GitHub repos request failed: {e}");
                return Vec::new();
            }
        };

        if !response.status().is_success() {
            warn!("Failed to fetch repositories: {}", response.status());
            return Vec::new();
        }

        match response.json::<Vec<GitHubRepo>>().await {
            Ok(repos) => repos,
            Err(e) => {
                warn!("Failed to decode GitHub repositories: {e}");
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl ProfileEnricher for GitHubClient {
    async fn enrich(&self, github_url: &str) -> Option<GitHubData> {
        let handle = extract_handle(github_url)?;

        tokio::time::sleep(COURTESY_DELAY).await;
        let profile = self.fetch_profile(&handle).await?;

        tokio::time::sleep(COURTESY_DELAY).await;
        let mut repositories = self.fetch_repos(&handle).await;
        repositories.truncate(10);

        Some(assemble(profile, repositories, Utc::now()))
    }
}

/// Extracts the handle from a `github.com/<handle>` URL.
pub fn extract_handle(github_url: &str) -> Option<String> {
    HANDLE_RE
        .captures(github_url)
        .map(|c| c[1].to_string())
}

/// Derives the histogram/recency statistics over fetched repositories.
pub fn assemble(
    profile: GitHubProfile,
    repositories: Vec<GitHubRepo>,
    now: DateTime<Utc>,
) -> GitHubData {
    let languages = language_histogram(&repositories);
    let recent_activity = recent_activity(&repositories, now);
    // Star sum stands in for commit volume; the API does not expose commit
    // counts without per-repo calls.
    let total_commits = repositories.iter().map(|r| r.stargazers_count).sum();

    GitHubData {
        profile,
        repositories,
        languages,
        total_commits,
        recent_activity,
    }
}

/// Counts each repository's declared primary language. Repositories without
/// one are excluded.
pub fn language_histogram(repositories: &[GitHubRepo]) -> BTreeMap<String, u32> {
    let mut languages = BTreeMap::new();
    for repo in repositories {
        if let Some(language) = &repo.language {
            *languages.entry(language.clone()).or_insert(0) += 1;
        }
    }
    languages
}

/// Describes how many repositories were updated in the trailing 6 months.
pub fn recent_activity(repositories: &[GitHubRepo], now: DateTime<Utc>) -> String {
    let cutoff = now
        .checked_sub_months(Months::new(RECENT_WINDOW_MONTHS))
        .unwrap_or(now);
    let recent = repositories
        .iter()
        .filter(|r| r.updated_at > cutoff)
        .count();
    format!("{recent} repositories updated in the last 6 months")
}

/// Constructs a structurally complete but data-empty record from URL parsing
/// alone, used when live lookup fails. Counts are zeroed, the repository list
/// and histogram are empty.
pub fn stub_from_url(github_url: &str) -> Option<GitHubData> {
    let handle = extract_handle(github_url)?;

    Some(GitHubData {
        profile: GitHubProfile {
            login: handle.clone(),
            avatar_url: format!("https://github.com/{handle}.png"),
            html_url: github_url.to_string(),
            ..Default::default()
        },
        repositories: Vec::new(),
        languages: BTreeMap::new(),
        total_commits: 0,
        recent_activity: "GitHub profile found (detailed analysis unavailable)".to_string(),
    })
}
