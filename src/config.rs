use std::time::Duration;

use url::Url;

const GITHUB_API_URL: &str = "https://api.github.com";
const USER_AGENT: &str = "GitHubActivityCLI";

#[derive(Debug, Clone)]
pub struct ActivityConfig {
    /// Base URL of the GitHub REST API, event lists live under `/users/<username>/events`
    pub api_url: Url,
    /// Sent with every request, GitHub refuses requests without a user agent
    pub user_agent: String,
    /// Deadline for the whole request, from connecting until the response body has been read
    pub timeout: Duration,
    /// How many of the most recent events are shown
    pub window: usize,
}

impl Default for ActivityConfig {
    fn default() -> Self {
        Self {
            api_url: Url::parse(GITHUB_API_URL).expect("GitHub API URL is valid"),
            user_agent: USER_AGENT.to_owned(),
            timeout: Duration::from_secs(1),
            window: 30,
        }
    }
}
