use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PullRequestPayload {
    #[serde(default)]
    pub action: String,
}
