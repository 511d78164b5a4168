use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct IssuesPayload {
    #[serde(default)]
    pub action: String,
}
