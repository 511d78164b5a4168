use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PushPayload {
    /// Number of commits in the push, not always sent by the events API
    #[serde(default)]
    pub size: i64,
}
