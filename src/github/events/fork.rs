use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ForkPayload {
    pub forkee: Forkee,
}

/// The repository created by the fork
#[derive(Debug, Deserialize)]
pub struct Forkee {
    /// Shown as sent, even when it isn't a valid URL
    #[serde(default)]
    pub html_url: String,
}
