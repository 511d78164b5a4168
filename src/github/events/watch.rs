use serde::Deserialize;

/// Despite the name, a watch event is emitted when someone stars a repository. The only action
/// GitHub currently sends is `started`.
#[derive(Debug, Deserialize)]
pub struct WatchPayload {
    #[serde(default)]
    pub action: String,
}
