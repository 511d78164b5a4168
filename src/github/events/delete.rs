use serde::Deserialize;

use crate::github::events::RefType;

#[derive(Debug, Deserialize)]
pub struct DeletePayload {
    #[serde(default)]
    pub ref_type: RefType,
}
