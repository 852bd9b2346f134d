use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Newsletter subscriber. The id is the lowercased email address.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct User {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub name: Option<String>,
    #[ts(type = "number")]
    pub created_at: i64, // milliseconds since the Unix epoch
}
