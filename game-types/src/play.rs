use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One completed game session, recorded for analytics.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Play {
    pub id: String,
    pub game_id: String,
    pub score: u32,
    pub time: u32, // seconds
    #[ts(type = "number")]
    pub played_at: i64, // milliseconds since the Unix epoch
}
