use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Aggregate play statistics shown on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AnalyticsSummary {
    pub total_plays: u32,
    pub average_score: f64,
    pub average_time: f64,
    pub subscriber_count: u32,
    pub plays_per_type: Vec<PlayTypeCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PlayTypeCount {
    pub name: String,
    pub value: u32,
}
