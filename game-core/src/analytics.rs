use std::collections::{BTreeMap, HashMap};

use game_types::{AnalyticsSummary, Game, GameKind, Play, PlayTypeCount};

pub const UNKNOWN_GAME_TYPE: &str = "Unknown";

/// Summarise recorded plays for the admin dashboard.
///
/// Plays are bucketed by the type of the game they belong to. A play whose
/// game is no longer in the catalogue lands in the `Unknown` bucket.
pub fn summarize(plays: &[Play], games: &[Game], subscriber_count: usize) -> AnalyticsSummary {
    let total_plays = plays.len();
    if total_plays == 0 {
        return AnalyticsSummary {
            subscriber_count: subscriber_count as u32,
            ..Default::default()
        };
    }

    let kinds: HashMap<&str, GameKind> = games
        .iter()
        .map(|game| (game.id(), game.kind()))
        .collect();

    let mut per_type: BTreeMap<String, u32> = BTreeMap::new();
    for play in plays {
        let name = kinds
            .get(play.game_id.as_str())
            .map(GameKind::to_string)
            .unwrap_or_else(|| UNKNOWN_GAME_TYPE.to_string());
        *per_type.entry(name).or_insert(0) += 1;
    }

    let score_sum: f64 = plays.iter().map(|play| f64::from(play.score)).sum();
    let time_sum: f64 = plays.iter().map(|play| f64::from(play.time)).sum();

    tracing::debug!(
        "Summarised {} plays across {} game types",
        total_plays,
        per_type.len()
    );

    AnalyticsSummary {
        total_plays: total_plays as u32,
        average_score: round_one_decimal(score_sum / total_plays as f64),
        average_time: round_one_decimal(time_sum / total_plays as f64),
        subscriber_count: subscriber_count as u32,
        plays_per_type: per_type
            .into_iter()
            .map(|(name, value)| PlayTypeCount { name, value })
            .collect(),
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
