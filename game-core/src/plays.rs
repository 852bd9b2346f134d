use game_types::Play;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayError {
    #[error("Missing required fields: gameId, score, time.")]
    MissingGameId,
}

/// Build the analytics record for a finished game session. The game id is
/// not checked against the catalogue.
pub fn new_play(game_id: &str, score: u32, time: u32) -> Result<Play, PlayError> {
    if game_id.is_empty() {
        return Err(PlayError::MissingGameId);
    }

    Ok(Play {
        id: Uuid::new_v4().to_string(),
        game_id: game_id.to_string(),
        score,
        time,
        played_at: chrono::Utc::now().timestamp_millis(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_play_has_unique_id() {
        let first = new_play("quiz-1", 3, 42).unwrap();
        let second = new_play("quiz-1", 3, 42).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.game_id, "quiz-1");
        assert_eq!(first.score, 3);
        assert_eq!(first.time, 42);
        assert!(Uuid::parse_str(&first.id).is_ok());
    }

    #[test]
    fn test_empty_game_id_rejected() {
        assert_eq!(new_play("", 1, 1), Err(PlayError::MissingGameId));
    }
}
