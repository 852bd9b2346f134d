use std::sync::Arc;

use game_core::{GameValidationError, new_play, new_subscriber, summarize, validate_game};
use game_persistence::{Repositories, StoreError};
use game_types::{ApiResponse, Game, MessageResponse, RecordPlayRequest, RegisterRequest};
use serde::Serialize;
use ts_rs::TS;
use warp::http::StatusCode;
use warp::hyper::body::Bytes;
use warp::reply::{Json, WithStatus};

pub const GAME_NOT_FOUND: &str = "Game not found";
pub const INVALID_GAME_DATA: &str = "Invalid game data. Missing id, title, or type.";
pub const GAME_ID_MISMATCH: &str = "Game id in body does not match the URL.";
pub const MISSING_PLAY_FIELDS: &str = "Missing required fields: gameId, score, time.";

type JsonReply = WithStatus<Json>;

fn reply_ok<T: Serialize + TS>(data: T) -> JsonReply {
    warp::reply::with_status(warp::reply::json(&ApiResponse::ok(data)), StatusCode::OK)
}

fn reply_error(message: &str, status: StatusCode) -> JsonReply {
    warp::reply::with_status(
        warp::reply::json(&ApiResponse::<()>::error(message)),
        status,
    )
}

fn internal_error(context: &str, err: StoreError) -> JsonReply {
    tracing::error!("{}: {}", context, err);
    reply_error("Internal server error", StatusCode::INTERNAL_SERVER_ERROR)
}

fn invalid_game(err: GameValidationError) -> JsonReply {
    let message = match err {
        GameValidationError::MissingId | GameValidationError::MissingTitle => {
            INVALID_GAME_DATA.to_string()
        }
        other => other.to_string(),
    };
    reply_error(&message, StatusCode::BAD_REQUEST)
}

fn parse_game(body: &Bytes) -> Result<Game, JsonReply> {
    serde_json::from_slice(body).map_err(|err| {
        tracing::debug!("Rejected game payload: {}", err);
        reply_error(INVALID_GAME_DATA, StatusCode::BAD_REQUEST)
    })
}

pub async fn list_games(
    repositories: Arc<Repositories>,
) -> Result<impl warp::Reply, warp::Rejection> {
    match repositories.games.list().await {
        Ok(games) => Ok(reply_ok(games.items)),
        Err(err) => Ok(internal_error("Failed to list games", err)),
    }
}

pub async fn get_game(
    id: String,
    repositories: Arc<Repositories>,
) -> Result<impl warp::Reply, warp::Rejection> {
    match repositories.games.exists(&id).await {
        Ok(true) => {}
        Ok(false) => return Ok(reply_error(GAME_NOT_FOUND, StatusCode::NOT_FOUND)),
        Err(err) => return Ok(internal_error("Failed to look up game", err)),
    }

    match repositories.games.get_state(&id).await {
        Ok(game) => Ok(reply_ok(game)),
        Err(err) => Ok(internal_error("Failed to load game", err)),
    }
}

pub async fn register(
    repositories: Arc<Repositories>,
    body: Bytes,
) -> Result<impl warp::Reply, warp::Rejection> {
    let request: RegisterRequest = serde_json::from_slice(&body).unwrap_or_default();
    let email = request.email.unwrap_or_default();

    let user = match new_subscriber(&email, request.name.as_deref()) {
        Ok(user) => user,
        Err(err) => return Ok(reply_error(&err.to_string(), StatusCode::BAD_REQUEST)),
    };

    match repositories.users.create(user).await {
        Ok(user) => {
            tracing::info!("Registered subscriber {}", user.id);
            Ok(reply_ok(MessageResponse::new("Successfully subscribed!")))
        }
        Err(err) => Ok(internal_error("Failed to register subscriber", err)),
    }
}

pub async fn record_play(
    repositories: Arc<Repositories>,
    body: Bytes,
) -> Result<impl warp::Reply, warp::Rejection> {
    let request: RecordPlayRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(err) => {
            tracing::debug!("Rejected play payload: {}", err);
            return Ok(reply_error(MISSING_PLAY_FIELDS, StatusCode::BAD_REQUEST));
        }
    };

    let play = match (request.game_id, request.score, request.time) {
        (Some(game_id), Some(score), Some(time)) => new_play(&game_id, score, time),
        _ => return Ok(reply_error(MISSING_PLAY_FIELDS, StatusCode::BAD_REQUEST)),
    };
    let play = match play {
        Ok(play) => play,
        Err(err) => return Ok(reply_error(&err.to_string(), StatusCode::BAD_REQUEST)),
    };

    match repositories.plays.create(play).await {
        Ok(play) => {
            tracing::debug!("Recorded play {} for game {}", play.id, play.game_id);
            Ok(reply_ok(MessageResponse::new("Play session recorded.")))
        }
        Err(err) => Ok(internal_error("Failed to record play", err)),
    }
}

pub async fn list_plays(
    repositories: Arc<Repositories>,
) -> Result<impl warp::Reply, warp::Rejection> {
    match repositories.plays.list().await {
        Ok(plays) => Ok(reply_ok(plays.items)),
        Err(err) => Ok(internal_error("Failed to list plays", err)),
    }
}

pub async fn analytics_summary(
    repositories: Arc<Repositories>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let plays = match repositories.plays.list().await {
        Ok(plays) => plays.items,
        Err(err) => return Ok(internal_error("Failed to list plays", err)),
    };
    let games = match repositories.games.list().await {
        Ok(games) => games.items,
        Err(err) => return Ok(internal_error("Failed to list games", err)),
    };
    let subscriber_count = match repositories.users.count().await {
        Ok(count) => count,
        Err(err) => return Ok(internal_error("Failed to count subscribers", err)),
    };

    Ok(reply_ok(summarize(&plays, &games, subscriber_count)))
}

pub async fn list_subscribers(
    repositories: Arc<Repositories>,
) -> Result<impl warp::Reply, warp::Rejection> {
    match repositories.users.list().await {
        Ok(users) => Ok(reply_ok(users.items)),
        Err(err) => Ok(internal_error("Failed to list subscribers", err)),
    }
}

pub async fn create_game(
    repositories: Arc<Repositories>,
    body: Bytes,
) -> Result<impl warp::Reply, warp::Rejection> {
    let game = match parse_game(&body) {
        Ok(game) => game,
        Err(reply) => return Ok(reply),
    };
    if let Err(err) = validate_game(&game) {
        return Ok(invalid_game(err));
    }

    match repositories.games.create(game).await {
        Ok(game) => {
            tracing::info!("Created {} game '{}'", game.kind(), game.id());
            Ok(reply_ok(game))
        }
        Err(err) => Ok(internal_error("Failed to create game", err)),
    }
}

pub async fn update_game(
    id: String,
    repositories: Arc<Repositories>,
    body: Bytes,
) -> Result<impl warp::Reply, warp::Rejection> {
    match repositories.games.exists(&id).await {
        Ok(true) => {}
        Ok(false) => return Ok(reply_error(GAME_NOT_FOUND, StatusCode::NOT_FOUND)),
        Err(err) => return Ok(internal_error("Failed to look up game", err)),
    }

    let game = match parse_game(&body) {
        Ok(game) => game,
        Err(reply) => return Ok(reply),
    };
    if game.id() != id {
        return Ok(reply_error(GAME_ID_MISMATCH, StatusCode::BAD_REQUEST));
    }
    if let Err(err) = validate_game(&game) {
        return Ok(invalid_game(err));
    }

    match repositories.games.save(&game).await {
        Ok(()) => {
            tracing::info!("Updated game '{}'", id);
            Ok(reply_ok(game))
        }
        Err(err) => Ok(internal_error("Failed to update game", err)),
    }
}

pub async fn delete_game(
    id: String,
    repositories: Arc<Repositories>,
) -> Result<impl warp::Reply, warp::Rejection> {
    match repositories.games.delete(&id).await {
        Ok(true) => {
            tracing::info!("Deleted game '{}'", id);
            Ok(reply_ok(MessageResponse::new("Game deleted successfully")))
        }
        Ok(false) => Ok(reply_error(GAME_NOT_FOUND, StatusCode::NOT_FOUND)),
        Err(err) => Ok(internal_error("Failed to delete game", err)),
    }
}
