use std::sync::Arc;

use warp::Filter;

use crate::auth::{ADMIN_SECRET_HEADER, AdminAuth, require_admin};
use crate::rejection::{StoreUnavailable, handle_rejection};
use game_persistence::Repositories;

pub mod auth;
pub mod config;
pub mod handlers;
pub mod rejection;

const MAX_BODY_BYTES: u64 = 256 * 1024;

/// Hands the repositories to a handler once the game catalogue is seeded.
fn with_seeded_catalogue(
    repositories: Arc<Repositories>,
) -> impl Filter<Extract = (Arc<Repositories>,), Error = warp::Rejection> + Clone {
    warp::any()
        .map(move || repositories.clone())
        .and_then(|repositories: Arc<Repositories>| async move {
            match repositories.games.ensure_seed().await {
                Ok(_) => Ok(repositories),
                Err(err) => {
                    tracing::error!("Failed to seed game catalogue: {}", err);
                    Err(warp::reject::custom(StoreUnavailable))
                }
            }
        })
}

fn body_bytes()
-> impl Filter<Extract = (warp::hyper::body::Bytes,), Error = warp::Rejection> + Clone {
    warp::body::content_length_limit(MAX_BODY_BYTES).and(warp::body::bytes())
}

pub fn create_routes(
    repositories: Arc<Repositories>,
    admin_auth: Arc<AdminAuth>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let seeded = with_seeded_catalogue(repositories);
    let admin = require_admin(admin_auth);

    // Health check endpoint
    let health = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .map(|| warp::reply::with_status("OK", warp::http::StatusCode::OK));

    // Public game catalogue
    let list_games = warp::path!("api" / "games")
        .and(warp::get())
        .and(seeded.clone())
        .and_then(handlers::list_games);

    let get_game = warp::path!("api" / "games" / String)
        .and(warp::get())
        .and(seeded.clone())
        .and_then(handlers::get_game);

    let register = warp::path!("api" / "register")
        .and(warp::post())
        .and(seeded.clone())
        .and(body_bytes())
        .and_then(handlers::register);

    let record_play = warp::path!("api" / "play")
        .and(warp::post())
        .and(seeded.clone())
        .and(body_bytes())
        .and_then(handlers::record_play);

    // Admin panel
    let admin_plays = warp::path!("api" / "admin" / "analytics")
        .and(warp::get())
        .and(admin.clone())
        .and(seeded.clone())
        .and_then(handlers::list_plays);

    let admin_summary = warp::path!("api" / "admin" / "analytics" / "summary")
        .and(warp::get())
        .and(admin.clone())
        .and(seeded.clone())
        .and_then(handlers::analytics_summary);

    let admin_subscribers = warp::path!("api" / "admin" / "subscribers")
        .and(warp::get())
        .and(admin.clone())
        .and(seeded.clone())
        .and_then(handlers::list_subscribers);

    let admin_create_game = warp::path!("api" / "admin" / "games")
        .and(warp::post())
        .and(admin.clone())
        .and(seeded.clone())
        .and(body_bytes())
        .and_then(handlers::create_game);

    let admin_update_game = warp::path!("api" / "admin" / "games" / String)
        .and(warp::put())
        .and(admin.clone())
        .and(seeded.clone())
        .and(body_bytes())
        .and_then(handlers::update_game);

    let admin_delete_game = warp::path!("api" / "admin" / "games" / String)
        .and(warp::delete())
        .and(admin)
        .and(seeded)
        .and_then(handlers::delete_game);

    // CORS configuration
    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["content-type", ADMIN_SECRET_HEADER])
        .allow_methods(vec!["GET", "POST", "PUT", "DELETE"]);

    health
        .or(list_games)
        .or(get_game)
        .or(register)
        .or(record_play)
        .or(admin_plays)
        .or(admin_summary)
        .or(admin_subscribers)
        .or(admin_create_game)
        .or(admin_update_game)
        .or(admin_delete_game)
        .recover(handle_rejection)
        .with(cors)
        .with(warp::log("lexileap"))
}
