use std::sync::Arc;

use sha2::{Digest, Sha256};
use warp::Filter;

use crate::rejection::Unauthorized;

pub const ADMIN_SECRET_HEADER: &str = "x-admin-secret";

/// Shared-secret check for the admin API.
///
/// Secrets are compared through their SHA-256 digests so the comparison time
/// does not depend on how much of the secret a caller guessed right.
pub struct AdminAuth {
    secret_digest: [u8; 32],
}

impl AdminAuth {
    pub fn new(secret: &str) -> Self {
        Self {
            secret_digest: digest(secret),
        }
    }

    pub fn verify(&self, provided: Option<&str>) -> Result<(), AuthError> {
        let provided = provided.ok_or(AuthError::MissingSecret)?;

        let difference = digest(provided)
            .iter()
            .zip(self.secret_digest.iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b));

        if difference == 0 {
            Ok(())
        } else {
            Err(AuthError::InvalidSecret)
        }
    }
}

fn digest(value: &str) -> [u8; 32] {
    Sha256::digest(value.as_bytes()).into()
}

/// Rejects with [`Unauthorized`] unless the request carries the admin secret.
pub fn require_admin(
    admin_auth: Arc<AdminAuth>,
) -> impl Filter<Extract = (), Error = warp::Rejection> + Clone {
    warp::header::optional::<String>(ADMIN_SECRET_HEADER)
        .and(warp::any().map(move || admin_auth.clone()))
        .and_then(
            |secret: Option<String>, admin_auth: Arc<AdminAuth>| async move {
                admin_auth.verify(secret.as_deref()).map_err(|err| {
                    tracing::warn!("Rejected admin request: {}", err);
                    warp::reject::custom(Unauthorized)
                })
            },
        )
        .untuple_one()
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Admin secret missing")]
    MissingSecret,
    #[error("Admin secret invalid")]
    InvalidSecret,
}
