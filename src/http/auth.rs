//! Caller identity extraction.
//!
//! Session issuance and token verification are an upstream concern; by the
//! time a request reaches this service the caller's identity arrives in the
//! `x-user-id` header. The extractor resolves it to a full user record so
//! handlers always see role and team membership.

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::models::user::User;
use crate::persistence::user_repo::UserRepo;
use crate::AppError;

use super::AppState;

/// Header carrying the injected caller identity.
const USER_ID_HEADER: &str = "x-user-id";

/// The authenticated caller, loaded from the user collection.
#[derive(Debug, Clone)]
pub struct AuthedUser(pub User);

impl FromRequestParts<Arc<AppState>> for AuthedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> std::result::Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| AppError::Unauthorized("missing x-user-id header".into()))?;

        let repo = UserRepo::new(Arc::clone(&state.db));
        let user = repo
            .get_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::Unauthorized("unknown user".into()))?;

        Ok(Self(user))
    }
}
