//! Extractor guard for member-protected handlers.
//!
//! The auth middleware resolves the bearer session token into a `Member` and
//! stores it in request extensions; `CurrentMember` pulls it back out. A route
//! using this guard without the middleware in front of it rejects with 401.

use crate::core::error::AppError;
use crate::features::auth::model::Member;
use axum::{extract::FromRequestParts, http::request::Parts};

/// Guard requiring an authenticated member.
///
/// # Example
/// ```ignore
/// pub async fn handler(CurrentMember(member): CurrentMember) { ... }
/// ```
pub struct CurrentMember(pub Member);

impl<S> FromRequestParts<S> for CurrentMember
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let member = parts
            .extensions
            .get::<Member>()
            .ok_or_else(|| AppError::Unauthorized("Sign in required".to_string()))?;

        Ok(CurrentMember(member.clone()))
    }
}
