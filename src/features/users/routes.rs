use axum::{routing::get, Router};

use crate::features::users::handlers::profile_handler;

pub fn routes() -> Router {
    Router::new().route("/api/users/me", get(profile_handler::get_profile))
}
