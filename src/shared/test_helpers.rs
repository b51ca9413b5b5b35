#[cfg(test)]
use crate::features::asteroids::models::Asteroid;
#[cfg(test)]
use crate::features::auth::model::Member;
#[cfg(test)]
use crate::modules::records::MemoryRecordStore;
#[cfg(test)]
use crate::shared::constants::COLLECTION_ASTEROIDS;

#[cfg(test)]
use axum::{extract::Request, middleware::Next, response::Response, Router};

#[cfg(test)]
#[allow(dead_code)]
pub fn test_member(login_email: &str) -> Member {
    Member {
        id: "test-member-id".to_string(),
        login_email: Some(login_email.to_string()),
        login_email_verified: true,
        profile: None,
        contact: None,
        status: Some("APPROVED".to_string()),
        created_date: None,
    }
}

#[cfg(test)]
#[allow(dead_code)]
pub fn test_asteroid(id: &str, name: &str, risk_level: Option<&str>) -> Asteroid {
    Asteroid {
        id: id.to_string(),
        created_date: None,
        updated_date: None,
        name: Some(name.to_string()),
        designation: Some(format!("Designation {name}")),
        absolute_magnitude: Some(19.7),
        estimated_diameter_min: Some(310.0),
        estimated_diameter_max: Some(680.0),
        relative_velocity: Some(25_000.0),
        miss_distance: Some(31_000_000.0),
        close_approach_date: None,
        close_approach_time: None,
        risk_level: risk_level.map(str::to_string),
        is_potentially_hazardous: Some(risk_level == Some(crate::shared::constants::RISK_HIGH)),
    }
}

#[cfg(test)]
#[allow(dead_code)]
pub async fn seed_asteroid(store: &std::sync::Arc<MemoryRecordStore>, asteroid: Asteroid) {
    let value = serde_json::to_value(&asteroid).unwrap();
    store.seed(COLLECTION_ASTEROIDS, value).await;
}

#[cfg(test)]
#[allow(dead_code)]
async fn inject_member_middleware(mut request: Request, next: Next) -> Response {
    request
        .extensions_mut()
        .insert(test_member("pilot@example.com"));
    next.run(request).await
}

/// Wrap a router so every request carries a signed-in test member, bypassing
/// the session-token middleware.
#[cfg(test)]
#[allow(dead_code)]
pub fn with_member_auth(router: Router) -> Router {
    router.layer(axum::middleware::from_fn(inject_member_middleware))
}
