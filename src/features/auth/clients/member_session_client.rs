use crate::core::config::IdentityConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::model::Member;

/// Client for the member-identity/session provider.
///
/// The provider is an opaque external collaborator: this client only resolves
/// a bearer session token into the member it belongs to.
pub struct MemberSessionClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl MemberSessionClient {
    pub fn new(config: IdentityConfig) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolve a session token into the authenticated member.
    ///
    /// Returns Unauthorized for rejected tokens, ExternalServiceError for
    /// provider failures.
    pub async fn member_for_token(&self, token: &str) -> Result<Member> {
        let url = format!("{}/v1/members/me", self.base_url);

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to reach identity provider: {}", e);
                AppError::ExternalServiceError(format!("Identity provider unreachable: {}", e))
            })?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(AppError::Unauthorized("Invalid session token".to_string()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Identity provider error: HTTP {} - {}", status, body);
            return Err(AppError::ExternalServiceError(format!(
                "Identity provider error: HTTP {}",
                status
            )));
        }

        response.json::<Member>().await.map_err(|e| {
            tracing::error!("Failed to parse member response: {}", e);
            AppError::ExternalServiceError(format!("Failed to parse member response: {}", e))
        })
    }
}
