use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Authenticated member as the identity provider reports it.
///
/// The provider is the source of truth; this is a session-scoped copy injected
/// into request extensions by the auth middleware.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login_email: Option<String>,
    #[serde(default)]
    pub login_email_verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<MemberProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<MemberContact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "_createdDate", skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
}

impl Member {
    /// Key under which this member's watchlist entries are stored: login
    /// email, falling back to the internal member id.
    pub fn user_key(&self) -> &str {
        self.login_email.as_deref().unwrap_or(&self.id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<MemberPhoto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberPhoto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberContact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phones: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_key_prefers_login_email() {
        let member = Member {
            id: "member-1".to_string(),
            login_email: Some("pilot@example.com".to_string()),
            login_email_verified: true,
            profile: None,
            contact: None,
            status: None,
            created_date: None,
        };
        assert_eq!(member.user_key(), "pilot@example.com");
    }

    #[test]
    fn test_user_key_falls_back_to_member_id() {
        let member = Member {
            id: "member-1".to_string(),
            login_email: None,
            login_email_verified: false,
            profile: None,
            contact: None,
            status: None,
            created_date: None,
        };
        assert_eq!(member.user_key(), "member-1");
    }
}
