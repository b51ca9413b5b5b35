use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The signed-in member's profile as shown on the profile page.
///
/// Flattened from the member record: display fields come from the nested
/// profile, name and phones from the contact block.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDto {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login_email: Option<String>,
    pub login_email_verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phones: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
}

impl From<crate::features::auth::model::Member> for ProfileDto {
    fn from(member: crate::features::auth::model::Member) -> Self {
        let (nickname, title, photo_url) = match member.profile {
            Some(profile) => (
                profile.nickname,
                profile.title,
                profile.photo.and_then(|p| p.url),
            ),
            None => (None, None, None),
        };
        let (first_name, last_name, phones) = match member.contact {
            Some(contact) => (
                contact.first_name,
                contact.last_name,
                contact.phones.unwrap_or_default(),
            ),
            None => (None, None, Vec::new()),
        };

        Self {
            id: member.id,
            login_email: member.login_email,
            login_email_verified: member.login_email_verified,
            nickname,
            title,
            photo_url,
            first_name,
            last_name,
            phones,
            status: member.status,
            created_date: member.created_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::test_member;

    #[test]
    fn test_profile_flattens_nested_member_blocks() {
        let mut member = test_member("pilot@example.com");
        member.profile = Some(crate::features::auth::model::MemberProfile {
            nickname: Some("Pilot".to_string()),
            title: Some("Observer".to_string()),
            photo: Some(crate::features::auth::model::MemberPhoto {
                url: Some("https://example.com/p.png".to_string()),
            }),
        });
        member.contact = Some(crate::features::auth::model::MemberContact {
            first_name: Some("Ada".to_string()),
            last_name: Some("Vega".to_string()),
            phones: Some(vec!["+1-555-0100".to_string()]),
        });

        let dto = ProfileDto::from(member);
        assert_eq!(dto.nickname.as_deref(), Some("Pilot"));
        assert_eq!(dto.photo_url.as_deref(), Some("https://example.com/p.png"));
        assert_eq!(dto.first_name.as_deref(), Some("Ada"));
        assert_eq!(dto.phones, vec!["+1-555-0100".to_string()]);
    }

    #[test]
    fn test_profile_tolerates_sparse_member() {
        let dto = ProfileDto::from(test_member("pilot@example.com"));
        assert_eq!(dto.login_email.as_deref(), Some("pilot@example.com"));
        assert!(dto.nickname.is_none());
        assert!(dto.phones.is_empty());
    }
}
