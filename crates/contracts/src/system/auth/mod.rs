use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
}

/// Access profile assigned to a dashboard user. The profile decides which
/// company-listing read a page uses: privileged profiles see every client
/// company, the others only the companies associated with their account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserProfile {
    #[serde(rename = "ADMIN")]
    Admin,
    #[serde(rename = "RH")]
    HumanResources,
    #[serde(rename = "GESTAO")]
    Management,
    #[serde(rename = "SOLICITANTE")]
    Requester,
}

impl UserProfile {
    pub fn is_privileged(&self) -> bool {
        matches!(self, UserProfile::Admin | UserProfile::HumanResources)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub profile: UserProfile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_admin_and_hr_are_privileged() {
        assert!(UserProfile::Admin.is_privileged());
        assert!(UserProfile::HumanResources.is_privileged());
        assert!(!UserProfile::Management.is_privileged());
        assert!(!UserProfile::Requester.is_privileged());
    }

    #[test]
    fn profile_uses_wire_names() {
        let user: UserInfo = serde_json::from_str(
            r#"{"id":"u1","username":"maria","fullName":null,"email":null,"profile":"SOLICITANTE"}"#,
        )
        .unwrap();
        assert_eq!(user.profile, UserProfile::Requester);
    }
}
