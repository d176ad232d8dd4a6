//! User, session and account payload types.

use serde::{Deserialize, Serialize};

use super::id::UserId;

/// The current user's profile as returned by `GET /users/me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Role names. Empty for regular customers that predate role assignment.
    #[serde(default)]
    pub roles: Vec<String>,
}

impl User {
    /// Full display name.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_owned()
    }
}

/// Result of `POST /auth/token`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenGrant {
    pub token: String,
    pub authenticated: bool,
}

/// Result of `POST /auth/introspect`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectResult {
    pub valid: bool,
}

/// Result of `POST /auth/register`. Registration never authenticates the
/// caller; it only reports that the account exists now.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterOutcome {
    pub authenticated: bool,
}

/// Body of `POST /auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    /// Optional; the backend assigns a default role when roles are omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Body of `PUT /users/{id}` - profile fields only, never the password.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
}

/// Body of `PUT /users/{id}/password`. The plaintext values pass straight
/// through to the backend; nothing here is ever cached client-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_decodes_from_backend_shape() {
        let json = r#"{
            "id": "u-1",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "phone": null,
            "roles": ["ROLE_USER"]
        }"#;
        let user: User = serde_json::from_str(json).expect("decode");
        assert_eq!(user.id, UserId::new("u-1"));
        assert_eq!(user.display_name(), "Ada Lovelace");
        assert_eq!(user.roles, vec!["ROLE_USER"]);
    }

    #[test]
    fn user_tolerates_missing_roles() {
        let json = r#"{"id":"u-2","firstName":"A","lastName":"B","email":"a@b.c"}"#;
        let user: User = serde_json::from_str(json).expect("decode");
        assert!(user.roles.is_empty());
        assert!(user.phone.is_none());
    }

    #[test]
    fn register_request_serializes_camel_case() {
        let req = RegisterRequest {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            password: "hunter22".into(),
            phone: None,
        };
        let json = serde_json::to_value(&req).expect("serialize");
        assert_eq!(json["firstName"], "Ada");
        // Omitted phone must not appear at all; the backend treats an
        // explicit null differently from an absent field.
        assert!(json.get("phone").is_none());
    }
}
