//! User document models for the platform `users` collection.
//!
//! Influencer and brand accounts live in the same collection and are
//! distinguished by their `role` field.

use serde::{Deserialize, Serialize};

/// One user document as stored by the platform.
///
/// Unknown document fields are ignored. Influencer accounts carry a
/// `username`; brand accounts carry a `companyName`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UserRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(rename = "companyName", skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default)]
    pub role: String,
}

impl UserRecord {
    /// Human-readable account name: `username` when present, then
    /// `companyName`, then a placeholder.
    pub fn display_name(&self) -> &str {
        self.username
            .as_deref()
            .or(self.company_name.as_deref())
            .unwrap_or("-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_influencer() {
        let json = r#"{
            "username": "nova",
            "role": "Influencer",
            "followers": 125000,
            "email": "nova@example.com"
        }"#;
        let user: UserRecord = serde_json::from_str(json).unwrap();

        assert_eq!(user.username, Some("nova".to_string()));
        assert_eq!(user.company_name, None);
        assert_eq!(user.role, "Influencer");
        assert_eq!(user.display_name(), "nova");
    }

    #[test]
    fn test_deserialize_brand() {
        let json = r#"{
            "companyName": "Acme Beverages",
            "role": "Brand"
        }"#;
        let user: UserRecord = serde_json::from_str(json).unwrap();

        assert_eq!(user.username, None);
        assert_eq!(user.company_name, Some("Acme Beverages".to_string()));
        assert_eq!(user.role, "Brand");
        assert_eq!(user.display_name(), "Acme Beverages");
    }

    #[test]
    fn test_deserialize_minimal_document() {
        let user: UserRecord = serde_json::from_str("{}").unwrap();

        assert_eq!(user.username, None);
        assert_eq!(user.company_name, None);
        assert_eq!(user.role, "");
        assert_eq!(user.display_name(), "-");
    }

    #[test]
    fn test_display_name_prefers_username() {
        let json = r#"{
            "username": "acme-social",
            "companyName": "Acme Beverages",
            "role": "Brand"
        }"#;
        let user: UserRecord = serde_json::from_str(json).unwrap();

        assert_eq!(user.display_name(), "acme-social");
    }

    #[test]
    fn test_serialize_skips_absent_names() {
        let user = UserRecord {
            username: None,
            company_name: Some("Acme Beverages".to_string()),
            role: "Brand".to_string(),
        };
        let json = serde_json::to_string(&user).unwrap();

        assert!(!json.contains("username"), "got: {}", json);
        assert!(json.contains("companyName"), "got: {}", json);
    }
}
