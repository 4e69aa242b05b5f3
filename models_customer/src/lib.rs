//! Customer records and the admin profile.

use chrono::{DateTime, Utc};
use models_booking::Booking;
use serde::{Deserialize, Serialize};

/// A customer as listed by `GET /auth/users` and detailed by
/// `GET /auth/users/{id}`. The detail endpoint additionally fills
/// `latest_bookings`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub total_orders: u64,
    #[serde(default)]
    pub total_spent: f64,
    /// Absent on some backend versions; defaults to inactive.
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub user_type: Option<String>,
    #[serde(default)]
    pub latest_bookings: Vec<Booking>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// The currently signed-in admin, from `GET /auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    pub role: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body for `PUT /auth/me`. Only the provided fields are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_status_defaults_to_inactive() {
        let customer: Customer =
            serde_json::from_str(r#"{"id":8,"name":"Ravi","email":"ravi@example.com"}"#).unwrap();
        assert!(!customer.status);
        assert_eq!(customer.total_orders, 0);
        assert!(customer.latest_bookings.is_empty());
    }

    #[test]
    fn update_profile_omits_unset_fields() {
        let body = UpdateProfile {
            name: Some("New Name".to_string()),
            email: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"name": "New Name"}));
    }
}
