//! Service-area records: the pincodes the business delivers to and the named
//! areas inside each pincode.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A serviced pincode and its named areas.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceArea {
    pub id: i64,
    pub pincode: String,
    #[serde(default)]
    pub areas: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body for `POST /service-area/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceArea {
    pub pincode: String,
    pub areas: Vec<String>,
}

/// Whether `candidate` is a well-formed pincode: exactly six ASCII digits.
pub fn valid_pincode(candidate: &str) -> bool {
    candidate.len() == 6 && candidate.bytes().all(|b| b.is_ascii_digit())
}
