//! Booking records and the status-update payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a booking.
///
/// The canonical wire value for the third state is `"picked up"`; older
/// backend responses spell it `"pickuped"`, which is accepted on input and
/// never emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "confirmed")]
    Confirmed,
    #[serde(rename = "picked up", alias = "pickuped")]
    PickedUp,
    #[serde(rename = "delivered")]
    Delivered,
}

/// A customer booking as returned by `GET /bookings`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    pub user: BookingUser,
    pub pickup_date: DateTime<Utc>,
    pub delivery_date: DateTime<Utc>,
    #[serde(default)]
    pub full_address: String,
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub pincode: String,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub payment_status: Option<String>,
    #[serde(default)]
    pub is_paid: bool,
    #[serde(default)]
    pub items: Vec<BookingItem>,
    pub amount: f64,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

/// The customer snapshot embedded in a booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingUser {
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// A line item on a booking. The wire embeds a snapshot of the product as it
/// was when the booking was placed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingItem {
    pub id: i64,
    pub product: BookedProduct,
    pub quantity: u32,
}

/// Product snapshot inside a [`BookingItem`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookedProduct {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price_per_kg: Option<f64>,
}

/// Body for `PATCH /bookings/{id}/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingStatusUpdate {
    pub status: BookingStatus,
    pub is_paid: bool,
}

/// Response of `PATCH /bookings/{id}/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingStatusRecord {
    pub id: i64,
    pub status: BookingStatus,
    #[serde(default)]
    pub is_paid: bool,
}
