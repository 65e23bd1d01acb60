use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct ServiceItemDto {
    pub name: String,
    pub service_type: String,
    /// Defaults to 1 when omitted.
    pub quantity: Option<i32>,
    pub unit_price: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct CreateBillDto {
    pub reservation_id: i32,
    pub room_charges: f64,
    #[serde(default)]
    pub additional_services: Vec<ServiceItemDto>,
    #[serde(default)]
    pub taxes: f64,
    #[serde(default)]
    pub discount: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct UpdateBillDto {
    /// Replaces all existing service line items when provided.
    pub additional_services: Option<Vec<ServiceItemDto>>,
    pub taxes: Option<f64>,
    pub discount: Option<f64>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct UpdatePaymentDto {
    /// One of "pending", "partial", "paid", "refunded".
    pub status: String,
    pub method: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct BillServiceItemDto {
    pub id: i32,
    pub name: String,
    pub service_type: String,
    pub quantity: i32,
    pub unit_price: f64,
    pub total: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct BillDto {
    pub id: i32,
    pub reservation_id: i32,
    pub guest_id: i32,
    pub room_charges: f64,
    pub additional_services: Vec<BillServiceItemDto>,
    pub taxes: f64,
    pub discount: f64,
    pub total_amount: f64,
    pub payment_status: String,
    pub payment_method: Option<String>,
    pub invoice_number: String,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub paid_at: Option<DateTime<Utc>>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}
