//! Domain models for billing records and invoice line items.

use chrono::{DateTime, Utc};
use entity::billing::PaymentStatus;

/// One additional-service line on an invoice.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceLine {
    pub id: i32,
    pub name: String,
    pub service_type: String,
    pub quantity: i32,
    pub unit_price: f64,
    /// Always `quantity * unit_price`, computed server-side.
    pub total: f64,
}

impl ServiceLine {
    /// Converts an entity model to a service line at the repository boundary.
    pub fn from_entity(entity: entity::billing_service_item::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            service_type: entity.service_type,
            quantity: entity.quantity,
            unit_price: entity.unit_price,
            total: entity.total,
        }
    }
}

/// A billing record with its service line items.
///
/// The mutable, authoritative source for post-booking financial state; the
/// reservation's own total stays frozen at booking time.
#[derive(Debug, Clone, PartialEq)]
pub struct Bill {
    pub id: i32,
    pub reservation_id: i32,
    pub guest_id: i32,
    /// Room charges carried over from the reservation; fixed after creation.
    pub room_charges: f64,
    pub taxes: f64,
    pub discount: f64,
    /// `room_charges + sum of line totals + taxes - discount`.
    pub total_amount: f64,
    pub payment_status: PaymentStatus,
    pub payment_method: Option<String>,
    /// Human-facing unique invoice reference.
    pub invoice_number: String,
    /// Set when payment status first becomes `paid`.
    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub items: Vec<ServiceLine>,
}

impl Bill {
    /// Combines a billing entity and its line-item entities into a domain model.
    pub fn from_entity(
        entity: entity::billing::Model,
        items: Vec<entity::billing_service_item::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            reservation_id: entity.reservation_id,
            guest_id: entity.guest_id,
            room_charges: entity.room_charges,
            taxes: entity.taxes,
            discount: entity.discount,
            total_amount: entity.total_amount,
            payment_status: entity.payment_status,
            payment_method: entity.payment_method,
            invoice_number: entity.invoice_number,
            paid_at: entity.paid_at,
            created_at: entity.created_at,
            items: items.into_iter().map(ServiceLine::from_entity).collect(),
        }
    }
}

/// Parameters for one service line on a new or updated bill.
#[derive(Debug, Clone)]
pub struct ServiceLineParams {
    pub name: String,
    pub service_type: String,
    pub quantity: i32,
    pub unit_price: f64,
    pub total: f64,
}

/// Parameters for persisting a new billing record.
///
/// Totals are computed in the service layer before this reaches the repository.
#[derive(Debug, Clone)]
pub struct CreateBillParams {
    pub reservation_id: i32,
    pub guest_id: i32,
    pub room_charges: f64,
    pub taxes: f64,
    pub discount: f64,
    pub total_amount: f64,
    pub invoice_number: String,
    pub items: Vec<ServiceLineParams>,
}

/// Parameters for updating a bill's charges.
///
/// `items`, if provided, completely replaces the stored line items.
/// `room_charges` is deliberately absent: it stays fixed after creation.
#[derive(Debug, Clone)]
pub struct UpdateBillParams {
    pub id: i32,
    pub taxes: f64,
    pub discount: f64,
    pub total_amount: f64,
    pub items: Option<Vec<ServiceLineParams>>,
}
