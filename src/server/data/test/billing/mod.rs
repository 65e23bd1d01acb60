use crate::server::{
    data::billing::BillingRepository,
    model::billing::{CreateBillParams, ServiceLineParams, UpdateBillParams},
};
use chrono::Utc;
use entity::billing::PaymentStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_reservation_id;
mod update;
mod update_payment;

/// Helper for a line-item params row with a precomputed total.
fn line(name: &str, quantity: i32, unit_price: f64) -> ServiceLineParams {
    ServiceLineParams {
        name: name.to_string(),
        service_type: "service".to_string(),
        quantity,
        unit_price,
        total: quantity as f64 * unit_price,
    }
}
