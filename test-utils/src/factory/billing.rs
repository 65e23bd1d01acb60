//! Billing factory for creating test billing entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::billing::PaymentStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bills with customizable fields.
///
/// The reservation and guest must already exist; their ids are required.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::billing::BillingFactory;
///
/// let bill = BillingFactory::new(&db, reservation.id, guest.id)
///     .room_charges(200.0)
///     .taxes(20.0)
///     .build()
///     .await?;
/// ```
pub struct BillingFactory<'a> {
    db: &'a DatabaseConnection,
    reservation_id: i32,
    guest_id: i32,
    room_charges: f64,
    taxes: f64,
    discount: f64,
    payment_status: PaymentStatus,
    invoice_number: String,
}

impl<'a> BillingFactory<'a> {
    /// Creates a new BillingFactory with default values.
    ///
    /// Defaults:
    /// - room_charges: `200.0`, taxes: `0.0`, discount: `0.0`
    /// - payment_status: `PaymentStatus::Pending`
    /// - invoice_number: `"INVTEST{id}"` where id is auto-incremented
    ///
    /// The total is always derived as room charges plus taxes minus discount;
    /// factory bills carry no service line items.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `reservation_id` - Id of an existing reservation
    /// - `guest_id` - Id of an existing account
    ///
    /// # Returns
    /// - `BillingFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, reservation_id: i32, guest_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            reservation_id,
            guest_id,
            room_charges: 200.0,
            taxes: 0.0,
            discount: 0.0,
            payment_status: PaymentStatus::Pending,
            invoice_number: format!("INVTEST{}", id),
        }
    }

    /// Sets the room charges.
    pub fn room_charges(mut self, room_charges: f64) -> Self {
        self.room_charges = room_charges;
        self
    }

    /// Sets the taxes.
    pub fn taxes(mut self, taxes: f64) -> Self {
        self.taxes = taxes;
        self
    }

    /// Sets the discount.
    pub fn discount(mut self, discount: f64) -> Self {
        self.discount = discount;
        self
    }

    /// Sets the payment status.
    pub fn payment_status(mut self, payment_status: PaymentStatus) -> Self {
        self.payment_status = payment_status;
        self
    }

    /// Sets the invoice number.
    pub fn invoice_number(mut self, invoice_number: impl Into<String>) -> Self {
        self.invoice_number = invoice_number.into();
        self
    }

    /// Builds and inserts the billing entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::billing::Model)` - Created billing entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::billing::Model, DbErr> {
        let total_amount = self.room_charges + self.taxes - self.discount;
        entity::billing::ActiveModel {
            reservation_id: ActiveValue::Set(self.reservation_id),
            guest_id: ActiveValue::Set(self.guest_id),
            room_charges: ActiveValue::Set(self.room_charges),
            taxes: ActiveValue::Set(self.taxes),
            discount: ActiveValue::Set(self.discount),
            total_amount: ActiveValue::Set(total_amount),
            payment_status: ActiveValue::Set(self.payment_status),
            payment_method: ActiveValue::Set(None),
            invoice_number: ActiveValue::Set(self.invoice_number),
            paid_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending bill with default values.
///
/// Shorthand for `BillingFactory::new(db, reservation_id, guest_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `reservation_id` - Id of an existing reservation
/// - `guest_id` - Id of an existing account
///
/// # Returns
/// - `Ok(entity::billing::Model)` - Created billing entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_bill(
    db: &DatabaseConnection,
    reservation_id: i32,
    guest_id: i32,
) -> Result<entity::billing::Model, DbErr> {
    BillingFactory::new(db, reservation_id, guest_id).build().await
}
