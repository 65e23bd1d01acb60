//! Billing repository.
//!
//! Database operations for billing records and their service line items.
//! A bill row owns its line items; updates that replace the lines delete the
//! old rows and insert the new set.

use chrono::{DateTime, Utc};
use entity::billing::PaymentStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::billing::{Bill, CreateBillParams, ServiceLineParams, UpdateBillParams};

/// Repository providing database operations for billing records.
pub struct BillingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BillingRepository<'a> {
    /// Creates a new BillingRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Persists a new billing record with its service line items.
    ///
    /// Totals were computed in the service layer; payment status starts as
    /// `pending` with no payment method or paid timestamp.
    ///
    /// # Returns
    /// - `Ok(Bill)` - The created bill with its line items
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateBillParams) -> Result<Bill, DbErr> {
        let entity = entity::billing::ActiveModel {
            reservation_id: ActiveValue::Set(params.reservation_id),
            guest_id: ActiveValue::Set(params.guest_id),
            room_charges: ActiveValue::Set(params.room_charges),
            taxes: ActiveValue::Set(params.taxes),
            discount: ActiveValue::Set(params.discount),
            total_amount: ActiveValue::Set(params.total_amount),
            payment_status: ActiveValue::Set(PaymentStatus::Pending),
            payment_method: ActiveValue::Set(None),
            invoice_number: ActiveValue::Set(params.invoice_number),
            paid_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let items = self.insert_items(entity.id, params.items).await?;

        Ok(Bill::from_entity(entity, items))
    }

    /// Gets a bill by id, including its line items.
    ///
    /// # Returns
    /// - `Ok(Some(Bill))` - The bill
    /// - `Ok(None)` - No bill with this id
    /// - `Err(DbErr)` - Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Bill>, DbErr> {
        let Some(entity) = entity::prelude::Billing::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let items = self.get_items(entity.id).await?;

        Ok(Some(Bill::from_entity(entity, items)))
    }

    /// Gets the bill attached to a reservation, if one exists.
    ///
    /// When several bills reference the same reservation the most recently
    /// created one wins.
    ///
    /// # Returns
    /// - `Ok(Some(Bill))` - The reservation's bill
    /// - `Ok(None)` - No bill for this reservation
    /// - `Err(DbErr)` - Database error
    pub async fn get_by_reservation_id(&self, reservation_id: i32) -> Result<Option<Bill>, DbErr> {
        let Some(entity) = entity::prelude::Billing::find()
            .filter(entity::billing::Column::ReservationId.eq(reservation_id))
            .order_by_desc(entity::billing::Column::CreatedAt)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let items = self.get_items(entity.id).await?;

        Ok(Some(Bill::from_entity(entity, items)))
    }

    /// Updates a bill's taxes, discount and total, optionally replacing its
    /// line items.
    ///
    /// Room charges are never touched; they stay fixed at the value carried
    /// over from the reservation.
    ///
    /// # Returns
    /// - `Ok(Bill)` - The updated bill with its current line items
    /// - `Err(DbErr)` - Bill not found or database error
    pub async fn update(&self, params: UpdateBillParams) -> Result<Bill, DbErr> {
        let bill = entity::prelude::Billing::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Bill {} not found",
                params.id
            )))?;

        let mut active_model: entity::billing::ActiveModel = bill.into();
        active_model.taxes = ActiveValue::Set(params.taxes);
        active_model.discount = ActiveValue::Set(params.discount);
        active_model.total_amount = ActiveValue::Set(params.total_amount);

        let updated = active_model.update(self.db).await?;

        let items = match params.items {
            Some(items) => {
                entity::prelude::BillingServiceItem::delete_many()
                    .filter(entity::billing_service_item::Column::BillingId.eq(updated.id))
                    .exec(self.db)
                    .await?;
                self.insert_items(updated.id, items).await?
            }
            None => self.get_items(updated.id).await?,
        };

        Ok(Bill::from_entity(updated, items))
    }

    /// Records a payment status change on a bill.
    ///
    /// # Arguments
    /// - `id` - Bill to update
    /// - `payment_status` - New payment status
    /// - `payment_method` - Payment method, when one was supplied
    /// - `paid_at` - Payment timestamp, set when the bill first becomes paid
    ///
    /// # Returns
    /// - `Ok(Bill)` - The updated bill with its line items
    /// - `Err(DbErr)` - Bill not found or database error
    pub async fn update_payment(
        &self,
        id: i32,
        payment_status: PaymentStatus,
        payment_method: Option<String>,
        paid_at: Option<DateTime<Utc>>,
    ) -> Result<Bill, DbErr> {
        let bill = entity::prelude::Billing::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Bill {} not found", id)))?;

        let mut active_model: entity::billing::ActiveModel = bill.into();
        active_model.payment_status = ActiveValue::Set(payment_status);
        if payment_method.is_some() {
            active_model.payment_method = ActiveValue::Set(payment_method);
        }
        if paid_at.is_some() {
            active_model.paid_at = ActiveValue::Set(paid_at);
        }

        let updated = active_model.update(self.db).await?;
        let items = self.get_items(updated.id).await?;

        Ok(Bill::from_entity(updated, items))
    }

    /// Inserts line items for a bill, preserving their order.
    async fn insert_items(
        &self,
        billing_id: i32,
        items: Vec<ServiceLineParams>,
    ) -> Result<Vec<entity::billing_service_item::Model>, DbErr> {
        let mut inserted = Vec::with_capacity(items.len());

        for item in items {
            let entity = entity::billing_service_item::ActiveModel {
                billing_id: ActiveValue::Set(billing_id),
                name: ActiveValue::Set(item.name),
                service_type: ActiveValue::Set(item.service_type),
                quantity: ActiveValue::Set(item.quantity),
                unit_price: ActiveValue::Set(item.unit_price),
                total: ActiveValue::Set(item.total),
                ..Default::default()
            }
            .insert(self.db)
            .await?;

            inserted.push(entity);
        }

        Ok(inserted)
    }

    /// Loads a bill's line items ordered by id.
    async fn get_items(
        &self,
        billing_id: i32,
    ) -> Result<Vec<entity::billing_service_item::Model>, DbErr> {
        entity::prelude::BillingServiceItem::find()
            .filter(entity::billing_service_item::Column::BillingId.eq(billing_id))
            .order_by_asc(entity::billing_service_item::Column::Id)
            .all(self.db)
            .await
    }
}
