use chrono::Utc;
use entity::billing::PaymentStatus;
use sea_orm::{ActiveEnum, DatabaseConnection};

use crate::{
    model::billing::{
        BillDto, BillServiceItemDto, CreateBillDto, ServiceItemDto, UpdateBillDto,
        UpdatePaymentDto,
    },
    server::{
        data::{billing::BillingRepository, reservation::ReservationRepository},
        error::{auth::AuthError, AppError},
        mailer::Mailer,
        model::{
            billing::{Bill, CreateBillParams, ServiceLineParams, UpdateBillParams},
            reservation::Reservation,
            user::User,
        },
        service::{notification::NotificationService, reservation::ReservationService},
    },
};

/// Service for billing records.
///
/// The bill is the mutable financial record for a stay; the reservation's
/// own total stays frozen at booking time. The total is always derived the
/// same way: room charges plus the sum of service line totals plus taxes
/// minus discount, with room charges fixed after creation.
pub struct BillingService<'a> {
    db: &'a DatabaseConnection,
    mailer: &'a Mailer,
}

impl<'a> BillingService<'a> {
    /// Creates a new BillingService instance.
    pub fn new(db: &'a DatabaseConnection, mailer: &'a Mailer) -> Self {
        Self { db, mailer }
    }

    /// Creates a bill for a reservation.
    ///
    /// Line totals are always recomputed server-side as quantity times unit
    /// price. The guest gets an invoice notification and email best-effort.
    ///
    /// # Arguments
    /// - `dto` - Bill creation data
    ///
    /// # Returns
    /// - `Ok(BillDto)` - The created bill
    /// - `Err(AppError)` - Reservation not found, validation failure, or
    ///   database error
    pub async fn create(&self, dto: CreateBillDto) -> Result<BillDto, AppError> {
        let reservation = ReservationRepository::new(self.db)
            .get_by_id(dto.reservation_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))?;

        if dto.room_charges < 0.0 {
            return Err(AppError::BadRequest(
                "Room charges must not be negative".to_string(),
            ));
        }
        Self::validate_adjustments(dto.taxes, dto.discount)?;

        let (lines, services_total) = Self::build_lines(&dto.additional_services)?;
        let total_amount = dto.room_charges + services_total + dto.taxes - dto.discount;

        let bill = BillingRepository::new(self.db)
            .create(CreateBillParams {
                reservation_id: reservation.id,
                guest_id: reservation.guest_id,
                room_charges: dto.room_charges,
                taxes: dto.taxes,
                discount: dto.discount,
                total_amount,
                invoice_number: ReservationService::reference_number("INV", 4),
                items: lines,
            })
            .await?;

        let notifications = NotificationService::new(self.db, self.mailer);
        if let Err(err) = notifications.notify_invoice(&bill).await {
            tracing::warn!(bill_id = bill.id, "Failed to dispatch invoice notification: {}", err);
        }

        Ok(Self::to_dto(&bill))
    }

    /// Creates the initial bill that accompanies a new booking.
    ///
    /// Room charges carry over the reservation's frozen total; taxes,
    /// discount and service lines start at zero. No invoice notification is
    /// sent, the booking dispatch covers the guest.
    ///
    /// # Returns
    /// - `Ok(Bill)` - The created bill
    /// - `Err(AppError)` - Database error
    pub async fn create_for_booking(&self, reservation: &Reservation) -> Result<Bill, AppError> {
        let bill = BillingRepository::new(self.db)
            .create(CreateBillParams {
                reservation_id: reservation.id,
                guest_id: reservation.guest_id,
                room_charges: reservation.total_amount,
                taxes: 0.0,
                discount: 0.0,
                total_amount: reservation.total_amount,
                invoice_number: ReservationService::reference_number("INV", 4),
                items: Vec::new(),
            })
            .await?;

        Ok(bill)
    }

    /// Gets a bill by id.
    ///
    /// Guests can only see their own bills; staff and admins can see any.
    ///
    /// # Returns
    /// - `Ok(BillDto)` - The bill
    /// - `Err(AppError)` - Not found, access violation, or database error
    pub async fn get_by_id(&self, actor: &User, id: i32) -> Result<BillDto, AppError> {
        let bill = BillingRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Bill not found".to_string()))?;

        Self::check_access(actor, &bill)?;

        Ok(Self::to_dto(&bill))
    }

    /// Gets the bill attached to a reservation.
    ///
    /// Guests can only see bills for their own reservations.
    ///
    /// # Returns
    /// - `Ok(BillDto)` - The reservation's bill
    /// - `Err(AppError)` - No bill for this reservation, access violation, or
    ///   database error
    pub async fn get_by_reservation(
        &self,
        actor: &User,
        reservation_id: i32,
    ) -> Result<BillDto, AppError> {
        let bill = BillingRepository::new(self.db)
            .get_by_reservation_id(reservation_id)
            .await?
            .ok_or_else(|| AppError::NotFound("No bill for this reservation".to_string()))?;

        Self::check_access(actor, &bill)?;

        Ok(Self::to_dto(&bill))
    }

    /// Updates a bill's taxes, discount and service lines.
    ///
    /// The total is recomputed from the stored room charges and the new
    /// values, so re-submitting the same update leaves the bill unchanged.
    /// Omitted fields keep their current value; provided service lines
    /// replace the stored set entirely.
    ///
    /// # Returns
    /// - `Ok(BillDto)` - The updated bill
    /// - `Err(AppError)` - Not found, validation failure, or database error
    pub async fn update(&self, id: i32, dto: UpdateBillDto) -> Result<BillDto, AppError> {
        let repo = BillingRepository::new(self.db);

        let bill = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Bill not found".to_string()))?;

        let taxes = dto.taxes.unwrap_or(bill.taxes);
        let discount = dto.discount.unwrap_or(bill.discount);
        Self::validate_adjustments(taxes, discount)?;

        let (lines, services_total) = match &dto.additional_services {
            Some(items) => {
                let (lines, total) = Self::build_lines(items)?;
                (Some(lines), total)
            }
            None => (
                None,
                bill.items.iter().map(|item| item.total).sum::<f64>(),
            ),
        };

        let total_amount = bill.room_charges + services_total + taxes - discount;

        let updated = repo
            .update(UpdateBillParams {
                id,
                taxes,
                discount,
                total_amount,
                items: lines,
            })
            .await?;

        Ok(Self::to_dto(&updated))
    }

    /// Records a payment status change on a bill.
    ///
    /// The paid timestamp is stamped the first time the bill becomes `paid`
    /// and never overwritten afterwards.
    ///
    /// # Returns
    /// - `Ok(BillDto)` - The updated bill
    /// - `Err(AppError)` - Not found, unknown status, or database error
    pub async fn update_payment(
        &self,
        id: i32,
        dto: UpdatePaymentDto,
    ) -> Result<BillDto, AppError> {
        let repo = BillingRepository::new(self.db);

        let bill = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Bill not found".to_string()))?;

        let status = PaymentStatus::try_from_value(&dto.status)
            .map_err(|_| AppError::BadRequest(format!("Unknown payment status '{}'", dto.status)))?;

        let paid_at = if status == PaymentStatus::Paid && bill.paid_at.is_none() {
            Some(Utc::now())
        } else {
            None
        };

        let updated = repo.update_payment(id, status, dto.method, paid_at).await?;

        Ok(Self::to_dto(&updated))
    }

    /// Guests can only touch their own bills.
    fn check_access(actor: &User, bill: &Bill) -> Result<(), AppError> {
        if !actor.role.is_elevated() && bill.guest_id != actor.id {
            return Err(AuthError::AccessDenied(
                actor.id,
                "Bill belongs to another guest".to_string(),
            )
            .into());
        }
        Ok(())
    }

    /// Validates tax and discount amounts from a DTO.
    fn validate_adjustments(taxes: f64, discount: f64) -> Result<(), AppError> {
        if taxes < 0.0 {
            return Err(AppError::BadRequest(
                "Taxes must not be negative".to_string(),
            ));
        }
        if discount < 0.0 {
            return Err(AppError::BadRequest(
                "Discount must not be negative".to_string(),
            ));
        }
        Ok(())
    }

    /// Builds service line parameters from DTO items, recomputing each line
    /// total and returning the sum of all lines.
    fn build_lines(items: &[ServiceItemDto]) -> Result<(Vec<ServiceLineParams>, f64), AppError> {
        let mut lines = Vec::with_capacity(items.len());
        let mut services_total = 0.0;

        for item in items {
            let quantity = item.quantity.unwrap_or(1);
            if quantity < 1 {
                return Err(AppError::BadRequest(
                    "Service quantity must be at least 1".to_string(),
                ));
            }
            if item.unit_price < 0.0 {
                return Err(AppError::BadRequest(
                    "Service unit price must not be negative".to_string(),
                ));
            }

            let total = quantity as f64 * item.unit_price;
            services_total += total;

            lines.push(ServiceLineParams {
                name: item.name.clone(),
                service_type: item.service_type.clone(),
                quantity,
                unit_price: item.unit_price,
                total,
            });
        }

        Ok((lines, services_total))
    }

    /// Converts a bill domain model into its public DTO.
    fn to_dto(bill: &Bill) -> BillDto {
        BillDto {
            id: bill.id,
            reservation_id: bill.reservation_id,
            guest_id: bill.guest_id,
            room_charges: bill.room_charges,
            additional_services: bill
                .items
                .iter()
                .map(|item| BillServiceItemDto {
                    id: item.id,
                    name: item.name.clone(),
                    service_type: item.service_type.clone(),
                    quantity: item.quantity,
                    unit_price: item.unit_price,
                    total: item.total,
                })
                .collect(),
            taxes: bill.taxes,
            discount: bill.discount,
            total_amount: bill.total_amount,
            payment_status: bill.payment_status.to_value(),
            payment_method: bill.payment_method.clone(),
            invoice_number: bill.invoice_number.clone(),
            paid_at: bill.paid_at,
            created_at: bill.created_at,
        }
    }
}
