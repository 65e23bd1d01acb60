use sea_orm::DatabaseConnection;

use crate::{
    model::notification::{NotificationDto, PaginatedNotificationsDto},
    server::{
        data::{
            notification::NotificationRepository, setting::SettingRepository,
            user::UserRepository,
        },
        error::{auth::AuthError, AppError},
        mailer::Mailer,
        model::{
            billing::Bill,
            notification::{Notification, NotifyParams},
            reservation::Reservation,
            room::Room,
            user::User,
        },
    },
};

/// Service for in-app notifications and their email counterparts.
///
/// Every dispatch first consults the hotel settings: the master switch
/// disables all delivery, and the booking switch disables booking dispatches
/// specifically. Dispatch failures must never fail the operation that
/// triggered them, so callers log and swallow errors from the `notify_*`
/// methods.
pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
    mailer: &'a Mailer,
}

impl<'a> NotificationService<'a> {
    /// Creates a new NotificationService instance.
    pub fn new(db: &'a DatabaseConnection, mailer: &'a Mailer) -> Self {
        Self { db, mailer }
    }

    /// Dispatches notifications for a newly created booking.
    ///
    /// The guest gets an in-app notification plus a confirmation email; all
    /// active staff and admin accounts get an in-app notification. Skipped
    /// entirely when notifications or booking notifications are disabled.
    ///
    /// # Returns
    /// - `Ok(())` - Dispatched (or skipped by settings)
    /// - `Err(AppError)` - Database or email failure
    pub async fn notify_booking(
        &self,
        reservation: &Reservation,
        guest: &User,
        room: &Room,
    ) -> Result<(), AppError> {
        let settings = SettingRepository::new(self.db).get().await?;
        if !settings.notifications_enabled || !settings.notify_on_booking {
            return Ok(());
        }

        let repo = NotificationRepository::new(self.db);

        let stay = format!(
            "room {} from {} to {}",
            room.room_number,
            reservation.check_in.format("%Y-%m-%d"),
            reservation.check_out.format("%Y-%m-%d")
        );

        repo.create(NotifyParams {
            user_id: guest.id,
            kind: "booking_confirmed".to_string(),
            title: "Booking confirmed".to_string(),
            body: format!(
                "Your booking of {} is confirmed. Confirmation number: {}",
                stay, reservation.confirmation_number
            ),
            related_type: Some("reservation".to_string()),
            related_id: Some(reservation.id),
        })
        .await?;

        for staff in UserRepository::new(self.db).get_elevated().await? {
            if staff.id == guest.id {
                continue;
            }
            repo.create(NotifyParams {
                user_id: staff.id,
                kind: "booking_created".to_string(),
                title: "New booking".to_string(),
                body: format!("{} booked {}", guest.name, stay),
                related_type: Some("reservation".to_string()),
                related_id: Some(reservation.id),
            })
            .await?;
        }

        self.mailer
            .send(
                &guest.email,
                &format!(
                    "Booking confirmation {}",
                    reservation.confirmation_number
                ),
                &format!(
                    "Dear {},\n\nYour booking of {} is confirmed.\n\
                     Confirmation number: {}\nTotal: {:.2}\n\nWe look forward to your stay.",
                    guest.name, stay, reservation.confirmation_number, reservation.total_amount
                ),
            )
            .await?;

        Ok(())
    }

    /// Dispatches notifications for a reservation status change.
    ///
    /// Used for check-in, check-out and cancellation. The guest gets an
    /// in-app notification plus an email; all active staff and admin accounts
    /// get an in-app notification. Skipped when the notification master
    /// switch is off.
    ///
    /// # Arguments
    /// - `kind` - Machine-readable category, e.g. "check_in"
    /// - `title` - Short human-readable headline
    ///
    /// # Returns
    /// - `Ok(())` - Dispatched (or skipped by settings)
    /// - `Err(AppError)` - Database or email failure
    pub async fn notify_reservation_event(
        &self,
        reservation: &Reservation,
        kind: &str,
        title: &str,
        body: String,
    ) -> Result<(), AppError> {
        let settings = SettingRepository::new(self.db).get().await?;
        if !settings.notifications_enabled {
            return Ok(());
        }

        let repo = NotificationRepository::new(self.db);

        repo.create(NotifyParams {
            user_id: reservation.guest_id,
            kind: kind.to_string(),
            title: title.to_string(),
            body: body.clone(),
            related_type: Some("reservation".to_string()),
            related_id: Some(reservation.id),
        })
        .await?;

        for staff in UserRepository::new(self.db).get_elevated().await? {
            if staff.id == reservation.guest_id {
                continue;
            }
            repo.create(NotifyParams {
                user_id: staff.id,
                kind: kind.to_string(),
                title: title.to_string(),
                body: format!(
                    "{} for reservation {}",
                    title, reservation.confirmation_number
                ),
                related_type: Some("reservation".to_string()),
                related_id: Some(reservation.id),
            })
            .await?;
        }

        if let Some(guest) = UserRepository::new(self.db)
            .find_by_id(reservation.guest_id)
            .await?
        {
            self.mailer
                .send(
                    &guest.email,
                    &format!("{}: reservation {}", title, reservation.confirmation_number),
                    &format!("Dear {},\n\n{}", guest.name, body),
                )
                .await?;
        }

        Ok(())
    }

    /// Dispatches an invoice notification and email to the billed guest.
    ///
    /// Skipped when the notification master switch is off.
    ///
    /// # Returns
    /// - `Ok(())` - Dispatched (or skipped by settings)
    /// - `Err(AppError)` - Database or email failure
    pub async fn notify_invoice(&self, bill: &Bill) -> Result<(), AppError> {
        let settings = SettingRepository::new(self.db).get().await?;
        if !settings.notifications_enabled {
            return Ok(());
        }

        NotificationRepository::new(self.db)
            .create(NotifyParams {
                user_id: bill.guest_id,
                kind: "invoice_issued".to_string(),
                title: "Invoice issued".to_string(),
                body: format!(
                    "Invoice {} for {:.2} has been issued",
                    bill.invoice_number, bill.total_amount
                ),
                related_type: Some("billing".to_string()),
                related_id: Some(bill.id),
            })
            .await?;

        if let Some(guest) = UserRepository::new(self.db).find_by_id(bill.guest_id).await? {
            self.mailer
                .send(
                    &guest.email,
                    &format!("Invoice {}", bill.invoice_number),
                    &format!(
                        "Dear {},\n\nInvoice {} has been issued for your stay.\n\
                         Total due: {:.2}\n\nThank you for staying with us.",
                        guest.name, bill.invoice_number, bill.total_amount
                    ),
                )
                .await?;
        }

        Ok(())
    }

    /// Gets a page of the current user's notifications, newest first.
    ///
    /// # Returns
    /// - `Ok(PaginatedNotificationsDto)` - Page with pagination metadata
    /// - `Err(AppError)` - Database error
    pub async fn get_paginated(
        &self,
        user: &User,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedNotificationsDto, AppError> {
        let (notifications, total) = NotificationRepository::new(self.db)
            .get_paginated_for_user(user.id, page, per_page)
            .await?;

        let total_pages = if per_page > 0 {
            (total as f64 / per_page as f64).ceil() as u64
        } else {
            0
        };

        Ok(PaginatedNotificationsDto {
            notifications: notifications.iter().map(Self::to_dto).collect(),
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Marks one of the current user's notifications as read.
    ///
    /// Users can only touch their own notifications; acting on someone
    /// else's is an access violation even for staff.
    ///
    /// # Returns
    /// - `Ok(NotificationDto)` - The notification, now read
    /// - `Err(AppError)` - Not found, not owned by the user, or database error
    pub async fn mark_read(&self, user: &User, id: i32) -> Result<NotificationDto, AppError> {
        let repo = NotificationRepository::new(self.db);

        let notification = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Notification not found".to_string()))?;

        if notification.user_id != user.id {
            return Err(AuthError::AccessDenied(
                user.id,
                "Notification belongs to another account".to_string(),
            )
            .into());
        }

        let updated = repo.mark_read(id).await?;

        Ok(Self::to_dto(&updated))
    }

    /// Converts a notification domain model into its public DTO.
    fn to_dto(notification: &Notification) -> NotificationDto {
        NotificationDto {
            id: notification.id,
            kind: notification.kind.clone(),
            title: notification.title.clone(),
            body: notification.body.clone(),
            related_type: notification.related_type.clone(),
            related_id: notification.related_id,
            read: notification.read,
            created_at: notification.created_at,
        }
    }
}
