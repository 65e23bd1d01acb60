pub mod locks;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use entity::reservation::{BookingSource, ReservationStatus};
use rand::distr::{Alphanumeric, SampleString};
use sea_orm::{ActiveEnum, DatabaseConnection};

use crate::{
    model::{
        reservation::{
            CreateReservationDto, PaginatedReservationsDto, ReservationDto,
            ReservationListItemDto, UpdateReservationDto,
        },
        room::AvailabilityDto,
    },
    server::{
        data::{
            reservation::ReservationRepository, room::RoomRepository, user::UserRepository,
        },
        error::{auth::AuthError, booking::BookingError, AppError},
        mailer::Mailer,
        model::{
            reservation::{CreateReservationParams, GetPaginatedReservationsParams, Reservation},
            room::{Room, RoomSearchCriteria},
            user::User,
        },
        service::{billing::BillingService, notification::NotificationService, room::RoomService},
    },
};

use locks::RoomLocks;

/// Milliseconds per night, used to derive the night count from a stay range.
const MILLIS_PER_NIGHT: i64 = 86_400_000;

/// Bounded attempts at a short confirmation number before falling back to a
/// longer random suffix.
const CONFIRMATION_ATTEMPTS: usize = 10;

/// Service for the reservation ledger.
///
/// Owns the booking flow end to end: date and occupancy validation, conflict
/// detection under the per-room booking lock, total computation, confirmation
/// number generation, status transitions and the availability query. Room
/// status changes and notification dispatch ride along as side effects.
pub struct ReservationService<'a> {
    db: &'a DatabaseConnection,
    locks: &'a RoomLocks,
    mailer: &'a Mailer,
}

impl<'a> ReservationService<'a> {
    /// Creates a new ReservationService instance.
    pub fn new(db: &'a DatabaseConnection, locks: &'a RoomLocks, mailer: &'a Mailer) -> Self {
        Self { db, locks, mailer }
    }

    /// Books a room for a guest over a half-open date range.
    ///
    /// Validation order: date range, room existence, occupancy, then the
    /// conflict check. The conflict check and insert run under the room's
    /// booking lock so two concurrent bookings for the same room cannot both
    /// pass the check. On success the reservation is `confirmed`, its total
    /// is frozen at nights times the nightly price, the room moves to
    /// `reserved`, and an initial bill plus booking notifications are
    /// dispatched best-effort.
    ///
    /// # Arguments
    /// - `actor` - Authenticated account making the booking
    /// - `dto` - Booking request
    ///
    /// # Returns
    /// - `Ok(ReservationDto)` - The confirmed reservation
    /// - `Err(AppError)` - Validation failure, conflict, or database error
    pub async fn create(
        &self,
        actor: &User,
        dto: CreateReservationDto,
    ) -> Result<ReservationDto, AppError> {
        let repo = ReservationRepository::new(self.db);
        let room_repo = RoomRepository::new(self.db);

        let check_in = Self::parse_stay_date(&dto.check_in)?;
        let check_out = Self::parse_stay_date(&dto.check_out)?;
        if check_out <= check_in {
            return Err(BookingError::InvalidDateRange.into());
        }

        if dto.guest_count < 1 {
            return Err(AppError::BadRequest(
                "Guest count must be at least 1".to_string(),
            ));
        }

        let source = match dto.source.as_deref() {
            Some(raw) => Self::parse_source(raw)?,
            None => BookingSource::Website,
        };

        // Staff may book on behalf of any guest; everyone else books for themselves.
        let guest_id = match dto.guest_id {
            Some(id) if id == actor.id || actor.role.is_elevated() => id,
            Some(_) => {
                return Err(AuthError::AccessDenied(
                    actor.id,
                    "Only staff may book for another guest".to_string(),
                )
                .into())
            }
            None => actor.id,
        };

        let guest = UserRepository::new(self.db)
            .find_by_id(guest_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Guest not found".to_string()))?;

        let reservation = {
            let _guard = self.locks.acquire(dto.room_id).await;

            let room = room_repo
                .get_by_id(dto.room_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;

            if dto.guest_count > room.max_occupancy {
                return Err(
                    BookingError::OccupancyExceeded(dto.guest_count, room.max_occupancy).into(),
                );
            }

            if let Some(conflict) = repo
                .find_conflicting(room.id, check_in, check_out, None)
                .await?
                .first()
            {
                return Err(BookingError::RoomUnavailable(
                    room.id,
                    conflict.check_in,
                    conflict.check_out,
                )
                .into());
            }

            let nights = (check_out - check_in)
                .num_milliseconds()
                .div_ceil(MILLIS_PER_NIGHT);
            let total_amount = nights as f64 * room.price_per_night;

            let confirmation_number = self.generate_confirmation_number().await?;

            let reservation = repo
                .create(CreateReservationParams {
                    guest_id,
                    room_id: room.id,
                    check_in,
                    check_out,
                    guest_count: dto.guest_count,
                    status: ReservationStatus::Confirmed,
                    total_amount,
                    confirmation_number,
                    source,
                })
                .await?;

            room_repo
                .set_status(room.id, entity::room::RoomStatus::Reserved)
                .await?;

            reservation
        };

        let room = room_repo
            .get_by_id(reservation.room_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;

        // Side effects never fail the booking that triggered them.
        let billing = BillingService::new(self.db, self.mailer);
        if let Err(err) = billing.create_for_booking(&reservation).await {
            tracing::warn!(
                reservation_id = reservation.id,
                "Failed to create initial bill: {}",
                err
            );
        }

        let notifications = NotificationService::new(self.db, self.mailer);
        if let Err(err) = notifications
            .notify_booking(&reservation, &guest, &room)
            .await
        {
            tracing::warn!(
                reservation_id = reservation.id,
                "Failed to dispatch booking notifications: {}",
                err
            );
        }

        Ok(Self::assemble_dto(&reservation, &guest, &room))
    }

    /// Gets a reservation by id.
    ///
    /// Guests can only see their own reservations; staff and admins can see
    /// any.
    ///
    /// # Returns
    /// - `Ok(ReservationDto)` - The reservation
    /// - `Err(AppError)` - Not found, access violation, or database error
    pub async fn get_by_id(&self, actor: &User, id: i32) -> Result<ReservationDto, AppError> {
        let reservation = ReservationRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))?;

        if !actor.role.is_elevated() && reservation.guest_id != actor.id {
            return Err(AuthError::AccessDenied(
                actor.id,
                "Reservation belongs to another guest".to_string(),
            )
            .into());
        }

        self.to_dto(&reservation).await
    }

    /// Gets paginated reservations, newest first.
    ///
    /// Guests only ever see their own reservations; staff and admins see all
    /// and may narrow by room.
    ///
    /// # Arguments
    /// - `actor` - Authenticated account listing reservations
    /// - `room_id` - Optional room filter (staff only, ignored for guests)
    /// - `page` - Page number (0-indexed)
    /// - `per_page` - Number of items per page
    ///
    /// # Returns
    /// - `Ok(PaginatedReservationsDto)` - Page with pagination metadata
    /// - `Err(AppError)` - Database error
    pub async fn get_paginated(
        &self,
        actor: &User,
        room_id: Option<i32>,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedReservationsDto, AppError> {
        let room_repo = RoomRepository::new(self.db);

        let guest_id = if actor.role.is_elevated() {
            None
        } else {
            Some(actor.id)
        };

        let (reservations, total) = ReservationRepository::new(self.db)
            .get_paginated(GetPaginatedReservationsParams {
                guest_id,
                room_id,
                page,
                per_page,
            })
            .await?;

        let total_pages = if per_page > 0 {
            (total as f64 / per_page as f64).ceil() as u64
        } else {
            0
        };

        let mut items = Vec::with_capacity(reservations.len());
        for reservation in reservations {
            if let Some(room) = room_repo.get_by_id(reservation.room_id).await? {
                items.push(ReservationListItemDto {
                    id: reservation.id,
                    guest_id: reservation.guest_id,
                    room_id: reservation.room_id,
                    room_number: room.room_number,
                    check_in: reservation.check_in,
                    check_out: reservation.check_out,
                    status: reservation.status.to_value(),
                    total_amount: reservation.total_amount,
                    confirmation_number: reservation.confirmation_number,
                });
            }
        }

        Ok(PaginatedReservationsDto {
            reservations: items,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Applies a status change requested through the update endpoint.
    ///
    /// Guests may only cancel their own reservations; every other change
    /// requires staff. Moving a reservation into `confirmed` (including
    /// re-activating a cancelled one) re-runs the conflict check under the
    /// room's booking lock, so a re-activation cannot overlap a booking made
    /// in the meantime.
    ///
    /// # Returns
    /// - `Ok(ReservationDto)` - The updated reservation
    /// - `Err(AppError)` - Not found, disallowed transition, conflict, or
    ///   access violation
    pub async fn update_status(
        &self,
        actor: &User,
        id: i32,
        dto: UpdateReservationDto,
    ) -> Result<ReservationDto, AppError> {
        let target = Self::parse_status(&dto.status)?;

        let reservation = ReservationRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))?;

        if !actor.role.is_elevated() {
            if reservation.guest_id != actor.id {
                return Err(AuthError::AccessDenied(
                    actor.id,
                    "Reservation belongs to another guest".to_string(),
                )
                .into());
            }
            if target != ReservationStatus::Cancelled {
                return Err(AuthError::AccessDenied(
                    actor.id,
                    "Guests may only cancel their reservations".to_string(),
                )
                .into());
            }
        }

        let updated = self.transition(reservation, target).await?;

        if updated.status == ReservationStatus::Cancelled {
            let notifications = NotificationService::new(self.db, self.mailer);
            if let Err(err) = notifications
                .notify_reservation_event(
                    &updated,
                    "reservation_cancelled",
                    "Reservation cancelled",
                    format!(
                        "Reservation {} has been cancelled",
                        updated.confirmation_number
                    ),
                )
                .await
            {
                tracing::warn!(
                    reservation_id = updated.id,
                    "Failed to dispatch cancellation notification: {}",
                    err
                );
            }
        }

        self.to_dto(&updated).await
    }

    /// Checks a guest in.
    ///
    /// Only a `confirmed` reservation can be checked in; the room moves to
    /// `occupied`.
    ///
    /// # Returns
    /// - `Ok(ReservationDto)` - The checked-in reservation
    /// - `Err(AppError)` - Not found, disallowed transition, or database error
    pub async fn check_in(&self, id: i32) -> Result<ReservationDto, AppError> {
        let reservation = ReservationRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))?;

        let updated = self
            .transition(reservation, ReservationStatus::CheckedIn)
            .await?;

        let notifications = NotificationService::new(self.db, self.mailer);
        if let Err(err) = notifications
            .notify_reservation_event(
                &updated,
                "check_in",
                "Checked in",
                format!("Welcome! Reservation {} is checked in", updated.confirmation_number),
            )
            .await
        {
            tracing::warn!(
                reservation_id = updated.id,
                "Failed to dispatch check-in notification: {}",
                err
            );
        }

        self.to_dto(&updated).await
    }

    /// Checks a guest out.
    ///
    /// Only a `checked-in` reservation can be checked out; the room moves to
    /// `cleaning` for housekeeping.
    ///
    /// # Returns
    /// - `Ok(ReservationDto)` - The checked-out reservation
    /// - `Err(AppError)` - Not found, disallowed transition, or database error
    pub async fn check_out(&self, id: i32) -> Result<ReservationDto, AppError> {
        let reservation = ReservationRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))?;

        let updated = self
            .transition(reservation, ReservationStatus::CheckedOut)
            .await?;

        let notifications = NotificationService::new(self.db, self.mailer);
        if let Err(err) = notifications
            .notify_reservation_event(
                &updated,
                "check_out",
                "Checked out",
                format!(
                    "Reservation {} is checked out. Safe travels!",
                    updated.confirmation_number
                ),
            )
            .await
        {
            tracing::warn!(
                reservation_id = updated.id,
                "Failed to dispatch check-out notification: {}",
                err
            );
        }

        self.to_dto(&updated).await
    }

    /// Finds rooms free for a half-open date range.
    ///
    /// First pass filters rooms by `available` status and the optional type
    /// and occupancy criteria; second pass subtracts every room with a
    /// `confirmed` or `checked-in` reservation overlapping the range.
    ///
    /// # Returns
    /// - `Ok(AvailabilityDto)` - The requested range and the bookable rooms
    /// - `Err(AppError)` - Invalid date range or database error
    pub async fn check_availability(
        &self,
        check_in: &str,
        check_out: &str,
        criteria: RoomSearchCriteria,
    ) -> Result<AvailabilityDto, AppError> {
        let check_in = Self::parse_stay_date(check_in)?;
        let check_out = Self::parse_stay_date(check_out)?;
        if check_out <= check_in {
            return Err(BookingError::InvalidDateRange.into());
        }

        let rooms = RoomRepository::new(self.db).find_available(&criteria).await?;
        let blocked = ReservationRepository::new(self.db)
            .find_blocked_room_ids(check_in, check_out)
            .await?;

        let free: Vec<Room> = rooms
            .into_iter()
            .filter(|room| !blocked.contains(&room.id))
            .collect();

        Ok(AvailabilityDto {
            check_in,
            check_out,
            rooms: free.iter().map(RoomService::to_dto).collect(),
        })
    }

    /// Applies a validated status transition and its room side effects.
    ///
    /// Entering `confirmed` re-runs the conflict check under the room's
    /// booking lock, excluding the reservation itself.
    async fn transition(
        &self,
        reservation: Reservation,
        target: ReservationStatus,
    ) -> Result<Reservation, AppError> {
        if !Self::transition_allowed(&reservation.status, &target) {
            return Err(
                BookingError::InvalidTransition(reservation.status, target).into(),
            );
        }

        let repo = ReservationRepository::new(self.db);
        let room_repo = RoomRepository::new(self.db);

        let updated = match target {
            ReservationStatus::Confirmed => {
                let _guard = self.locks.acquire(reservation.room_id).await;

                if let Some(conflict) = repo
                    .find_conflicting(
                        reservation.room_id,
                        reservation.check_in,
                        reservation.check_out,
                        Some(reservation.id),
                    )
                    .await?
                    .first()
                {
                    return Err(BookingError::RoomUnavailable(
                        reservation.room_id,
                        conflict.check_in,
                        conflict.check_out,
                    )
                    .into());
                }

                let updated = repo
                    .set_status(reservation.id, ReservationStatus::Confirmed)
                    .await?;
                room_repo
                    .set_status(reservation.room_id, entity::room::RoomStatus::Reserved)
                    .await?;
                updated
            }
            ReservationStatus::CheckedIn => {
                let updated = repo
                    .set_status(reservation.id, ReservationStatus::CheckedIn)
                    .await?;
                room_repo
                    .set_status(reservation.room_id, entity::room::RoomStatus::Occupied)
                    .await?;
                updated
            }
            ReservationStatus::CheckedOut => {
                let updated = repo
                    .set_status(reservation.id, ReservationStatus::CheckedOut)
                    .await?;
                room_repo
                    .set_status(reservation.room_id, entity::room::RoomStatus::Cleaning)
                    .await?;
                updated
            }
            ReservationStatus::Cancelled => {
                let was_blocking = reservation.status.blocks_room();
                let updated = repo
                    .set_status(reservation.id, ReservationStatus::Cancelled)
                    .await?;
                if was_blocking {
                    room_repo
                        .set_status(reservation.room_id, entity::room::RoomStatus::Available)
                        .await?;
                }
                updated
            }
            ReservationStatus::Pending => {
                let was_blocking = reservation.status.blocks_room();
                let updated = repo
                    .set_status(reservation.id, ReservationStatus::Pending)
                    .await?;
                if was_blocking {
                    room_repo
                        .set_status(reservation.room_id, entity::room::RoomStatus::Available)
                        .await?;
                }
                updated
            }
        };

        Ok(updated)
    }

    /// Whether a status change is allowed.
    ///
    /// Lifecycle: pending → confirmed → checked-in → checked-out, with
    /// cancellation from pending or confirmed, re-activation of a cancelled
    /// reservation back to confirmed, and a confirmed reservation put back on
    /// hold as pending. Nothing leaves `checked-out`.
    fn transition_allowed(from: &ReservationStatus, to: &ReservationStatus) -> bool {
        matches!(
            (from, to),
            (ReservationStatus::Pending, ReservationStatus::Confirmed)
                | (ReservationStatus::Pending, ReservationStatus::Cancelled)
                | (ReservationStatus::Confirmed, ReservationStatus::Pending)
                | (ReservationStatus::Confirmed, ReservationStatus::CheckedIn)
                | (ReservationStatus::Confirmed, ReservationStatus::Cancelled)
                | (ReservationStatus::CheckedIn, ReservationStatus::CheckedOut)
                | (ReservationStatus::Cancelled, ReservationStatus::Confirmed)
        )
    }

    /// Generates a unique confirmation number.
    ///
    /// Format is "LUX", the low eight digits of the current millisecond
    /// timestamp, and a random alphanumeric suffix. Bounded retries with a
    /// short suffix, then a single long-suffix fallback.
    ///
    /// # Returns
    /// - `Ok(String)` - A confirmation number no existing reservation uses
    /// - `Err(AppError)` - Every attempt collided, or database error
    async fn generate_confirmation_number(&self) -> Result<String, AppError> {
        let repo = ReservationRepository::new(self.db);

        for _ in 0..CONFIRMATION_ATTEMPTS {
            let candidate = Self::reference_number("LUX", 4);
            if repo
                .get_by_confirmation_number(&candidate)
                .await?
                .is_none()
            {
                return Ok(candidate);
            }
        }

        let fallback = Self::reference_number("LUX", 8);
        if repo.get_by_confirmation_number(&fallback).await?.is_none() {
            return Ok(fallback);
        }

        Err(BookingError::ConfirmationNumbersExhausted.into())
    }

    /// Builds a reference number: prefix, eight timestamp digits, and a
    /// random uppercase alphanumeric suffix.
    pub fn reference_number(prefix: &str, suffix_len: usize) -> String {
        let millis = Utc::now().timestamp_millis() % 100_000_000;
        let suffix = Alphanumeric
            .sample_string(&mut rand::rng(), suffix_len)
            .to_uppercase();

        format!("{}{:08}{}", prefix, millis, suffix)
    }

    /// Parses a stay date in "YYYY-MM-DD" or "YYYY-MM-DD HH:MM" format (UTC).
    fn parse_stay_date(raw: &str) -> Result<DateTime<Utc>, AppError> {
        let trimmed = raw.trim();

        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M") {
            return Ok(naive.and_utc());
        }

        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .map(|date| date.and_time(NaiveTime::MIN).and_utc())
            .map_err(|_| {
                AppError::BadRequest(format!(
                    "Invalid date '{}', expected 'YYYY-MM-DD' or 'YYYY-MM-DD HH:MM'",
                    trimmed
                ))
            })
    }

    /// Parses a reservation status string from a DTO.
    fn parse_status(raw: &str) -> Result<ReservationStatus, AppError> {
        ReservationStatus::try_from_value(&raw.to_string())
            .map_err(|_| AppError::BadRequest(format!("Unknown reservation status '{}'", raw)))
    }

    /// Parses a booking source string from a DTO.
    fn parse_source(raw: &str) -> Result<BookingSource, AppError> {
        BookingSource::try_from_value(&raw.to_string())
            .map_err(|_| AppError::BadRequest(format!("Unknown booking source '{}'", raw)))
    }

    /// Builds the full reservation DTO, fetching the guest and room.
    async fn to_dto(&self, reservation: &Reservation) -> Result<ReservationDto, AppError> {
        let guest = UserRepository::new(self.db)
            .find_by_id(reservation.guest_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Guest not found".to_string()))?;

        let room = RoomRepository::new(self.db)
            .get_by_id(reservation.room_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;

        Ok(Self::assemble_dto(reservation, &guest, &room))
    }

    /// Assembles the reservation DTO from already-loaded models.
    fn assemble_dto(reservation: &Reservation, guest: &User, room: &Room) -> ReservationDto {
        ReservationDto {
            id: reservation.id,
            guest_id: reservation.guest_id,
            guest_name: guest.name.clone(),
            room_id: reservation.room_id,
            room_number: room.room_number.clone(),
            check_in: reservation.check_in,
            check_out: reservation.check_out,
            guest_count: reservation.guest_count,
            status: reservation.status.to_value(),
            total_amount: reservation.total_amount,
            confirmation_number: reservation.confirmation_number.clone(),
            source: reservation.source.to_value(),
            created_at: reservation.created_at,
        }
    }
}
