use crate::server::{
    data::reservation::ReservationRepository,
    model::reservation::{CreateReservationParams, GetPaginatedReservationsParams},
};
use chrono::{Duration, Utc};
use entity::reservation::{BookingSource, ReservationStatus};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_blocked_room_ids;
mod find_conflicting;
mod get_paginated;
mod set_status;
