use axum::{
    routing::{get, post, put},
    Router,
};

use crate::server::{
    controller::{auth, billing, notification, reservation, room, setting},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/user", get(auth::get_current_user))
        .route("/api/rooms", post(room::create_room).get(room::get_rooms))
        .route("/api/rooms/availability", get(room::get_availability))
        .route("/api/rooms/{id}", get(room::get_room).put(room::update_room))
        .route(
            "/api/reservations",
            post(reservation::create_reservation).get(reservation::get_reservations),
        )
        .route(
            "/api/reservations/{id}",
            get(reservation::get_reservation).put(reservation::update_reservation),
        )
        .route("/api/reservations/{id}/check-in", post(reservation::check_in))
        .route("/api/reservations/{id}/check-out", post(reservation::check_out))
        .route(
            "/api/reservations/{id}/bill",
            get(reservation::get_reservation_bill),
        )
        .route("/api/billing", post(billing::create_bill))
        .route(
            "/api/billing/{id}",
            get(billing::get_bill).put(billing::update_bill),
        )
        .route("/api/billing/{id}/payment", put(billing::update_payment))
        .route("/api/notifications", get(notification::get_notifications))
        .route(
            "/api/notifications/{id}/read",
            put(notification::mark_notification_read),
        )
        .route(
            "/api/settings",
            get(setting::get_settings).put(setting::update_settings),
        )
}
