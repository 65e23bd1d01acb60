//! Data transfer objects exchanged with API clients.

pub mod api;
pub mod billing;
pub mod notification;
pub mod reservation;
pub mod room;
pub mod setting;
pub mod user;
