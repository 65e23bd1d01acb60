pub mod prelude;

pub mod billing;
pub mod billing_service_item;
pub mod notification;
pub mod reservation;
pub mod room;
pub mod setting;
pub mod user;
