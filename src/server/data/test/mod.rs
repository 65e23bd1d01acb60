mod billing;
mod notification;
mod reservation;
mod room;
mod user;
