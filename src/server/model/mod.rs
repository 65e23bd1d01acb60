//! Domain models and operation parameter types.
//!
//! Repositories convert SeaORM entity models into these domain models at the
//! data-layer boundary, and services pass `*Params` structs into repositories
//! instead of loose argument lists.

pub mod billing;
pub mod notification;
pub mod reservation;
pub mod room;
pub mod setting;
pub mod user;
