use crate::server::{
    data::room::RoomRepository,
    model::room::{CreateRoomParams, RoomSearchCriteria, UpdateRoomParams},
};
use entity::room::{RoomStatus, RoomType};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_available;
mod set_status;
mod update;
