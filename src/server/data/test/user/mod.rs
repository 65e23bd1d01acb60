use crate::server::{data::user::UserRepository, model::user::CreateUserParams};
use entity::user::UserRole;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_admins;
mod create;
mod find_by_email;
