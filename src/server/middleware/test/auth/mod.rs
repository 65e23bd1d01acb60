use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{auth::AuthGuard, auth::Permission, session::AuthSession},
};
use entity::user::UserRole;
use test_utils::{builder::TestBuilder, factory};

mod require;
