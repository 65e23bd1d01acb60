use super::*;

mod require_admin;
mod require_staff;

/// Tests unauthenticated sessions are rejected.
///
/// Verifies that the AuthGuard denies access when there is no user id
/// in the session (user not logged in), even with no permissions required.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn denies_access_when_not_authenticated() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    // Don't set user in session - simulate unauthenticated request

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests a session pointing at a deleted account is rejected.
///
/// Verifies that the AuthGuard denies access when the user id exists in
/// the session but the account record does not exist in the database.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn denies_access_when_user_not_in_database() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    // Set user id in session without creating the account
    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(9999).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(9999)))
    ));

    Ok(())
}

/// Tests a deactivated account is rejected despite a live session.
///
/// Verifies that disabling an account locks it out immediately, without
/// waiting for its session to expire.
///
/// Expected: Err(AuthError::AccountDisabled)
#[tokio::test]
async fn denies_access_to_disabled_account() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .active(false)
        .build()
        .await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccountDisabled(id))) if id == user.id
    ));

    Ok(())
}

/// Tests empty permission list grants access.
///
/// Verifies that when no permissions are required, any authenticated
/// active account is granted access, guests included.
///
/// Expected: Ok(User)
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[]).await;

    assert!(result.is_ok());
    let returned_user = result.unwrap();
    assert_eq!(returned_user.id, user.id);

    Ok(())
}

/// Tests multiple permissions are all checked.
///
/// Verifies that when multiple permissions are required, all of them
/// must be satisfied for access to be granted.
///
/// Expected: Ok(User) for admin, Err(AuthError::AccessDenied) for staff
#[tokio::test]
async fn requires_all_permissions() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let auth_session = AuthSession::new(session);
    let auth_guard = AuthGuard::new(db, session);

    // Staff satisfies the staff check but fails the admin check
    let staff = factory::user::create_user_with_role(db, UserRole::Staff).await?;
    auth_session.set_user_id(staff.id).await?;

    let result = auth_guard
        .require(&[Permission::Staff, Permission::Admin])
        .await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) if id == staff.id
    ));

    // Admin satisfies both
    let admin = factory::user::create_user_with_role(db, UserRole::Admin).await?;
    auth_session.set_user_id(admin.id).await?;

    let result = auth_guard
        .require(&[Permission::Staff, Permission::Admin])
        .await;
    assert!(result.is_ok());
    assert_eq!(result.unwrap().id, admin.id);

    Ok(())
}
