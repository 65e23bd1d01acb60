use super::*;

/// Tests counting admin accounts when none exist.
///
/// The startup seed relies on zero meaning a bootstrap admin is needed.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_without_admins() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;
    factory::user::create_user_with_role(db, UserRole::Staff).await?;

    let repo = UserRepository::new(db);
    assert_eq!(repo.count_admins().await?, 0);

    Ok(())
}

/// Tests counting admin accounts when several exist.
///
/// Expected: Ok(2)
#[tokio::test]
async fn counts_admin_accounts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_role(db, UserRole::Admin).await?;
    factory::user::create_user_with_role(db, UserRole::Admin).await?;
    factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    assert_eq!(repo.count_admins().await?, 2);

    Ok(())
}
