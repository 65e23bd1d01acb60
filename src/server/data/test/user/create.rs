use super::*;

/// Tests creating a new account.
///
/// Verifies that the repository persists the supplied fields, starts the
/// account as active and assigns a fresh id.
///
/// Expected: Ok with account created
#[tokio::test]
async fn creates_account_with_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            name: "Ada Guest".to_string(),
            email: "ada@example.com".to_string(),
            password_hash: "hashed".to_string(),
            role: UserRole::Guest,
        })
        .await?;

    assert_eq!(user.name, "Ada Guest");
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.role, UserRole::Guest);
    assert!(user.active);

    // Verify the row exists in the database
    let found = repo.find_by_id(user.id).await?;
    assert!(found.is_some());

    Ok(())
}

/// Tests that a duplicate email is rejected by the unique index.
///
/// The service layer checks first, but a race still has to surface as a
/// database error rather than a silent second row.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(CreateUserParams {
        name: "First".to_string(),
        email: "taken@example.com".to_string(),
        password_hash: "hashed".to_string(),
        role: UserRole::Guest,
    })
    .await?;

    let result = repo
        .create(CreateUserParams {
            name: "Second".to_string(),
            email: "taken@example.com".to_string(),
            password_hash: "hashed".to_string(),
            role: UserRole::Guest,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
