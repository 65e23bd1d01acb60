use super::*;

/// Tests that a user only sees their own notifications.
///
/// Expected: Ok with the user's notifications only
#[tokio::test]
async fn scoped_to_single_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;

    let repo = NotificationRepository::new(db);
    let own = repo.create(params_for(user.id, "For you")).await?;
    repo.create(params_for(other.id, "Not for you")).await?;

    let (notifications, total) = repo.get_paginated_for_user(user.id, 0, 10).await?;

    assert_eq!(total, 1);
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].id, own.id);

    Ok(())
}

/// Tests that pages split at per_page with a stable total.
///
/// Expected: Ok with three notifications split across two pages
#[tokio::test]
async fn paginates_results() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = NotificationRepository::new(db);
    for i in 0..3 {
        repo.create(params_for(user.id, &format!("Notification {}", i)))
            .await?;
    }

    let (first_page, total) = repo.get_paginated_for_user(user.id, 0, 2).await?;
    assert_eq!(total, 3);
    assert_eq!(first_page.len(), 2);

    let (second_page, _) = repo.get_paginated_for_user(user.id, 1, 2).await?;
    assert_eq!(second_page.len(), 1);

    Ok(())
}
