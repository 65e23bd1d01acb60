use super::*;

/// Tests persisting a new notification.
///
/// Notifications always start unread.
///
/// Expected: Ok with an unread notification
#[tokio::test]
async fn creates_unread_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = NotificationRepository::new(db);
    let notification = repo.create(params_for(user.id, "Booking confirmed")).await?;

    assert_eq!(notification.user_id, user.id);
    assert_eq!(notification.title, "Booking confirmed");
    assert_eq!(notification.kind, "booking_confirmed");
    assert_eq!(notification.related_type.as_deref(), Some("reservation"));
    assert!(!notification.read);

    Ok(())
}
