use super::*;

/// Tests updating a reservation's status.
///
/// The `updated_at` timestamp is bumped so status changes are auditable.
///
/// Expected: Ok with the new status and a later updated_at
#[tokio::test]
async fn updates_status_and_timestamp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::user::create_user(db).await?;
    let room = factory::room::create_room(db).await?;
    let reservation = factory::reservation::create_reservation(db, guest.id, room.id).await?;

    let repo = ReservationRepository::new(db);
    let updated = repo
        .set_status(reservation.id, ReservationStatus::CheckedIn)
        .await?;

    assert_eq!(updated.status, ReservationStatus::CheckedIn);
    assert!(updated.updated_at >= reservation.updated_at);

    Ok(())
}

/// Tests updating a reservation that does not exist.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_missing_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReservationRepository::new(db);
    let result = repo.set_status(9999, ReservationStatus::Cancelled).await;

    assert!(result.is_err());

    Ok(())
}
