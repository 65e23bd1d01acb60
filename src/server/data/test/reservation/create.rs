use super::*;

/// Tests persisting a new reservation.
///
/// Verifies that the supplied fields are stored and both timestamps are
/// initialized.
///
/// Expected: Ok with reservation created
#[tokio::test]
async fn creates_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::user::create_user(db).await?;
    let room = factory::room::create_room(db).await?;

    let check_in = Utc::now() + Duration::days(5);
    let check_out = check_in + Duration::days(2);

    let repo = ReservationRepository::new(db);
    let reservation = repo
        .create(CreateReservationParams {
            guest_id: guest.id,
            room_id: room.id,
            check_in,
            check_out,
            guest_count: 2,
            status: ReservationStatus::Confirmed,
            total_amount: 200.0,
            confirmation_number: "LUX00000001ABCD".to_string(),
            source: BookingSource::Website,
        })
        .await?;

    assert_eq!(reservation.guest_id, guest.id);
    assert_eq!(reservation.room_id, room.id);
    assert_eq!(reservation.status, ReservationStatus::Confirmed);
    assert_eq!(reservation.total_amount, 200.0);
    assert_eq!(reservation.created_at, reservation.updated_at);

    // Verify lookup by confirmation number
    let found = repo.get_by_confirmation_number("LUX00000001ABCD").await?;
    assert!(found.is_some());
    assert_eq!(found.unwrap().id, reservation.id);

    Ok(())
}

/// Tests that a duplicate confirmation number is rejected by the unique index.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_confirmation_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::user::create_user(db).await?;
    let room = factory::room::create_room(db).await?;

    factory::reservation::ReservationFactory::new(db, guest.id, room.id)
        .confirmation_number("LUXDUPLICATE")
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let result = repo
        .create(CreateReservationParams {
            guest_id: guest.id,
            room_id: room.id,
            check_in: Utc::now() + Duration::days(10),
            check_out: Utc::now() + Duration::days(12),
            guest_count: 1,
            status: ReservationStatus::Confirmed,
            total_amount: 100.0,
            confirmation_number: "LUXDUPLICATE".to_string(),
            source: BookingSource::Phone,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
