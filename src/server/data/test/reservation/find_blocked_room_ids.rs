use super::*;

/// Tests collecting blocked room ids for a date range.
///
/// Rooms with overlapping blocking reservations appear once each; rooms with
/// only non-blocking or non-overlapping reservations are absent.
///
/// Expected: Ok with deduplicated blocked room ids
#[tokio::test]
async fn returns_rooms_with_overlapping_blocking_stays() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::user::create_user(db).await?;
    let blocked = factory::room::create_room(db).await?;
    let cancelled_only = factory::room::create_room(db).await?;
    let free = factory::room::create_room(db).await?;

    let base = Utc::now();

    // Two overlapping bookings on the same room still yield one id
    factory::reservation::ReservationFactory::new(db, guest.id, blocked.id)
        .check_in(base + Duration::days(1))
        .check_out(base + Duration::days(3))
        .build()
        .await?;
    factory::reservation::ReservationFactory::new(db, guest.id, blocked.id)
        .check_in(base + Duration::days(3))
        .check_out(base + Duration::days(5))
        .build()
        .await?;

    factory::reservation::ReservationFactory::new(db, guest.id, cancelled_only.id)
        .check_in(base + Duration::days(1))
        .check_out(base + Duration::days(5))
        .status(ReservationStatus::Cancelled)
        .build()
        .await?;

    // Booking on the free room is outside the queried range
    factory::reservation::ReservationFactory::new(db, guest.id, free.id)
        .check_in(base + Duration::days(10))
        .check_out(base + Duration::days(12))
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let blocked_ids = repo
        .find_blocked_room_ids(base + Duration::days(2), base + Duration::days(4))
        .await?;

    assert_eq!(blocked_ids, vec![blocked.id]);

    Ok(())
}

/// Tests the empty case with no reservations in range.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_without_overlaps() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::room::create_room(db).await?;

    let base = Utc::now();
    let repo = ReservationRepository::new(db);
    let blocked_ids = repo
        .find_blocked_room_ids(base + Duration::days(1), base + Duration::days(3))
        .await?;

    assert!(blocked_ids.is_empty());

    Ok(())
}
