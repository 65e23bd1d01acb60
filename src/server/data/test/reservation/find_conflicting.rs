use super::*;

/// Tests that an overlapping confirmed reservation is reported as a conflict.
///
/// Expected: Ok with the overlapping reservation
#[tokio::test]
async fn detects_overlapping_stay() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::user::create_user(db).await?;
    let room = factory::room::create_room(db).await?;

    let base = Utc::now();
    let existing = factory::reservation::ReservationFactory::new(db, guest.id, room.id)
        .check_in(base + Duration::days(1))
        .check_out(base + Duration::days(4))
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let conflicts = repo
        .find_conflicting(room.id, base + Duration::days(3), base + Duration::days(6), None)
        .await?;

    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].id, existing.id);

    Ok(())
}

/// Tests that back-to-back stays sharing a boundary date do not conflict.
///
/// One guest checks out on the same date another checks in; the interval is
/// half-open so both bookings are valid.
///
/// Expected: Ok with no conflicts
#[tokio::test]
async fn allows_back_to_back_stays() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::user::create_user(db).await?;
    let room = factory::room::create_room(db).await?;

    let base = Utc::now();
    factory::reservation::ReservationFactory::new(db, guest.id, room.id)
        .check_in(base + Duration::days(1))
        .check_out(base + Duration::days(3))
        .build()
        .await?;

    let repo = ReservationRepository::new(db);

    // New stay starting exactly on the existing check-out date
    let after = repo
        .find_conflicting(room.id, base + Duration::days(3), base + Duration::days(5), None)
        .await?;
    assert!(after.is_empty());

    // New stay ending exactly on the existing check-in date
    let before = repo
        .find_conflicting(room.id, base - Duration::days(1), base + Duration::days(1), None)
        .await?;
    assert!(before.is_empty());

    Ok(())
}

/// Tests that only blocking statuses count as conflicts.
///
/// Cancelled, pending and checked-out reservations release the room, so an
/// overlapping candidate range must not be rejected because of them.
///
/// Expected: Ok with no conflicts
#[tokio::test]
async fn ignores_non_blocking_statuses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::user::create_user(db).await?;
    let room = factory::room::create_room(db).await?;

    let base = Utc::now();
    for status in [
        ReservationStatus::Pending,
        ReservationStatus::Cancelled,
        ReservationStatus::CheckedOut,
    ] {
        factory::reservation::ReservationFactory::new(db, guest.id, room.id)
            .check_in(base + Duration::days(1))
            .check_out(base + Duration::days(4))
            .status(status)
            .build()
            .await?;
    }

    let repo = ReservationRepository::new(db);
    let conflicts = repo
        .find_conflicting(room.id, base + Duration::days(2), base + Duration::days(3), None)
        .await?;

    assert!(conflicts.is_empty());

    Ok(())
}

/// Tests that a checked-in reservation still blocks the room.
///
/// Expected: Ok with the checked-in reservation as a conflict
#[tokio::test]
async fn counts_checked_in_stays() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::user::create_user(db).await?;
    let room = factory::room::create_room(db).await?;

    let base = Utc::now();
    let existing = factory::reservation::ReservationFactory::new(db, guest.id, room.id)
        .check_in(base)
        .check_out(base + Duration::days(3))
        .status(ReservationStatus::CheckedIn)
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let conflicts = repo
        .find_conflicting(room.id, base + Duration::days(1), base + Duration::days(2), None)
        .await?;

    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].id, existing.id);

    Ok(())
}

/// Tests excluding a reservation from its own conflict check.
///
/// Re-activating a cancelled reservation re-checks its dates; the reservation
/// must not conflict with itself, while another overlapping booking still
/// blocks it.
///
/// Expected: Ok, empty when excluded, non-empty with a real conflict
#[tokio::test]
async fn excludes_given_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::user::create_user(db).await?;
    let room = factory::room::create_room(db).await?;

    let base = Utc::now();
    let own = factory::reservation::ReservationFactory::new(db, guest.id, room.id)
        .check_in(base + Duration::days(1))
        .check_out(base + Duration::days(3))
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let conflicts = repo
        .find_conflicting(
            room.id,
            base + Duration::days(1),
            base + Duration::days(3),
            Some(own.id),
        )
        .await?;
    assert!(conflicts.is_empty());

    // A second overlapping booking is still reported
    let other = factory::reservation::ReservationFactory::new(db, guest.id, room.id)
        .check_in(base + Duration::days(2))
        .check_out(base + Duration::days(5))
        .build()
        .await?;

    let conflicts = repo
        .find_conflicting(
            room.id,
            base + Duration::days(1),
            base + Duration::days(3),
            Some(own.id),
        )
        .await?;
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].id, other.id);

    Ok(())
}

/// Tests that reservations on other rooms never conflict.
///
/// Expected: Ok with no conflicts
#[tokio::test]
async fn scoped_to_single_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::user::create_user(db).await?;
    let room = factory::room::create_room(db).await?;
    let other_room = factory::room::create_room(db).await?;

    let base = Utc::now();
    factory::reservation::ReservationFactory::new(db, guest.id, other_room.id)
        .check_in(base + Duration::days(1))
        .check_out(base + Duration::days(4))
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let conflicts = repo
        .find_conflicting(room.id, base + Duration::days(1), base + Duration::days(4), None)
        .await?;

    assert!(conflicts.is_empty());

    Ok(())
}
