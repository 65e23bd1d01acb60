use super::*;

/// Tests filtering the reservation page by guest.
///
/// Guests only ever see their own bookings through this filter.
///
/// Expected: Ok with only the guest's reservations
#[tokio::test]
async fn filters_by_guest() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let room = factory::room::create_room(db).await?;

    let own = factory::reservation::create_reservation(db, guest.id, room.id).await?;
    factory::reservation::create_reservation(db, other.id, room.id).await?;

    let repo = ReservationRepository::new(db);
    let (reservations, total) = repo
        .get_paginated(GetPaginatedReservationsParams {
            guest_id: Some(guest.id),
            room_id: None,
            page: 0,
            per_page: 10,
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(reservations.len(), 1);
    assert_eq!(reservations[0].id, own.id);

    Ok(())
}

/// Tests filtering the reservation page by room.
///
/// Expected: Ok with only the room's reservations
#[tokio::test]
async fn filters_by_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::user::create_user(db).await?;
    let room = factory::room::create_room(db).await?;
    let other_room = factory::room::create_room(db).await?;

    let on_room = factory::reservation::create_reservation(db, guest.id, room.id).await?;
    factory::reservation::create_reservation(db, guest.id, other_room.id).await?;

    let repo = ReservationRepository::new(db);
    let (reservations, total) = repo
        .get_paginated(GetPaginatedReservationsParams {
            guest_id: None,
            room_id: Some(room.id),
            page: 0,
            per_page: 10,
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(reservations[0].id, on_room.id);

    Ok(())
}

/// Tests that pages split at per_page with a stable total.
///
/// Expected: Ok with three reservations split across two pages
#[tokio::test]
async fn paginates_results() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::user::create_user(db).await?;
    let room = factory::room::create_room(db).await?;

    for _ in 0..3 {
        factory::reservation::create_reservation(db, guest.id, room.id).await?;
    }

    let repo = ReservationRepository::new(db);
    let (first_page, total) = repo
        .get_paginated(GetPaginatedReservationsParams {
            guest_id: None,
            room_id: None,
            page: 0,
            per_page: 2,
        })
        .await?;

    assert_eq!(total, 3);
    assert_eq!(first_page.len(), 2);

    let (second_page, _) = repo
        .get_paginated(GetPaginatedReservationsParams {
            guest_id: None,
            room_id: None,
            page: 1,
            per_page: 2,
        })
        .await?;
    assert_eq!(second_page.len(), 1);

    Ok(())
}
