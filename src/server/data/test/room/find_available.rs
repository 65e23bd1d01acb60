use super::*;

/// Tests that only rooms with status available are returned.
///
/// Occupied, cleaning and maintenance rooms are never bookable regardless of
/// the date range, so the static pass drops them outright.
///
/// Expected: Ok with available rooms only
#[tokio::test]
async fn excludes_rooms_not_available() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let available = factory::room::create_room(db).await?;
    factory::room::RoomFactory::new(db)
        .status(RoomStatus::Occupied)
        .build()
        .await?;
    factory::room::RoomFactory::new(db)
        .status(RoomStatus::Maintenance)
        .build()
        .await?;

    let repo = RoomRepository::new(db);
    let rooms = repo.find_available(&RoomSearchCriteria::default()).await?;

    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].id, available.id);

    Ok(())
}

/// Tests the type and minimum-occupancy criteria.
///
/// Expected: Ok with rooms satisfying both filters
#[tokio::test]
async fn applies_type_and_occupancy_criteria() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let family_suite = factory::room::RoomFactory::new(db)
        .room_type(RoomType::Suite)
        .max_occupancy(4)
        .build()
        .await?;
    factory::room::RoomFactory::new(db)
        .room_type(RoomType::Suite)
        .max_occupancy(2)
        .build()
        .await?;
    factory::room::RoomFactory::new(db)
        .room_type(RoomType::Double)
        .max_occupancy(4)
        .build()
        .await?;

    let repo = RoomRepository::new(db);
    let rooms = repo
        .find_available(&RoomSearchCriteria {
            room_type: Some(RoomType::Suite),
            min_occupancy: Some(3),
        })
        .await?;

    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].id, family_suite.id);

    Ok(())
}
