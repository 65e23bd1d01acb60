use super::*;

/// Tests registering a new room.
///
/// Verifies that the repository persists the supplied fields and starts the
/// room as available.
///
/// Expected: Ok with room created
#[tokio::test]
async fn creates_room_as_available() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoomRepository::new(db);
    let room = repo
        .create(CreateRoomParams {
            room_number: "301".to_string(),
            room_type: RoomType::Suite,
            floor: 3,
            price_per_night: 320.0,
            max_occupancy: 4,
        })
        .await?;

    assert_eq!(room.room_number, "301");
    assert_eq!(room.room_type, RoomType::Suite);
    assert_eq!(room.status, RoomStatus::Available);

    // Verify the room is retrievable by its number
    let found = repo.get_by_room_number("301").await?;
    assert!(found.is_some());
    assert_eq!(found.unwrap().id, room.id);

    Ok(())
}

/// Tests that a duplicate room number is rejected by the unique index.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_room_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoomRepository::new(db);
    repo.create(CreateRoomParams {
        room_number: "101".to_string(),
        room_type: RoomType::Single,
        floor: 1,
        price_per_night: 80.0,
        max_occupancy: 1,
    })
    .await?;

    let result = repo
        .create(CreateRoomParams {
            room_number: "101".to_string(),
            room_type: RoomType::Double,
            floor: 1,
            price_per_night: 120.0,
            max_occupancy: 2,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
