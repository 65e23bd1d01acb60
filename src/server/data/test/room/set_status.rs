use super::*;

/// Tests moving a room through operational statuses.
///
/// Expected: Ok with the new status persisted
#[tokio::test]
async fn updates_room_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;

    let repo = RoomRepository::new(db);
    repo.set_status(room.id, RoomStatus::Occupied).await?;

    let updated = repo.get_by_id(room.id).await?.unwrap();
    assert_eq!(updated.status, RoomStatus::Occupied);

    repo.set_status(room.id, RoomStatus::Cleaning).await?;
    let updated = repo.get_by_id(room.id).await?.unwrap();
    assert_eq!(updated.status, RoomStatus::Cleaning);

    Ok(())
}

/// Tests that updating a missing room is a no-op rather than an error.
///
/// Expected: Ok(())
#[tokio::test]
async fn succeeds_for_missing_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoomRepository::new(db);
    let result = repo.set_status(9999, RoomStatus::Available).await;

    assert!(result.is_ok());

    Ok(())
}
