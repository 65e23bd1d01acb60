use super::*;

/// Tests a partial update touching only some fields.
///
/// Fields absent from the params keep their stored values.
///
/// Expected: Ok with only the provided fields changed
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::RoomFactory::new(db)
        .price_per_night(100.0)
        .floor(2)
        .build()
        .await?;

    let repo = RoomRepository::new(db);
    let updated = repo
        .update(
            room.id,
            UpdateRoomParams {
                price_per_night: Some(150.0),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.price_per_night, 150.0);
    assert_eq!(updated.floor, 2);
    assert_eq!(updated.room_number, room.room_number);

    Ok(())
}

/// Tests updating a room that does not exist.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_missing_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoomRepository::new(db);
    let result = repo.update(9999, UpdateRoomParams::default()).await;

    assert!(result.is_err());

    Ok(())
}
