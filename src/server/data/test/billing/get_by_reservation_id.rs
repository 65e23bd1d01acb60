use super::*;

/// Tests looking up the bill attached to a reservation.
///
/// Expected: Ok(Some) with the reservation's bill and its items
#[tokio::test]
async fn finds_bill_for_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (guest, _room, reservation) =
        factory::helpers::create_reservation_with_dependencies(db).await?;
    let created = factory::billing::create_bill(db, reservation.id, guest.id).await?;

    let repo = BillingRepository::new(db);
    let found = repo.get_by_reservation_id(reservation.id).await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().id, created.id);

    Ok(())
}

/// Tests a reservation without a bill.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_bill() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_guest, _room, reservation) =
        factory::helpers::create_reservation_with_dependencies(db).await?;

    let repo = BillingRepository::new(db);
    let found = repo.get_by_reservation_id(reservation.id).await?;

    assert!(found.is_none());

    Ok(())
}
