use super::*;

/// Tests replacing a bill's line items on update.
///
/// Providing `items` deletes the stored rows and inserts the new set; the
/// old items must not linger.
///
/// Expected: Ok with only the new items
#[tokio::test]
async fn replaces_line_items() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (guest, _room, reservation) =
        factory::helpers::create_reservation_with_dependencies(db).await?;

    let repo = BillingRepository::new(db);
    let bill = repo
        .create(CreateBillParams {
            reservation_id: reservation.id,
            guest_id: guest.id,
            room_charges: 200.0,
            taxes: 0.0,
            discount: 0.0,
            total_amount: 230.0,
            invoice_number: "INV00000003ABCD".to_string(),
            items: vec![line("Breakfast", 2, 15.0)],
        })
        .await?;

    let updated = repo
        .update(UpdateBillParams {
            id: bill.id,
            taxes: 20.0,
            discount: 0.0,
            total_amount: 270.0,
            items: Some(vec![line("Laundry", 1, 50.0)]),
        })
        .await?;

    assert_eq!(updated.taxes, 20.0);
    assert_eq!(updated.total_amount, 270.0);
    assert_eq!(updated.items.len(), 1);
    assert_eq!(updated.items[0].name, "Laundry");

    Ok(())
}

/// Tests that omitting `items` keeps the stored line items.
///
/// Room charges also stay untouched by updates.
///
/// Expected: Ok with original items and room charges intact
#[tokio::test]
async fn keeps_items_when_not_provided() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (guest, _room, reservation) =
        factory::helpers::create_reservation_with_dependencies(db).await?;

    let repo = BillingRepository::new(db);
    let bill = repo
        .create(CreateBillParams {
            reservation_id: reservation.id,
            guest_id: guest.id,
            room_charges: 200.0,
            taxes: 0.0,
            discount: 0.0,
            total_amount: 230.0,
            invoice_number: "INV00000004ABCD".to_string(),
            items: vec![line("Breakfast", 2, 15.0)],
        })
        .await?;

    let updated = repo
        .update(UpdateBillParams {
            id: bill.id,
            taxes: 0.0,
            discount: 30.0,
            total_amount: 200.0,
            items: None,
        })
        .await?;

    assert_eq!(updated.discount, 30.0);
    assert_eq!(updated.room_charges, 200.0);
    assert_eq!(updated.items.len(), 1);
    assert_eq!(updated.items[0].name, "Breakfast");

    Ok(())
}

/// Tests updating a bill that does not exist.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_missing_bill() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BillingRepository::new(db);
    let result = repo
        .update(UpdateBillParams {
            id: 9999,
            taxes: 0.0,
            discount: 0.0,
            total_amount: 0.0,
            items: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
