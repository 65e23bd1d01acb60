use super::*;

/// Tests persisting a new bill with line items.
///
/// Payment state starts as pending with no method or paid timestamp, and the
/// line items come back in insertion order.
///
/// Expected: Ok with bill and items created
#[tokio::test]
async fn creates_bill_with_items() -> Result<(), DbErr> {
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
            taxes: 25.0,
            discount: 10.0,
            total_amount: 275.0,
            invoice_number: "INV00000001ABCD".to_string(),
            items: vec![line("Breakfast", 2, 15.0), line("Spa", 1, 30.0)],
        })
        .await?;

    assert_eq!(bill.reservation_id, reservation.id);
    assert_eq!(bill.payment_status, PaymentStatus::Pending);
    assert!(bill.payment_method.is_none());
    assert!(bill.paid_at.is_none());
    assert_eq!(bill.items.len(), 2);
    assert_eq!(bill.items[0].name, "Breakfast");
    assert_eq!(bill.items[0].total, 30.0);
    assert_eq!(bill.items[1].name, "Spa");

    Ok(())
}

/// Tests persisting a bill without line items.
///
/// Auto-generated booking bills carry only the room charges.
///
/// Expected: Ok with an empty item list
#[tokio::test]
async fn creates_bill_without_items() -> Result<(), DbErr> {
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
            total_amount: 200.0,
            invoice_number: "INV00000002WXYZ".to_string(),
            items: vec![],
        })
        .await?;

    assert!(bill.items.is_empty());
    assert_eq!(bill.total_amount, 200.0);

    Ok(())
}
