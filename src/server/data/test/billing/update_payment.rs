use super::*;

/// Tests recording a payment with a method and timestamp.
///
/// Expected: Ok with status, method and paid_at set
#[tokio::test]
async fn records_payment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (guest, _room, reservation) =
        factory::helpers::create_reservation_with_dependencies(db).await?;
    let bill = factory::billing::create_bill(db, reservation.id, guest.id).await?;

    let paid_at = Utc::now();
    let repo = BillingRepository::new(db);
    let updated = repo
        .update_payment(
            bill.id,
            PaymentStatus::Paid,
            Some("card".to_string()),
            Some(paid_at),
        )
        .await?;

    assert_eq!(updated.payment_status, PaymentStatus::Paid);
    assert_eq!(updated.payment_method.as_deref(), Some("card"));
    assert!(updated.paid_at.is_some());

    Ok(())
}

/// Tests a status-only change that keeps the existing method and timestamp.
///
/// Moving a paid bill to refunded must not erase when and how it was paid.
///
/// Expected: Ok with method and paid_at untouched
#[tokio::test]
async fn keeps_method_and_timestamp_when_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (guest, _room, reservation) =
        factory::helpers::create_reservation_with_dependencies(db).await?;
    let bill = factory::billing::create_bill(db, reservation.id, guest.id).await?;

    let paid_at = Utc::now();
    let repo = BillingRepository::new(db);
    repo.update_payment(
        bill.id,
        PaymentStatus::Paid,
        Some("cash".to_string()),
        Some(paid_at),
    )
    .await?;

    let refunded = repo
        .update_payment(bill.id, PaymentStatus::Refunded, None, None)
        .await?;

    assert_eq!(refunded.payment_status, PaymentStatus::Refunded);
    assert_eq!(refunded.payment_method.as_deref(), Some("cash"));
    assert!(refunded.paid_at.is_some());

    Ok(())
}
