use super::*;

/// Tests that the first update creates the singleton row.
///
/// Expected: Ok with provided fields set and the rest defaulted
#[tokio::test]
async fn creates_row_on_first_update() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Setting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SettingRepository::new(db);
    let settings = repo
        .update(UpdateSettingsParams {
            notifications_enabled: None,
            notify_on_booking: Some(false),
            default_tax_rate: None,
        })
        .await?;

    assert!(settings.notifications_enabled);
    assert!(!settings.notify_on_booking);
    assert_eq!(settings.default_tax_rate, 0.0);

    Ok(())
}

/// Tests that later updates merge into the stored values.
///
/// Fields absent from the params keep their previously stored value rather
/// than resetting to defaults.
///
/// Expected: Ok with earlier changes preserved
#[tokio::test]
async fn merges_partial_updates() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Setting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SettingRepository::new(db);
    repo.update(UpdateSettingsParams {
        notifications_enabled: Some(false),
        notify_on_booking: None,
        default_tax_rate: Some(10.0),
    })
    .await?;

    let settings = repo
        .update(UpdateSettingsParams {
            notifications_enabled: None,
            notify_on_booking: Some(false),
            default_tax_rate: None,
        })
        .await?;

    assert!(!settings.notifications_enabled);
    assert!(!settings.notify_on_booking);
    assert_eq!(settings.default_tax_rate, 10.0);

    // Verify persistence through a fresh read
    let stored = repo.get().await?;
    assert_eq!(stored, settings);

    Ok(())
}
