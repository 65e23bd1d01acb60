use super::*;

/// Tests reading settings before any row exists.
///
/// The singleton row is created lazily by the first write; reads fall back
/// to defaults until then.
///
/// Expected: Ok with default settings
#[tokio::test]
async fn returns_defaults_without_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Setting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SettingRepository::new(db);
    let settings = repo.get().await?;

    assert_eq!(settings, HotelSettings::default());
    assert!(settings.notifications_enabled);
    assert!(settings.notify_on_booking);
    assert_eq!(settings.default_tax_rate, 0.0);

    Ok(())
}

/// Tests reading settings after a write created the row.
///
/// Expected: Ok with the stored values
#[tokio::test]
async fn returns_stored_settings() -> Result<(), DbErr> {
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
        default_tax_rate: Some(8.5),
    })
    .await?;

    let settings = repo.get().await?;

    assert!(!settings.notifications_enabled);
    assert!(settings.notify_on_booking);
    assert_eq!(settings.default_tax_rate, 8.5);

    Ok(())
}
