use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Setting::Table)
                    .if_not_exists()
                    .col(integer(Setting::Id).primary_key())
                    .col(boolean(Setting::NotificationsEnabled).default(true))
                    .col(boolean(Setting::NotifyOnBooking).default(true))
                    .col(double(Setting::DefaultTaxRate).default(0.0))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Setting::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Setting {
    Table,
    Id,
    NotificationsEnabled,
    NotifyOnBooking,
    DefaultTaxRate,
}
