use sea_orm_migration::{prelude::*, schema::*};

use super::m20260110_000004_create_billing_table::Billing;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BillingServiceItem::Table)
                    .if_not_exists()
                    .col(pk_auto(BillingServiceItem::Id))
                    .col(integer(BillingServiceItem::BillingId))
                    .col(string(BillingServiceItem::Name))
                    .col(string(BillingServiceItem::ServiceType))
                    .col(integer(BillingServiceItem::Quantity))
                    .col(double(BillingServiceItem::UnitPrice))
                    .col(double(BillingServiceItem::Total))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_billing_service_item_billing_id")
                            .from(BillingServiceItem::Table, BillingServiceItem::BillingId)
                            .to(Billing::Table, Billing::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BillingServiceItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BillingServiceItem {
    Table,
    Id,
    BillingId,
    Name,
    ServiceType,
    Quantity,
    UnitPrice,
    Total,
}
