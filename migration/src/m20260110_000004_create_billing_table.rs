use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260110_000001_create_user_table::User,
    m20260110_000003_create_reservation_table::Reservation,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Billing::Table)
                    .if_not_exists()
                    .col(pk_auto(Billing::Id))
                    .col(integer(Billing::ReservationId))
                    .col(integer(Billing::GuestId))
                    .col(double(Billing::RoomCharges))
                    .col(double(Billing::Taxes))
                    .col(double(Billing::Discount))
                    .col(double(Billing::TotalAmount))
                    .col(string(Billing::PaymentStatus))
                    .col(string_null(Billing::PaymentMethod))
                    .col(string_uniq(Billing::InvoiceNumber))
                    .col(timestamp_null(Billing::PaidAt))
                    .col(
                        timestamp(Billing::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_billing_reservation_id")
                            .from(Billing::Table, Billing::ReservationId)
                            .to(Reservation::Table, Reservation::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_billing_guest_id")
                            .from(Billing::Table, Billing::GuestId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Billing::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Billing {
    Table,
    Id,
    ReservationId,
    GuestId,
    RoomCharges,
    Taxes,
    Discount,
    TotalAmount,
    PaymentStatus,
    PaymentMethod,
    InvoiceNumber,
    PaidAt,
    CreatedAt,
}
