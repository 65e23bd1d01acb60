use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260110_000001_create_user_table::User, m20260110_000002_create_room_table::Room,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservation::Id))
                    .col(integer(Reservation::GuestId))
                    .col(integer(Reservation::RoomId))
                    .col(timestamp(Reservation::CheckIn))
                    .col(timestamp(Reservation::CheckOut))
                    .col(integer(Reservation::GuestCount))
                    .col(string(Reservation::Status))
                    .col(double(Reservation::TotalAmount))
                    .col(string_uniq(Reservation::ConfirmationNumber))
                    .col(string(Reservation::Source))
                    .col(
                        timestamp(Reservation::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Reservation::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_guest_id")
                            .from(Reservation::Table, Reservation::GuestId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_room_id")
                            .from(Reservation::Table, Reservation::RoomId)
                            .to(Room::Table, Room::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Conflict lookups always filter by room and date range.
        manager
            .create_index(
                Index::create()
                    .name("idx_reservation_room_dates")
                    .table(Reservation::Table)
                    .col(Reservation::RoomId)
                    .col(Reservation::CheckIn)
                    .col(Reservation::CheckOut)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reservation {
    Table,
    Id,
    GuestId,
    RoomId,
    CheckIn,
    CheckOut,
    GuestCount,
    Status,
    TotalAmount,
    ConfirmationNumber,
    Source,
    CreatedAt,
    UpdatedAt,
}
