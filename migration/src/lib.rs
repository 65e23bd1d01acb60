pub use sea_orm_migration::prelude::*;

mod m20260110_000001_create_user_table;
mod m20260110_000002_create_room_table;
mod m20260110_000003_create_reservation_table;
mod m20260110_000004_create_billing_table;
mod m20260110_000005_create_billing_service_item_table;
mod m20260110_000006_create_notification_table;
mod m20260110_000007_create_setting_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260110_000001_create_user_table::Migration),
            Box::new(m20260110_000002_create_room_table::Migration),
            Box::new(m20260110_000003_create_reservation_table::Migration),
            Box::new(m20260110_000004_create_billing_table::Migration),
            Box::new(m20260110_000005_create_billing_service_item_table::Migration),
            Box::new(m20260110_000006_create_notification_table::Migration),
            Box::new(m20260110_000007_create_setting_table::Migration),
        ]
    }
}
