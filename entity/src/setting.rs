use sea_orm::entity::prelude::*;

/// Hotel-wide settings. A single row with a fixed primary key; repositories
/// fall back to defaults when the row is absent.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "setting")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub notifications_enabled: bool,
    pub notify_on_booking: bool,
    pub default_tax_rate: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
