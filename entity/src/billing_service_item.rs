use sea_orm::entity::prelude::*;

/// An additional-service line item on an invoice (room service, spa, laundry).
/// `total` is always `quantity * unit_price`, computed server-side.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "billing_service_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub billing_id: i32,
    pub name: String,
    pub service_type: String,
    pub quantity: i32,
    pub unit_price: f64,
    pub total: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::billing::Entity",
        from = "Column::BillingId",
        to = "super::billing::Column::Id"
    )]
    Billing,
}

impl Related<super::billing::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Billing.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
