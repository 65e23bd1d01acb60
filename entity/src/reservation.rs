use sea_orm::entity::prelude::*;

/// Lifecycle state of a reservation.
///
/// Allowed transitions: pending → confirmed → checked-in → checked-out, and
/// pending/confirmed → cancelled. Reservations are never hard-deleted.
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum ReservationStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "confirmed")]
    Confirmed,
    #[sea_orm(string_value = "checked-in")]
    CheckedIn,
    #[sea_orm(string_value = "checked-out")]
    CheckedOut,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

impl ReservationStatus {
    /// Whether this status blocks other reservations on the same room
    /// (the "no double-booking" invariant only covers these states).
    pub fn blocks_room(&self) -> bool {
        matches!(self, ReservationStatus::Confirmed | ReservationStatus::CheckedIn)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum BookingSource {
    #[sea_orm(string_value = "website")]
    Website,
    #[sea_orm(string_value = "front_desk")]
    FrontDesk,
    #[sea_orm(string_value = "phone")]
    Phone,
    #[sea_orm(string_value = "partner")]
    Partner,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "reservation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub guest_id: i32,
    pub room_id: i32,
    pub check_in: DateTimeUtc,
    pub check_out: DateTimeUtc,
    pub guest_count: i32,
    pub status: ReservationStatus,
    /// Nightly price times nights, frozen at creation time. Post-booking
    /// financial state lives on the billing record instead.
    pub total_amount: f64,
    #[sea_orm(unique)]
    pub confirmation_number: String,
    pub source: BookingSource,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::GuestId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::room::Entity",
        from = "Column::RoomId",
        to = "super::room::Column::Id"
    )]
    Room,
    #[sea_orm(has_many = "super::billing::Entity")]
    Billing,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Room.def()
    }
}

impl Related<super::billing::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Billing.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
