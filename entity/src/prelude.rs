pub use super::billing::Entity as Billing;
pub use super::billing_service_item::Entity as BillingServiceItem;
pub use super::notification::Entity as Notification;
pub use super::reservation::Entity as Reservation;
pub use super::room::Entity as Room;
pub use super::setting::Entity as Setting;
pub use super::user::Entity as User;
