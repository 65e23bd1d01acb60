//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let room = factory::room::create_room(&db).await?;
//!
//!     // Create with all dependencies
//!     let (guest, room, reservation) =
//!         factory::helpers::create_reservation_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use entity::user::UserRole;
//! use test_utils::factory;
//!
//! let staff = factory::user::UserFactory::new(&db)
//!     .name("Front Desk")
//!     .role(UserRole::Staff)
//!     .build()
//!     .await?;
//!
//! let suite = factory::room::RoomFactory::new(&db)
//!     .room_type(entity::room::RoomType::Suite)
//!     .price_per_night(320.0)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create account entities
//! - `room` - Create room entities
//! - `reservation` - Create reservation entities
//! - `billing` - Create billing entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod billing;
pub mod helpers;
pub mod reservation;
pub mod room;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use billing::create_bill;
pub use reservation::create_reservation;
pub use room::create_room;
pub use user::create_user;
