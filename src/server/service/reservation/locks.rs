//! Per-room booking locks.
//!
//! Conflict detection is a read followed by a write, so two concurrent
//! bookings for the same room could both pass the read before either writes.
//! Serializing bookings per room through an async mutex closes that window:
//! while one booking holds a room's lock, the other waits and then sees the
//! first reservation in its conflict check. Bookings for different rooms do
//! not contend.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

/// Registry of per-room booking locks, held in application state.
///
/// Locks are created lazily on first use and kept for the lifetime of the
/// process; the registry is bounded by the number of rooms.
#[derive(Clone, Default)]
pub struct RoomLocks {
    locks: Arc<Mutex<HashMap<i32, Arc<Mutex<()>>>>>,
}

impl RoomLocks {
    /// Creates an empty lock registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the booking lock for a room, waiting if another booking on
    /// the same room is in flight.
    ///
    /// The returned guard is owned, so it can be held across awaits for the
    /// full check-then-insert sequence and released on drop.
    pub async fn acquire(&self, room_id: i32) -> OwnedMutexGuard<()> {
        let lock = {
            let mut map = self.locks.lock().await;
            map.entry(room_id)
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };

        lock.lock_owned().await
    }
}
