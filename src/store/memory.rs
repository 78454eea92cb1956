use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::warn;

use super::id::{IdSource, UuidV4Source};
use crate::domain::ReceiptError;

/// Number of consecutive identifier collisions tolerated before giving up
pub const MAX_ID_ATTEMPTS: u8 = 3;

/// In-memory mapping from receipt id to points.
///
/// Records are write-once: `put` only ever inserts under a fresh key and
/// nothing exposes update or delete. Any number of readers may hold the
/// lock at once; an insert takes it exclusively for the single map
/// operation. Clones share the same map.
#[derive(Clone)]
pub struct ReceiptStore {
    points: Arc<RwLock<HashMap<String, i64>>>,
    ids: Arc<dyn IdSource>,
}

impl Default for ReceiptStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ReceiptStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReceiptStore").finish_non_exhaustive()
    }
}

impl ReceiptStore {
    pub fn new() -> Self {
        Self::with_id_source(Arc::new(UuidV4Source))
    }

    pub fn with_id_source(ids: Arc<dyn IdSource>) -> Self {
        Self {
            points: Arc::new(RwLock::new(HashMap::new())),
            ids,
        }
    }

    /// Store `points` under a freshly generated id and return the id.
    ///
    /// Ids are generated before the lock is taken; the write lock only
    /// covers the check-and-insert. A colliding id is never overwritten;
    /// after `MAX_ID_ATTEMPTS` collisions in a row the call fails.
    pub async fn put(&self, points: i64) -> Result<String, ReceiptError> {
        for attempt in 1..=MAX_ID_ATTEMPTS {
            let id = self.ids.next_id();

            if let Entry::Vacant(slot) = self.points.write().await.entry(id.clone()) {
                slot.insert(points);
                return Ok(id);
            }

            warn!(attempt = attempt, "Generated receipt id already exists, retrying");
        }

        Err(ReceiptError::IdentifierSpaceExhausted {
            attempts: MAX_ID_ATTEMPTS,
        })
    }

    /// Look up the points for `id`. Unknown or malformed ids are simply absent.
    pub async fn get(&self, id: &str) -> Option<i64> {
        self.points.read().await.get(id).copied()
    }

    pub async fn len(&self) -> usize {
        self.points.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.points.read().await.is_empty()
    }
}
