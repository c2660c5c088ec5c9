//! Shared server state

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use uuid::Uuid;

/// Upper bound on workbooks held for download at once; the oldest entry is
/// evicted when a new one would exceed it.
const MAX_STORED_WORKBOOKS: usize = 16;

/// Shared state: a bounded one-shot store of produced workbooks.
///
/// Each successful conversion parks its bytes here under a fresh id; the
/// download handler removes the entry on first fetch. Nothing else is shared
/// between requests.
#[derive(Clone, Default)]
pub struct AppState {
    downloads: Arc<Mutex<VecDeque<(Uuid, Vec<u8>)>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Park workbook bytes and return their download id
    pub fn store(&self, bytes: Vec<u8>) -> Uuid {
        let id = Uuid::new_v4();
        let mut downloads = self.downloads.lock().expect("downloads lock poisoned");
        downloads.push_back((id, bytes));
        while downloads.len() > MAX_STORED_WORKBOOKS {
            downloads.pop_front();
        }
        id
    }

    /// Remove and return stored bytes; `None` when unknown or already fetched
    pub fn take(&self, id: Uuid) -> Option<Vec<u8>> {
        let mut downloads = self.downloads.lock().expect("downloads lock poisoned");
        let pos = downloads.iter().position(|(key, _)| *key == id)?;
        downloads.remove(pos).map(|(_, bytes)| bytes)
    }
}
