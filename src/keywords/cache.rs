// Process-lifetime memo cache keyed by exact input text.
//
// Nothing is ever evicted or invalidated. Hit and miss counts are kept so
// a run can report how many remote calls the cache saved.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::Mutex;

#[derive(Default)]
pub struct MemoCache {
    entries: Mutex<HashMap<String, String>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl MemoCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a cached result, counting the hit or miss.
    pub async fn get(&self, key: &str) -> Option<String> {
        let found = self.entries.lock().await.get(key).cloned();
        if found.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }
        found
    }

    pub async fn insert(&self, key: &str, value: String) {
        self.entries.lock().await.insert(key.to_string(), value);
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }
}
