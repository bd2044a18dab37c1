//! Revalidation cache for upstream response bodies.
//!
//! A body fetched successfully is reused for the length of the revalidation
//! window; the first request after the window expires goes upstream again.
//! Failed responses are never stored.
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

pub const DEFAULT_REVALIDATE_SECS: u64 = 3600;
const MAX_STORE_ENTRIES: usize = 1_000;

#[derive(Debug, Clone)]
pub struct CachedBody {
    pub body: String,
    pub stored_at: Instant,
}

#[async_trait]
pub trait ResponseStore: Send + Sync {
    async fn get(&self, key: &str) -> Option<CachedBody>;
    async fn put(&self, key: String, body: CachedBody);
}

/// In-process store. When full, entries older than `max_age` are dropped
/// before inserting; if that frees nothing the store is cleared.
pub struct MemoryStore {
    entries: Mutex<HashMap<String, CachedBody>>,
    max_entries: usize,
    max_age: Duration,
}

impl MemoryStore {
    pub fn new(max_age: Duration) -> Self {
        Self::with_capacity(max_age, MAX_STORE_ENTRIES)
    }

    pub fn with_capacity(max_age: Duration, max_entries: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            max_entries,
            max_age,
        }
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

#[async_trait]
impl ResponseStore for MemoryStore {
    async fn get(&self, key: &str) -> Option<CachedBody> {
        self.entries.lock().await.get(key).cloned()
    }

    async fn put(&self, key: String, body: CachedBody) {
        let mut guard = self.entries.lock().await;
        if guard.len() >= self.max_entries && !guard.contains_key(&key) {
            let max_age = self.max_age;
            guard.retain(|_, v| v.stored_at.elapsed() < max_age);
            if guard.len() >= self.max_entries {
                guard.clear();
            }
        }
        guard.insert(key, body);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevalidationPolicy {
    pub window: Duration,
}

impl RevalidationPolicy {
    pub fn new(window: Duration) -> Self {
        Self { window }
    }

    pub fn disabled() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn is_enabled(&self) -> bool {
        !self.window.is_zero()
    }

    pub fn is_fresh(&self, stored_at: Instant, now: Instant) -> bool {
        self.is_enabled() && now.saturating_duration_since(stored_at) < self.window
    }
}

impl Default for RevalidationPolicy {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_REVALIDATE_SECS))
    }
}

#[derive(Clone)]
pub struct ResponseCache {
    policy: RevalidationPolicy,
    store: Arc<dyn ResponseStore>,
}

impl ResponseCache {
    pub fn new(policy: RevalidationPolicy, store: Arc<dyn ResponseStore>) -> Self {
        Self { policy, store }
    }

    pub fn in_memory(policy: RevalidationPolicy) -> Self {
        Self::new(policy, Arc::new(MemoryStore::new(policy.window)))
    }

    pub fn policy(&self) -> RevalidationPolicy {
        self.policy
    }

    /// Body stored under `key` if it is still inside the window.
    pub async fn fresh(&self, key: &str) -> Option<String> {
        if !self.policy.is_enabled() {
            return None;
        }
        let entry = self.store.get(key).await?;
        self.policy
            .is_fresh(entry.stored_at, Instant::now())
            .then_some(entry.body)
    }

    pub async fn store(&self, key: &str, body: &str) {
        if !self.policy.is_enabled() {
            return;
        }
        self.store
            .put(
                key.to_string(),
                CachedBody {
                    body: body.to_string(),
                    stored_at: Instant::now(),
                },
            )
            .await;
    }
}

impl std::fmt::Debug for ResponseCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseCache")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
