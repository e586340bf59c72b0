//! Channel registry entity.
//!
//! Holds the invite metadata for every force-subscription channel the bot
//! manages. The registry is never read from configuration sources: it starts
//! empty at load time and is filled in by the bot runtime once it has resolved
//! each channel's invite link.
//!
//! Concurrency: the registry is the only part of [`Settings`] that is written
//! after startup. Clones share one underlying [`DashMap`], so handlers may
//! insert and read entries concurrently without extra locking.
//!
//! [`Settings`]: crate::config::Settings

use std::collections::BTreeMap;
use std::sync::Arc;

use dashmap::DashMap;
use serde::{Serialize, Serializer};

/// Invite metadata for a single managed channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelInfo {
    /// Whether joining requires an approved join request
    pub is_private: bool,

    /// Invite link shown to users who have not joined yet
    pub invite_link: String,

    /// Telegram chat ID (negative for channels and supergroups)
    pub channel_id: i64,
}

/// Shared, concurrently writable map of channel key to [`ChannelInfo`].
#[derive(Debug, Clone, Default)]
pub struct ChannelRegistry {
    inner: Arc<DashMap<String, ChannelInfo>>,
}

impl ChannelRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an entry, returning the previous value.
    pub fn insert(&self, key: impl Into<String>, info: ChannelInfo) -> Option<ChannelInfo> {
        self.inner.insert(key.into(), info)
    }

    /// Get a copy of an entry.
    pub fn get(&self, key: &str) -> Option<ChannelInfo> {
        self.inner.get(key).map(|entry| entry.value().clone())
    }

    /// Remove an entry.
    pub fn remove(&self, key: &str) -> Option<ChannelInfo> {
        self.inner.remove(key).map(|(_, info)| info)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Registered keys in sorted order.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.inner.iter().map(|e| e.key().clone()).collect();
        keys.sort();
        keys
    }

    /// Point-in-time copy of every entry, sorted by key.
    pub fn snapshot(&self) -> BTreeMap<String, ChannelInfo> {
        self.inner
            .iter()
            .map(|e| (e.key().clone(), e.value().clone()))
            .collect()
    }
}

impl Serialize for ChannelRegistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.snapshot())
    }
}
