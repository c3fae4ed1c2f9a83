//! Owned-set management with persistence and reactive updates.
//!
//! This module provides the `CollectionManager` which owns the live owned
//! set, persists every successful mutation through the collection store, and
//! notifies UI subscribers of changes.

use std::sync::Arc;

use {
    async_channel::{Receiver, Sender, unbounded},
    parking_lot::RwLock,
    tracing::{debug, warn},
};

use crate::collection::{
    set::VolumeSet,
    store::{CollectionStore, StoreError},
};

/// Collection change events.
#[derive(Debug, Clone)]
pub enum CollectionEvent {
    /// The owned set changed; carries a snapshot of the new set.
    OwnedChanged(VolumeSet),
}

/// Manages the owned set with persistence and subscriber fan-out.
///
/// Every mutation that actually changes the set is written to disk and
/// broadcast to subscribers. No-op mutations (re-applying the current
/// state) neither persist nor notify, which keeps checkbox signal handlers
/// from echoing programmatic updates back into the manager.
#[derive(Debug, Clone)]
pub struct CollectionManager {
    /// The live owned set.
    owned: Arc<RwLock<VolumeSet>>,
    /// Store used to persist the set after each mutation.
    store: Arc<CollectionStore>,
    /// List of active subscribers for manual broadcast fan-out.
    subscribers: Arc<RwLock<Vec<Sender<CollectionEvent>>>>,
}

impl CollectionManager {
    /// Creates a new collection manager, loading persisted state.
    ///
    /// A corrupt state file logs a warning and falls back to the empty set;
    /// the file on disk is left alone until the next successful mutation
    /// overwrites it.
    ///
    /// # Arguments
    ///
    /// * `store` - Store to load from and persist to.
    ///
    /// # Returns
    ///
    /// A new `CollectionManager` instance.
    #[must_use]
    pub fn new(store: CollectionStore) -> Self {
        let owned = store.load().unwrap_or_else(|e| {
            warn!(
                "Could not read collection state ({}), starting with an empty collection",
                e
            );
            VolumeSet::new()
        });
        debug!("CollectionManager: loaded {} owned volumes", owned.len());

        Self {
            owned: Arc::new(RwLock::new(owned)),
            store: Arc::new(store),
            subscribers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Subscribes to collection change events.
    ///
    /// # Returns
    ///
    /// A receiver that yields a `CollectionEvent` per change.
    pub fn subscribe(&self) -> Receiver<CollectionEvent> {
        let (tx, rx) = unbounded();
        self.subscribers.write().push(tx);
        rx
    }

    /// Helper to broadcast an event to all subscribers.
    /// Cleans up closed channels.
    fn broadcast_event(&self, event: &CollectionEvent) -> usize {
        let mut subscribers = self.subscribers.write();
        let mut active = Vec::with_capacity(subscribers.len());
        let mut count = 0;

        for tx in subscribers.iter() {
            if let Ok(()) = tx.try_send(event.clone()) {
                active.push(tx.clone());
                count += 1;
            }
        }

        *subscribers = active;
        count
    }

    /// Gets an owned copy of the current set for rendering.
    ///
    /// # Returns
    ///
    /// A snapshot of the owned set.
    #[must_use]
    pub fn snapshot(&self) -> VolumeSet {
        self.owned.read().clone()
    }

    /// Flips the membership of a volume.
    ///
    /// # Arguments
    ///
    /// * `number` - Volume number to toggle.
    pub fn toggle(&self, number: u16) {
        let changed = self.owned.write().toggle(number);
        if changed {
            debug!("CollectionManager: toggled volume {}", number);
            self.persist_and_notify();
        }
    }

    /// Writes the membership of a volume to an explicit value.
    ///
    /// # Arguments
    ///
    /// * `number` - Volume number to write.
    /// * `owned` - Desired membership.
    pub fn set_owned(&self, number: u16, owned: bool) {
        let changed = self.owned.write().set_owned(number, owned);
        if changed {
            debug!("CollectionManager: set volume {} owned={}", number, owned);
            self.persist_and_notify();
        }
    }

    /// Marks every volume in the series as owned.
    pub fn mark_all(&self) {
        {
            let mut owned = self.owned.write();
            if owned.is_complete() {
                return;
            }
            owned.mark_all();
        }
        self.persist_and_notify();
    }

    /// Removes every volume from the set.
    pub fn clear(&self) {
        {
            let mut owned = self.owned.write();
            if owned.is_empty() {
                return;
            }
            owned.clear();
        }
        self.persist_and_notify();
    }

    /// Replaces the set with its complement within the series range.
    pub fn invert(&self) {
        self.owned.write().invert();
        self.persist_and_notify();
    }

    /// Replaces the whole set, typically from an imported backup.
    ///
    /// Unlike the other mutations, persistence failures are propagated here:
    /// a user who just imported a backup expects it to stick.
    ///
    /// # Arguments
    ///
    /// * `new_set` - The replacement set.
    ///
    /// # Returns
    ///
    /// A `Result` indicating success or failure.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the new set cannot be written to disk.
    pub fn replace(&self, new_set: VolumeSet) -> Result<(), StoreError> {
        {
            let mut owned = self.owned.write();
            if *owned == new_set {
                return Ok(());
            }
            *owned = new_set;
        }

        let snapshot = self.snapshot();
        self.store.save(&snapshot)?;
        self.broadcast_event(&CollectionEvent::OwnedChanged(snapshot));
        Ok(())
    }

    /// Persists the current set and notifies subscribers.
    ///
    /// Persistence failures are logged rather than propagated; the live set
    /// stays authoritative and the next successful save catches up.
    fn persist_and_notify(&self) {
        let snapshot = self.snapshot();
        if let Err(e) = self.store.save(&snapshot) {
            warn!("Failed to persist collection state: {}", e);
        }
        self.broadcast_event(&CollectionEvent::OwnedChanged(snapshot));
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use crate::{
        collection::{
            set::{SERIES_TOTAL, VolumeSet},
            store::CollectionStore,
        },
        state::collection_manager::{CollectionEvent, CollectionManager},
    };

    fn manager_in(dir: &tempfile::TempDir) -> CollectionManager {
        CollectionManager::new(CollectionStore::with_state_path(
            dir.path().join("collection.json"),
        ))
    }

    #[test]
    fn test_toggle_persists_and_notifies() {
        let dir = tempdir().unwrap();
        let manager = manager_in(&dir);
        let rx = manager.subscribe();

        manager.toggle(12);

        let CollectionEvent::OwnedChanged(snapshot) = rx.try_recv().unwrap();
        assert_eq!(snapshot.as_slice(), &[12]);

        let reloaded = manager_in(&dir);
        assert_eq!(reloaded.snapshot().as_slice(), &[12]);
    }

    #[test]
    fn test_double_toggle_restores_original_state() {
        let dir = tempdir().unwrap();
        let manager = manager_in(&dir);

        manager.toggle(7);
        manager.toggle(7);
        assert!(manager.snapshot().is_empty());
    }

    #[test]
    fn test_set_owned_to_current_value_is_silent() {
        let dir = tempdir().unwrap();
        let manager = manager_in(&dir);
        manager.toggle(5);

        let rx = manager.subscribe();
        manager.set_owned(5, true);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_mark_all_clear_and_invert() {
        let dir = tempdir().unwrap();
        let manager = manager_in(&dir);

        manager.mark_all();
        assert!(manager.snapshot().is_complete());

        manager.clear();
        assert!(manager.snapshot().is_empty());

        manager.toggle(1);
        manager.invert();
        let snapshot = manager.snapshot();
        assert_eq!(snapshot.len(), usize::from(SERIES_TOTAL) - 1);
        assert!(!snapshot.contains(1));

        manager.invert();
        assert_eq!(manager.snapshot().as_slice(), &[1]);
    }

    #[test]
    fn test_replace_persists_imported_set() {
        let dir = tempdir().unwrap();
        let manager = manager_in(&dir);
        let imported = VolumeSet::from_numbers(vec![10, 20, 30]);

        manager.replace(imported.clone()).unwrap();
        assert_eq!(manager.snapshot(), imported);

        let reloaded = manager_in(&dir);
        assert_eq!(reloaded.snapshot(), imported);
    }

    #[test]
    fn test_corrupt_state_file_falls_back_to_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("collection.json");
        std::fs::write(&path, "{{{{").unwrap();

        let manager = CollectionManager::new(CollectionStore::with_state_path(path));
        assert!(manager.snapshot().is_empty());
    }
}
