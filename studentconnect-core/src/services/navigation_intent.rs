//! Navigation intent persistence (write once, read once)

use crate::error::CoreResult;
use crate::traits::IntentStore;
use crate::types::{INTENT_SET, PendingNavigation};

/// Read and clear the pending navigation intent.
///
/// Intents are checked in `PendingNavigation::ALL` order; only the consumed
/// key is deleted. Keys holding anything other than `"true"` are left alone.
pub fn take_pending_navigation(
    store: &mut dyn IntentStore,
) -> CoreResult<Option<PendingNavigation>> {
    for intent in PendingNavigation::ALL {
        let key = intent.storage_key();
        if store.get(key)?.as_deref() == Some(INTENT_SET) {
            store.remove(key)?;
            log::debug!("Consumed navigation intent {key}");
            return Ok(Some(intent));
        }
    }
    Ok(None)
}

/// Record an intent for the next page load
pub fn persist_pending_navigation(
    store: &mut dyn IntentStore,
    intent: PendingNavigation,
) -> CoreResult<()> {
    store.set(intent.storage_key(), INTENT_SET)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::InMemoryIntentStore;

    #[test]
    fn intent_is_read_once() {
        let mut store = InMemoryIntentStore::new();
        persist_pending_navigation(&mut store, PendingNavigation::Profile).unwrap();

        assert_eq!(
            take_pending_navigation(&mut store).unwrap(),
            Some(PendingNavigation::Profile)
        );
        assert!(!store.contains("showProfile"));
        assert_eq!(take_pending_navigation(&mut store).unwrap(), None);
    }

    #[test]
    fn create_event_takes_priority_and_profile_stays_pending() {
        let mut store = InMemoryIntentStore::new();
        store.set("showProfile", "true").unwrap();
        store.set("showCreateEvent", "true").unwrap();

        assert_eq!(
            take_pending_navigation(&mut store).unwrap(),
            Some(PendingNavigation::CreateEvent)
        );
        assert!(store.contains("showProfile"));
        assert_eq!(
            take_pending_navigation(&mut store).unwrap(),
            Some(PendingNavigation::Profile)
        );
    }

    #[test]
    fn non_true_values_are_not_intents() {
        let mut store = InMemoryIntentStore::new();
        store.set("showCreateEvent", "false").unwrap();

        assert_eq!(take_pending_navigation(&mut store).unwrap(), None);
        assert!(store.contains("showCreateEvent"));
    }
}
