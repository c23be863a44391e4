//! Application state shared across handlers

use std::sync::Arc;

use crate::db::RecordStore;
use crate::service::{EducationMutations, EducationQueries, RecordPolicy};

/// Shared application state
///
/// The store handle is opened once at startup and injected here; cloning
/// the state only bumps a reference count.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: Arc<dyn RecordStore>,
    policy: RecordPolicy,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>, policy: RecordPolicy) -> Self {
        Self {
            inner: Arc::new(AppStateInner { store, policy }),
        }
    }

    pub fn store(&self) -> &dyn RecordStore {
        self.inner.store.as_ref()
    }

    pub fn policy(&self) -> RecordPolicy {
        self.inner.policy
    }

    /// Query layer bound to this state's store.
    pub fn queries(&self) -> EducationQueries<'_> {
        EducationQueries::new(self.store(), self.policy())
    }

    /// Mutation layer bound to this state's store.
    pub fn mutations(&self) -> EducationMutations<'_> {
        EducationMutations::new(self.store(), self.policy())
    }
}
