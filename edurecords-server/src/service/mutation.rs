//! Write operations: create, update, delete

use crate::db::RecordStore;
use crate::models::{EducationPayload, EducationRecord, RecordId};

use super::{MissingRecordPolicy, RecordPolicy, ServiceError};

/// Mutation layer over a borrowed store
pub struct EducationMutations<'a> {
    store: &'a dyn RecordStore,
    policy: RecordPolicy,
}

impl<'a> EducationMutations<'a> {
    pub fn new(store: &'a dyn RecordStore, policy: RecordPolicy) -> Self {
        Self { store, policy }
    }

    /// Validate and store a new record.
    pub async fn create(&self, payload: EducationPayload) -> Result<EducationRecord, ServiceError> {
        tracing::debug!(?payload, "received education data");
        let fields = payload.validate()?;

        let record = self.store.insert(fields).await?;
        tracing::info!(id = %record.id, "education created");
        Ok(record)
    }

    /// Replace every field of an existing record.
    ///
    /// Returns `Ok(None)` for a missing id under the lenient policy.
    pub async fn update(
        &self,
        id: RecordId,
        payload: EducationPayload,
    ) -> Result<Option<EducationRecord>, ServiceError> {
        let fields = payload.validate()?;

        match self.store.replace_by_id(id, fields).await? {
            Some(record) => {
                tracing::info!(%id, "education updated");
                Ok(Some(record))
            }
            None => self.on_missing(id).map(|()| None),
        }
    }

    /// Delete a record by id.
    ///
    /// Under the lenient policy deleting an absent id succeeds.
    pub async fn delete(&self, id: RecordId) -> Result<(), ServiceError> {
        if self.store.delete_by_id(id).await? {
            tracing::info!(%id, "education deleted");
            Ok(())
        } else {
            self.on_missing(id)
        }
    }

    fn on_missing(&self, id: RecordId) -> Result<(), ServiceError> {
        match self.policy.missing {
            MissingRecordPolicy::Lenient => {
                tracing::debug!(%id, "no education with this id, ignoring");
                Ok(())
            }
            MissingRecordPolicy::Strict => Err(ServiceError::education_not_found(id)),
        }
    }
}
