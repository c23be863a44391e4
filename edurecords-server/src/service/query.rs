//! Read operations: list, get, count by gender, best scores

use crate::db::RecordStore;
use crate::models::{EducationRecord, Gender, RecordId};

use super::{RecordPolicy, ServiceError};

/// Query layer over a borrowed store
pub struct EducationQueries<'a> {
    store: &'a dyn RecordStore,
    policy: RecordPolicy,
}

impl<'a> EducationQueries<'a> {
    pub fn new(store: &'a dyn RecordStore, policy: RecordPolicy) -> Self {
        Self { store, policy }
    }

    /// Every record in storage order.
    pub async fn list_all(&self) -> Result<Vec<EducationRecord>, ServiceError> {
        Ok(self.store.find_all().await?)
    }

    /// A single record; absence is `NotFound`.
    pub async fn get(&self, id: RecordId) -> Result<EducationRecord, ServiceError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::education_not_found(id))
    }

    /// Count records whose gender equals the requested one.
    ///
    /// `gender` must be `male` or `female`; anything else, including no
    /// value, is `InvalidArgument` and never reaches the store.
    pub async fn count_by_gender(&self, gender: Option<&str>) -> Result<i64, ServiceError> {
        let gender = Gender::from_param(gender)?;

        let counts = self.store.gender_counts().await?;
        let count = counts
            .into_iter()
            .find(|c| c.gender == gender.as_str())
            .map_or(0, |c| c.count);

        tracing::debug!(%gender, count, "counted records by gender");
        Ok(count)
    }

    /// Records with all three scores at or above the configured threshold.
    pub async fn best_scores(&self) -> Result<Vec<EducationRecord>, ServiceError> {
        Ok(self
            .store
            .find_with_min_scores(self.policy.best_score_threshold)
            .await?)
    }
}
