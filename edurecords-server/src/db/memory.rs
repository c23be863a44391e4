//! In-process record store
//!
//! Keeps records in insertion order behind a tokio `RwLock`. Used by the
//! test suites and by `edurecords serve --memory`.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::store::{DbError, GenderCount, RecordStore};
use crate::models::{EducationFields, EducationRecord, RecordId};

/// Record store backed by a `Vec`
#[derive(Default)]
pub struct MemoryRecordStore {
    records: RwLock<Vec<EducationRecord>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn insert(&self, fields: EducationFields) -> Result<EducationRecord, DbError> {
        let record = EducationRecord {
            id: RecordId::new(),
            fields,
        };
        self.records.write().await.push(record.clone());
        Ok(record)
    }

    async fn find_all(&self) -> Result<Vec<EducationRecord>, DbError> {
        Ok(self.records.read().await.clone())
    }

    async fn find_by_id(&self, id: RecordId) -> Result<Option<EducationRecord>, DbError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id == id).cloned())
    }

    async fn replace_by_id(
        &self,
        id: RecordId,
        fields: EducationFields,
    ) -> Result<Option<EducationRecord>, DbError> {
        let mut records = self.records.write().await;
        Ok(records.iter_mut().find(|r| r.id == id).map(|r| {
            r.fields = fields;
            r.clone()
        }))
    }

    async fn delete_by_id(&self, id: RecordId) -> Result<bool, DbError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id != id);
        Ok(records.len() != before)
    }

    async fn gender_counts(&self) -> Result<Vec<GenderCount>, DbError> {
        let records = self.records.read().await;
        let mut groups: BTreeMap<&str, i64> = BTreeMap::new();
        for record in records.iter() {
            *groups.entry(record.fields.gender.as_str()).or_default() += 1;
        }

        Ok(groups
            .into_iter()
            .map(|(gender, count)| GenderCount {
                gender: gender.to_owned(),
                count,
            })
            .collect())
    }

    async fn find_with_min_scores(&self, threshold: i32) -> Result<Vec<EducationRecord>, DbError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|r| r.fields.meets_threshold(threshold))
            .cloned()
            .collect())
    }

    async fn ping(&self) -> Result<(), DbError> {
        Ok(())
    }
}
