//! Education repository - PostgreSQL record store
//!
//! One statement per operation:
//! - insert/replace use RETURNING (no read-after-write)
//! - gender counts are a single GROUP BY

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::db::store::{DbError, GenderCount, RecordStore};
use crate::models::{EducationFields, EducationRecord, RecordId};

/// Column list shared by every SELECT/RETURNING
const COLUMNS: &str = "id, gender, race_ethnicity, parental_education_level, lunch, \
                       test_preparation_course, math_score, reading_score, writing_score";

/// Education row from database
#[derive(Debug, Clone, FromRow)]
struct EducationRow {
    id: Uuid,
    gender: String,
    race_ethnicity: String,
    parental_education_level: String,
    lunch: String,
    test_preparation_course: String,
    math_score: i32,
    reading_score: i32,
    writing_score: i32,
}

impl From<EducationRow> for EducationRecord {
    fn from(r: EducationRow) -> Self {
        Self {
            id: RecordId::from(r.id),
            fields: EducationFields {
                gender: r.gender,
                race_ethnicity: r.race_ethnicity,
                parental_education_level: r.parental_education_level,
                lunch: r.lunch,
                test_preparation_course: r.test_preparation_course,
                math_score: r.math_score,
                reading_score: r.reading_score,
                writing_score: r.writing_score,
            },
        }
    }
}

/// Education repository over a shared pool
#[derive(Clone)]
pub struct PgRecordStore {
    pool: PgPool,
}

impl PgRecordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn insert(&self, fields: EducationFields) -> Result<EducationRecord, DbError> {
        let row = sqlx::query_as::<_, EducationRow>(&format!(
            r#"
            INSERT INTO educations (
                gender, race_ethnicity, parental_education_level, lunch,
                test_preparation_course, math_score, reading_score, writing_score
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&fields.gender)
        .bind(&fields.race_ethnicity)
        .bind(&fields.parental_education_level)
        .bind(&fields.lunch)
        .bind(&fields.test_preparation_course)
        .bind(fields.math_score)
        .bind(fields.reading_score)
        .bind(fields.writing_score)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn find_all(&self) -> Result<Vec<EducationRecord>, DbError> {
        let rows =
            sqlx::query_as::<_, EducationRow>(&format!("SELECT {COLUMNS} FROM educations"))
                .fetch_all(&self.pool)
                .await?;

        Ok(rows.into_iter().map(EducationRecord::from).collect())
    }

    async fn find_by_id(&self, id: RecordId) -> Result<Option<EducationRecord>, DbError> {
        let row =
            sqlx::query_as::<_, EducationRow>(&format!("SELECT {COLUMNS} FROM educations WHERE id = $1"))
                .bind(id.as_uuid())
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(EducationRecord::from))
    }

    async fn replace_by_id(
        &self,
        id: RecordId,
        fields: EducationFields,
    ) -> Result<Option<EducationRecord>, DbError> {
        let row = sqlx::query_as::<_, EducationRow>(&format!(
            r#"
            UPDATE educations SET
                gender = $2,
                race_ethnicity = $3,
                parental_education_level = $4,
                lunch = $5,
                test_preparation_course = $6,
                math_score = $7,
                reading_score = $8,
                writing_score = $9
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id.as_uuid())
        .bind(&fields.gender)
        .bind(&fields.race_ethnicity)
        .bind(&fields.parental_education_level)
        .bind(&fields.lunch)
        .bind(&fields.test_preparation_course)
        .bind(fields.math_score)
        .bind(fields.reading_score)
        .bind(fields.writing_score)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(EducationRecord::from))
    }

    async fn delete_by_id(&self, id: RecordId) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM educations WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn gender_counts(&self) -> Result<Vec<GenderCount>, DbError> {
        let rows = sqlx::query_as::<_, (String, i64)>(
            r#"
            SELECT gender, COUNT(*) AS count
            FROM educations
            GROUP BY gender
            ORDER BY gender
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(gender, count)| GenderCount { gender, count })
            .collect())
    }

    async fn find_with_min_scores(&self, threshold: i32) -> Result<Vec<EducationRecord>, DbError> {
        let rows = sqlx::query_as::<_, EducationRow>(&format!(
            r#"
            SELECT {COLUMNS} FROM educations
            WHERE math_score >= $1
              AND reading_score >= $1
              AND writing_score >= $1
            "#
        ))
        .bind(threshold)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(EducationRecord::from).collect())
    }

    async fn ping(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::DEFAULT_MAX_CONNECTIONS;
    use crate::db::{create_pool, migrations};

    // Integration tests - run with DATABASE_URL set
    // cargo test -p edurecords-server -- --ignored

    async fn store() -> PgRecordStore {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url, DEFAULT_MAX_CONNECTIONS).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");
        PgRecordStore::new(pool)
    }

    fn fields(math: i32) -> EducationFields {
        EducationFields {
            gender: "female".into(),
            race_ethnicity: "group D".into(),
            parental_education_level: "master's degree".into(),
            lunch: "free/reduced".into(),
            test_preparation_course: "completed".into(),
            math_score: math,
            reading_score: 100,
            writing_score: 100,
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn insert_then_find() {
        let store = store().await;
        let created = store.insert(fields(88)).await.unwrap();
        let found = store.find_by_id(created.id).await.unwrap();

        assert_eq!(found, Some(created.clone()));
        assert!(store.delete_by_id(created.id).await.unwrap());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn replace_missing_returns_none() {
        let store = store().await;
        let replaced = store.replace_by_id(RecordId::new(), fields(10)).await.unwrap();
        assert!(replaced.is_none());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn min_scores_uses_all_three() {
        let store = store().await;
        let perfect = store.insert(fields(100)).await.unwrap();
        let near = store.insert(fields(99)).await.unwrap();

        let best = store.find_with_min_scores(100).await.unwrap();
        assert!(best.iter().any(|r| r.id == perfect.id));
        assert!(!best.iter().any(|r| r.id == near.id));

        store.delete_by_id(perfect.id).await.unwrap();
        store.delete_by_id(near.id).await.unwrap();
    }
}
