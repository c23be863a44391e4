//! Schema setup for the educations table

use sqlx::PgPool;

/// Create the educations table and its indexes if missing.
///
/// Ids come from `gen_random_uuid()` (built in since PostgreSQL 13).
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running educations migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS educations (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            gender TEXT NOT NULL,
            race_ethnicity TEXT NOT NULL,
            parental_education_level TEXT NOT NULL,
            lunch TEXT NOT NULL,
            test_preparation_course TEXT NOT NULL,
            math_score INTEGER NOT NULL,
            reading_score INTEGER NOT NULL,
            writing_score INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_educations_gender ON educations(gender)")
        .execute(pool)
        .await?;

    tracing::info!("Educations migrations complete");
    Ok(())
}
