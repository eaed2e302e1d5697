//! PostgreSQL schema migrations for phonebook storage.
//!
//! Length and uniqueness constraints are generated from `PERSON_FIELDS` so the
//! database and the in-process checks agree on every threshold.

use anyhow::Result;
use phonebook_core::PERSON_FIELDS;
use sqlx::PgPool;

/// Name of the unique constraint guarding `path`.
pub(crate) fn unique_constraint_name(path: &str) -> String {
    format!("persons_{path}_key")
}

/// Name of the check constraint enforcing the minimum length of `path`.
pub(crate) fn min_length_constraint_name(path: &str) -> String {
    format!("persons_{path}_min_length")
}

pub(crate) fn persons_table_ddl() -> String {
    let mut clauses = vec![
        "id UUID PRIMARY KEY".to_owned(),
        "name TEXT NOT NULL".to_owned(),
        "number TEXT NOT NULL".to_owned(),
        "created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()".to_owned(),
        "updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()".to_owned(),
    ];
    for spec in &PERSON_FIELDS {
        if spec.unique {
            clauses.push(format!(
                "CONSTRAINT {} UNIQUE ({})",
                unique_constraint_name(spec.path),
                spec.path
            ));
        }
        clauses.push(format!(
            "CONSTRAINT {} CHECK (char_length({}) >= {})",
            min_length_constraint_name(spec.path),
            spec.path,
            spec.min_length
        ));
    }
    format!("CREATE TABLE IF NOT EXISTS persons (\n    {}\n)", clauses.join(",\n    "))
}

/// Run all PostgreSQL migrations.
pub async fn run_pg_migrations(pool: &PgPool) -> Result<()> {
    sqlx::query(&persons_table_ddl()).execute(pool).await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_persons_created ON persons (created_at)")
        .execute(pool)
        .await?;

    tracing::debug!("persons schema ready");
    Ok(())
}
