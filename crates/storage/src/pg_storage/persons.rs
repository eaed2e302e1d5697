//! PersonStore implementation for PgStorage.

use super::*;

use crate::pg_migrations::{min_length_constraint_name, unique_constraint_name};
use crate::traits::PersonStore;
use crate::types::{FieldViolation, check_input, parse_id};
use async_trait::async_trait;
use phonebook_core::{Person, PersonInput, PERSON_FIELDS};
use uuid::Uuid;

/// Field violation named by a constraint failure on INSERT/UPDATE.
fn constraint_violation(err: &sqlx::Error, input: &PersonInput) -> Option<FieldViolation> {
    let sqlx::Error::Database(db_err) = err else {
        return None;
    };
    let constraint = db_err.constraint().unwrap_or_default();
    let code = db_err.code();
    PERSON_FIELDS.iter().find_map(|spec| {
        let value = input.field(spec.path).unwrap_or_default();
        if code.as_deref() == Some(UNIQUE_VIOLATION)
            && constraint == unique_constraint_name(spec.path)
        {
            Some(FieldViolation::unique(spec.path, value))
        } else if code.as_deref() == Some(CHECK_VIOLATION)
            && constraint == min_length_constraint_name(spec.path)
        {
            Some(FieldViolation::min_length(spec, value))
        } else {
            None
        }
    })
}

/// Maps a failed write back to field violations where a table constraint fired.
///
/// The pre-write checks catch most conflicts; this covers writes that raced
/// past them.
fn write_error(err: sqlx::Error, input: &PersonInput) -> StorageError {
    let Some(violation) = constraint_violation(&err, input) else {
        return err.into();
    };
    let err = StorageError::Validation(vec![violation]);
    if err.is_duplicate() {
        tracing::debug!(name = %input.name, "write raced past the uniqueness pre-check");
    }
    err
}

impl PgStorage {
    /// Optimistic uniqueness check: unique fields already held by another row.
    async fn taken_fields(
        &self,
        input: &PersonInput,
        exclude: Option<Uuid>,
    ) -> Result<Vec<&'static str>, StorageError> {
        let mut taken = Vec::new();
        for spec in PERSON_FIELDS.iter().filter(|spec| spec.unique) {
            let existing: Option<Uuid> =
                sqlx::query_scalar(&format!("SELECT id FROM persons WHERE {} = $1", spec.path))
                    .bind(input.field(spec.path).unwrap_or_default())
                    .fetch_optional(&self.pool)
                    .await?;
            if existing.is_some_and(|id| Some(id) != exclude) {
                taken.push(spec.path);
            }
        }
        Ok(taken)
    }

    /// Inserts without pre-checks; the table constraints have the final say.
    pub(crate) async fn insert_record(&self, input: &PersonInput) -> Result<Person, StorageError> {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let row = sqlx::query(&format!(
            "INSERT INTO persons ({PERSON_COLUMNS})
             VALUES ($1, $2, $3, $4, $4)
             RETURNING {PERSON_COLUMNS}"
        ))
        .bind(id)
        .bind(&input.name)
        .bind(&input.number)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, input))?;
        tracing::debug!(%id, "person inserted");
        Ok(row_to_record(&row)?.into())
    }
}

#[async_trait]
impl PersonStore for PgStorage {
    async fn list_persons(&self) -> Result<Vec<Person>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {PERSON_COLUMNS} FROM persons ORDER BY created_at, id"
        ))
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(|row| row_to_record(row).map(Person::from)).collect()
    }

    async fn get_person(&self, id: &str) -> Result<Option<Person>, StorageError> {
        let id = parse_id(id)?;
        let row = sqlx::query(&format!("SELECT {PERSON_COLUMNS} FROM persons WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(|r| row_to_record(r).map(Person::from)).transpose()
    }

    async fn insert_person(&self, input: &PersonInput) -> Result<Person, StorageError> {
        check_input(input, &self.taken_fields(input, None).await?)?;
        self.insert_record(input).await
    }

    async fn update_person(
        &self,
        id: &str,
        input: &PersonInput,
    ) -> Result<Option<Person>, StorageError> {
        let id = parse_id(id)?;
        let exists: Option<Uuid> = sqlx::query_scalar("SELECT id FROM persons WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        if exists.is_none() {
            return Ok(None);
        }
        check_input(input, &self.taken_fields(input, Some(id)).await?)?;
        let row = sqlx::query(&format!(
            "UPDATE persons SET name = $2, number = $3, updated_at = $4
             WHERE id = $1
             RETURNING {PERSON_COLUMNS}"
        ))
        .bind(id)
        .bind(&input.name)
        .bind(&input.number)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| write_error(e, input))?;
        row.as_ref().map(|r| row_to_record(r).map(Person::from)).transpose()
    }

    async fn delete_person(&self, id: &str) -> Result<bool, StorageError> {
        let id = parse_id(id)?;
        let result =
            sqlx::query("DELETE FROM persons WHERE id = $1").bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    async fn count_persons(&self) -> Result<u64, StorageError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM persons").fetch_one(&self.pool).await?;
        Ok(u64::try_from(count).unwrap_or(0))
    }
}
