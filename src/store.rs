//! SQLite-backed character store: table DDL and the four CRUD operations.
//!
//! Every operation acquires a pooled connection scoped to the call; the
//! connection is returned to the pool on all exit paths.

use crate::error::AppError;
use crate::model::{Character, CharacterSummary};
use sqlx::SqlitePool;

const FULL_COLUMNS: &str =
    "id, name, height, mass, hair_color, skin_color, eye_color, birth_year";

#[derive(Clone)]
pub struct CharacterStore {
    pool: SqlitePool,
}

impl CharacterStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the characters table if absent. Called once at process start.
    ///
    /// `id` is typed BIGINT rather than INTEGER: an INTEGER PRIMARY KEY
    /// would alias SQLite's rowid, and rowid must keep tracking insertion
    /// order for the list endpoint.
    pub async fn ensure_table(&self) -> Result<(), AppError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS characters (
                id BIGINT PRIMARY KEY,
                name TEXT NOT NULL,
                height BIGINT NOT NULL,
                mass BIGINT NOT NULL,
                hair_color TEXT NOT NULL,
                skin_color TEXT NOT NULL,
                eye_color TEXT NOT NULL,
                birth_year BIGINT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Connectivity probe backing the readiness route.
    pub async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Summaries for every record, in insertion order. An empty store
    /// yields an empty vec.
    pub async fn list_summary(&self) -> Result<Vec<CharacterSummary>, AppError> {
        let mut conn = self.pool.acquire().await?;
        let rows = sqlx::query_as::<_, CharacterSummary>(
            "SELECT id, name, height, mass, birth_year, eye_color FROM characters ORDER BY rowid",
        )
        .fetch_all(&mut *conn)
        .await?;
        Ok(rows)
    }

    /// Fetch one record by primary key.
    pub async fn get(&self, id: i64) -> Result<Character, AppError> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query_as::<_, Character>(&format!(
            "SELECT {FULL_COLUMNS} FROM characters WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?
        .ok_or(AppError::NotFound)
    }

    /// Persist a validated record. An already-used id is a conflict.
    pub async fn create(&self, character: Character) -> Result<Character, AppError> {
        let mut conn = self.pool.acquire().await?;
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM characters WHERE id = ?)")
                .bind(character.id)
                .fetch_one(&mut *conn)
                .await?;
        if exists {
            return Err(AppError::Conflict);
        }

        let inserted = sqlx::query(&format!(
            "INSERT INTO characters ({FULL_COLUMNS}) VALUES (?, ?, ?, ?, ?, ?, ?, ?)"
        ))
        .bind(character.id)
        .bind(&character.name)
        .bind(character.height)
        .bind(character.mass)
        .bind(&character.hair_color)
        .bind(&character.skin_color)
        .bind(&character.eye_color)
        .bind(character.birth_year)
        .execute(&mut *conn)
        .await;
        match inserted {
            Ok(_) => {}
            // A concurrent create with the same id can slip past the
            // existence check; the UNIQUE constraint is the arbiter.
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                return Err(AppError::Conflict)
            }
            Err(e) => return Err(e.into()),
        }

        let stored = sqlx::query_as::<_, Character>(&format!(
            "SELECT {FULL_COLUMNS} FROM characters WHERE id = ?"
        ))
        .bind(character.id)
        .fetch_one(&mut *conn)
        .await?;
        Ok(stored)
    }

    /// Remove one record by primary key.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query("DELETE FROM characters WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
