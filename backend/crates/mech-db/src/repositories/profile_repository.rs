//! Profile repository: the local SQLite rendition of the profile directory.
//!
//! Usernames are matched exactly. Emails are matched case-insensitively via the
//! column's `NOCASE` collation, which folds ASCII letters only.

use crate::{DbError, Result as DbErrorResult};

use mech_core::{ErrorLocation, NewProfile, Profile, ProfileDirectory, ServiceResult};

use std::panic::Location;

use async_trait::async_trait;
use chrono::DateTime;
use log::debug;
use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct ProfileRow {
    id: String,
    username: String,
    email: String,
    full_name: String,
    created_at: i64,
}

impl TryFrom<ProfileRow> for Profile {
    type Error = DbError;

    #[track_caller]
    fn try_from(row: ProfileRow) -> DbErrorResult<Self> {
        Ok(Profile {
            id: Uuid::parse_str(&row.id).map_err(|e| DbError::Initialization {
                message: format!("Invalid UUID in profiles.id: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            username: row.username,
            email: row.email,
            full_name: row.full_name,
            created_at: DateTime::from_timestamp(row.created_at, 0).ok_or_else(|| {
                DbError::Initialization {
                    message: "Invalid timestamp in profiles.created_at".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
        })
    }
}

pub struct ProfileRepository {
    pool: SqlitePool,
}

impl ProfileRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, profile: &Profile) -> DbErrorResult<()> {
        let id = profile.id.to_string();
        let created_at = profile.created_at.timestamp();

        sqlx::query(
            r#"
                INSERT INTO profiles (id, username, email, full_name, created_at)
                VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&profile.username)
        .bind(&profile.email)
        .bind(&profile.full_name)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Profile>> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
                SELECT id, username, email, full_name, created_at
                FROM profiles
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Profile::try_from).transpose()
    }

    pub async fn find_by_username(&self, username: &str) -> DbErrorResult<Option<Profile>> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
                SELECT id, username, email, full_name, created_at
                FROM profiles
                WHERE username = ?
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Profile::try_from).transpose()
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<Profile>> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
                SELECT id, username, email, full_name, created_at
                FROM profiles
                WHERE email = ? COLLATE NOCASE
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Profile::try_from).transpose()
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM profiles")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[async_trait]
impl ProfileDirectory for ProfileRepository {
    async fn find_by_username(&self, username: &str) -> ServiceResult<Option<Profile>> {
        Ok(ProfileRepository::find_by_username(self, username).await?)
    }

    async fn find_by_email(&self, email: &str) -> ServiceResult<Option<Profile>> {
        Ok(ProfileRepository::find_by_email(self, email).await?)
    }

    async fn insert(&self, profile: &NewProfile) -> ServiceResult<()> {
        let profile = profile.clone().into_profile();
        debug!("Inserting profile row for '{}'", profile.username);
        Ok(self.create(&profile).await?)
    }
}
