//! User repository
//!
//! Reads and inserts against the `users` table. The table itself is
//! provisioned outside this crate:
//!
//! ```sql
//! CREATE TABLE users (
//!     id SERIAL PRIMARY KEY,
//!     name VARCHAR(100) NOT NULL,
//!     email VARCHAR(100) NOT NULL
//! );
//! ```

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{NewUser, User};
use crate::store::{StoreError, UserStore};

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every user, ascending by id. Unpaginated.
    pub async fn list(&self) -> Result<Vec<User>, StoreError> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email
            FROM users
            ORDER BY id ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(users)
    }

    /// Get a single user by ID.
    ///
    /// `id` is SERIAL (int4); anything outside that range cannot match.
    pub async fn get(&self, id: i64) -> Result<User, StoreError> {
        let not_found = || StoreError::NotFound {
            resource: "user",
            id: id.to_string(),
        };

        let Ok(key) = i32::try_from(id) else {
            return Err(not_found());
        };

        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(key)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(not_found)
    }

    /// Insert a user and return the stored row.
    pub async fn create(&self, user: &NewUser) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email)
            VALUES ($1, $2)
            RETURNING id, name, email
            "#,
        )
        .bind(user.name())
        .bind(user.email())
        .fetch_one(self.pool)
        .await?;

        Ok(user)
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(self.pool).await?;
        Ok(())
    }
}

/// `UserStore` over an owned pool handle
#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn repo(&self) -> UserRepo<'_> {
        UserRepo::new(&self.pool)
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        self.repo().list().await
    }

    async fn get(&self, id: i64) -> Result<User, StoreError> {
        self.repo().get(id).await
    }

    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        self.repo().create(&user).await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.repo().ping().await
    }
}
