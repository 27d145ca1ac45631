//! MySQL implementation of the UserRepository trait.
//!
//! Expects the following schema, with the unique index on `phone` carrying
//! the find-or-create race (the losing insert surfaces as a duplicate and
//! the caller falls back to fetching the winner's row):
//!
//! ```sql
//! CREATE TABLE users (
//!     id         CHAR(36)     NOT NULL PRIMARY KEY,
//!     phone      VARCHAR(20)  NOT NULL,
//!     nickname   VARCHAR(64)  NOT NULL,
//!     password   VARCHAR(128) NULL,
//!     icon       VARCHAR(255) NULL,
//!     created_at TIMESTAMP(6) NOT NULL,
//!     updated_at TIMESTAMP(6) NOT NULL,
//!     UNIQUE KEY uk_users_phone (phone)
//! );
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use qp_core::domain::entities::user::User;
use qp_core::errors::DomainError;
use qp_core::repositories::UserRepository;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::Repository {
                message: format!("Failed to get id: {}", e),
            })?;

        Ok(User {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Repository {
                message: format!("Invalid UUID: {}", e),
            })?,
            phone: row.try_get("phone").map_err(|e| DomainError::Repository {
                message: format!("Failed to get phone: {}", e),
            })?,
            nickname: row
                .try_get("nickname")
                .map_err(|e| DomainError::Repository {
                    message: format!("Failed to get nickname: {}", e),
                })?,
            password: row
                .try_get("password")
                .map_err(|e| DomainError::Repository {
                    message: format!("Failed to get password: {}", e),
                })?,
            icon: row.try_get("icon").map_err(|e| DomainError::Repository {
                message: format!("Failed to get icon: {}", e),
            })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Repository {
                    message: format!("Failed to get created_at: {}", e),
                })?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::Repository {
                    message: format!("Failed to get updated_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, phone, nickname, password, icon, created_at, updated_at
            FROM users
            WHERE phone = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(phone)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Repository {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, phone, nickname, password, icon, created_at, updated_at
            FROM users
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Repository {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (id, phone, nickname, password, icon, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.phone)
            .bind(&user.nickname)
            .bind(&user.password)
            .bind(&user.icon)
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                // The unique index on phone decides the find-or-create race
                if e.as_database_error()
                    .map_or(false, |db| db.is_unique_violation())
                {
                    DomainError::Duplicate {
                        resource: "user.phone".to_string(),
                    }
                } else {
                    DomainError::Repository {
                        message: format!("Failed to create user: {}", e),
                    }
                }
            })?;

        Ok(user)
    }
}
