use async_trait::async_trait;
use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::auth::dto::PublicUser;
use crate::auth::repo_types::User;

/// Persistence contract for user records.
///
/// Both reset-code mutations are single compare-and-set updates: the
/// database serializes writers on the row, so when two requests race to
/// consume the same code only the first one observes a match.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>>;

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>>;

    async fn create(&self, email: &str, name: &str, password_hash: &str)
        -> anyhow::Result<User>;

    async fn list_public(&self) -> anyhow::Result<Vec<PublicUser>>;

    /// Overwrites any pending code. Returns false when no user has this email.
    async fn set_reset_code(
        &self,
        email: &str,
        code: &str,
        expires_at: OffsetDateTime,
    ) -> anyhow::Result<bool>;

    /// Consumes a pending code: commits the new password hash and clears both
    /// reset fields in one update. Returns false when nothing matched —
    /// unknown email, no pending code, wrong code, or expired code.
    async fn consume_reset_code(
        &self,
        email: &str,
        code: &str,
        new_password_hash: &str,
        now: OffsetDateTime,
    ) -> anyhow::Result<bool>;
}

pub struct PgUserStore {
    db: PgPool,
}

impl PgUserStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, name, password_hash, reset_code, reset_code_expires_at, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, name, password_hash, reset_code, reset_code_expires_at, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }

    async fn create(
        &self,
        email: &str,
        name: &str,
        password_hash: &str,
    ) -> anyhow::Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, name, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, email, name, password_hash, reset_code, reset_code_expires_at, created_at
            "#,
        )
        .bind(email)
        .bind(name)
        .bind(password_hash)
        .fetch_one(&self.db)
        .await?;
        Ok(user)
    }

    async fn list_public(&self) -> anyhow::Result<Vec<PublicUser>> {
        let users = sqlx::query_as::<_, PublicUser>(
            r#"
            SELECT id, email, name
            FROM users
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.db)
        .await?;
        Ok(users)
    }

    async fn set_reset_code(
        &self,
        email: &str,
        code: &str,
        expires_at: OffsetDateTime,
    ) -> anyhow::Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET reset_code = $2, reset_code_expires_at = $3
            WHERE email = $1
            "#,
        )
        .bind(email)
        .bind(code)
        .bind(expires_at)
        .execute(&self.db)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn consume_reset_code(
        &self,
        email: &str,
        code: &str,
        new_password_hash: &str,
        now: OffsetDateTime,
    ) -> anyhow::Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET password_hash = $3, reset_code = NULL, reset_code_expires_at = NULL
            WHERE email = $1
              AND reset_code = $2
              AND reset_code_expires_at > $4
            "#,
        )
        .bind(email)
        .bind(code)
        .bind(new_password_hash)
        .bind(now)
        .execute(&self.db)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
