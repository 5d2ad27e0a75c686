//! PostgreSQL Repository Implementation
//!
//! Rows are mapped into the typed `Account` entity here and nowhere else.
//! The `id` column (the sequential row key) is never in a SELECT list and
//! has no representation outside this table.

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{account_role::AccountRole, email::Email, public_id::PublicId};
use crate::error::{AccountError, AccountResult};

/// PostgreSQL-backed account repository
#[derive(Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl AccountRepository for PgAccountRepository {
    async fn insert(&self, account: &Account) -> AccountResult<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO accounts (
                public_id,
                email,
                credential_hash,
                display_name,
                contact_number,
                region,
                role,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(account.public_id.as_uuid())
        .bind(account.email.as_str())
        .bind(account.credential_hash.as_phc_string())
        .bind(&account.display_name)
        .bind(&account.contact_number)
        .bind(&account.region)
        .bind(account.role.code())
        .bind(account.created_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            // The unique index on email is the single authority on
            // duplicates; the insert that loses the race is a full no-op.
            Err(sqlx::Error::Database(db_err))
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some("accounts_email_key") =>
            {
                Err(AccountError::DuplicateEmail)
            }
            Err(e) => Err(AccountError::Database(e)),
        }
    }

    async fn find_by_email(&self, email: &Email) -> AccountResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT
                public_id,
                email,
                credential_hash,
                display_name,
                contact_number,
                region,
                role,
                created_at
            FROM accounts
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_account()).transpose()
    }

    async fn find_by_public_id(&self, public_id: &PublicId) -> AccountResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT
                public_id,
                email,
                credential_hash,
                display_name,
                contact_number,
                region,
                role,
                created_at
            FROM accounts
            WHERE public_id = $1
            "#,
        )
        .bind(public_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_account()).transpose()
    }
}

// ============================================================================
// Row Mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct AccountRow {
    public_id: Uuid,
    email: String,
    credential_hash: String,
    display_name: String,
    contact_number: String,
    region: String,
    role: String,
    created_at: DateTime<Utc>,
}

impl AccountRow {
    fn into_account(self) -> AccountResult<Account> {
        // The CHECK constraint makes any other value unreachable; if one
        // shows up anyway the row is corrupt and the request fails generic.
        let role = AccountRole::parse(&self.role)
            .ok_or_else(|| AccountError::Internal(format!("Unknown role in storage: {}", self.role)))?;

        Ok(Account {
            public_id: PublicId::from_uuid(self.public_id),
            email: Email::from_db(self.email),
            credential_hash: HashedPassword::from_stored(self.credential_hash),
            display_name: self.display_name,
            contact_number: self.contact_number,
            region: self.region,
            role,
            created_at: self.created_at,
        })
    }
}
