/*
 * Responsibility
 * - Match a submitted (first name, last name, employee id) triple against the employees table
 * - "No match" is a value, not an error; only infrastructure failures are errors
 */
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use crate::repos::error::{RepoError, RepoResult};

/// The employee a token is issued for.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Identity {
    pub employee_id: i32,
    pub first_name: String,
    pub last_name: String,
}

#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// `secret` is the employee id. Wrong name and wrong secret are indistinguishable.
    async fn find_by_credentials(
        &self,
        first_name: &str,
        last_name: &str,
        secret: i32,
    ) -> RepoResult<Option<Identity>>;
}

#[derive(Clone, Debug)]
pub struct PgCredentialStore {
    pool: PgPool,
}

impl PgCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    async fn find_by_credentials(
        &self,
        first_name: &str,
        last_name: &str,
        secret: i32,
    ) -> RepoResult<Option<Identity>> {
        let row = sqlx::query_as::<_, Identity>(
            r#"
            SELECT employee_id, first_name, last_name
            FROM employees
            WHERE first_name = $1 AND last_name = $2 AND employee_id = $3
            "#,
        )
        .bind(first_name)
        .bind(last_name)
        .bind(secret)
        .fetch_optional(&self.pool)
        .await
        .map_err(RepoError::Db)?;

        Ok(row)
    }
}

#[cfg(test)]
pub mod memory {
    use super::*;

    /// Fixed set of employees for tests that must not touch a database.
    #[derive(Debug, Default)]
    pub struct InMemoryCredentialStore {
        employees: Vec<Identity>,
    }

    impl InMemoryCredentialStore {
        pub fn with(employees: Vec<Identity>) -> Self {
            Self { employees }
        }
    }

    #[async_trait]
    impl CredentialStore for InMemoryCredentialStore {
        async fn find_by_credentials(
            &self,
            first_name: &str,
            last_name: &str,
            secret: i32,
        ) -> RepoResult<Option<Identity>> {
            Ok(self
                .employees
                .iter()
                .find(|e| {
                    e.first_name == first_name && e.last_name == last_name && e.employee_id == secret
                })
                .cloned())
        }
    }
}
