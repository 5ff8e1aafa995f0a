//! Shared test helpers: in-memory repositories, an app config whose pool
//! never connects unless a handler actually asks for a connection, and a
//! Postgres-backed config for tests that opt in through `TEST_DATABASE_URL`.

use std::sync::Once;

use chrono::Duration;
use diesel::PgConnection;
use diesel::QueryResult;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::r2d2::{ConnectionManager, Pool};
use serde_json::{Value, json};

use crate::auth::tokens::TokenService;
use crate::expenses::db_types::{CreateExpense, ExpenseRecord, UpdateExpense};
use crate::expenses::storage::ExpenseRepository;
use crate::expenses::validation::ExpensePayload;
use crate::users::db_types::{CreateUser, UserRecord};
use crate::users::storage::UserRepository;
use crate::utils::app_config::AppConfig;
use crate::utils::db::{build_pool, get_conn, run_migrations};

static MIGRATE_TEST_DATABASE: Once = Once::new();

/// Keeps rows in insertion order and never reuses ids.
#[derive(Debug, Default)]
pub struct MemoryExpenseRepository {
    rows: Vec<ExpenseRecord>,
    last_id: i64,
    owners: Option<Vec<i64>>,
}

impl MemoryExpenseRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts for any other owner fail like the `user_id` foreign key does.
    pub fn with_owners(owners: &[i64]) -> Self {
        Self {
            owners: Some(owners.to_vec()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl ExpenseRepository for MemoryExpenseRepository {
    fn insert_expense(&mut self, expense: &CreateExpense) -> QueryResult<ExpenseRecord> {
        if let Some(owners) = &self.owners {
            if !owners.contains(&expense.user_id) {
                return Err(DieselError::DatabaseError(
                    DatabaseErrorKind::ForeignKeyViolation,
                    Box::new("insert or update on table \"expenses\" violates foreign key constraint".to_string()),
                ));
            }
        }

        self.last_id += 1;
        let record = ExpenseRecord {
            id: self.last_id,
            date: expense.date,
            category: expense.category,
            description: expense.description.clone(),
            amount: expense.amount.clone(),
            user_id: expense.user_id,
        };
        self.rows.push(record.clone());
        Ok(record)
    }

    fn expenses_for_owner(&mut self, owner: i64) -> QueryResult<Vec<ExpenseRecord>> {
        Ok(self.rows.iter().filter(|row| row.user_id == owner).cloned().collect())
    }

    fn expense_for_owner(&mut self, owner: i64, expense_id: i64) -> QueryResult<Option<ExpenseRecord>> {
        Ok(self
            .rows
            .iter()
            .find(|row| row.id == expense_id && row.user_id == owner)
            .cloned())
    }

    fn update_expense_for_owner(
        &mut self,
        owner: i64,
        expense_id: i64,
        changes: &UpdateExpense,
    ) -> QueryResult<Option<ExpenseRecord>> {
        let Some(row) = self
            .rows
            .iter_mut()
            .find(|row| row.id == expense_id && row.user_id == owner)
        else {
            return Ok(None);
        };

        changes.apply_to(row);
        Ok(Some(row.clone()))
    }

    fn delete_expense_for_owner(&mut self, owner: i64, expense_id: i64) -> QueryResult<bool> {
        let before = self.rows.len();
        self.rows.retain(|row| !(row.id == expense_id && row.user_id == owner));
        Ok(self.rows.len() < before)
    }
}

#[derive(Debug, Default)]
pub struct MemoryUserRepository {
    rows: Vec<UserRecord>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for MemoryUserRepository {
    fn insert_user(&mut self, user: &CreateUser) -> QueryResult<UserRecord> {
        let record = UserRecord {
            id: self.rows.len() as i64 + 1,
            username: user.username.clone(),
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
            date_joined: chrono::Utc::now().naive_utc(),
        };
        self.rows.push(record.clone());
        Ok(record)
    }

    fn user_by_username(&mut self, name: &str) -> QueryResult<Option<UserRecord>> {
        Ok(self.rows.iter().find(|row| row.username == name).cloned())
    }

    fn user_by_id(&mut self, user_id: i64) -> QueryResult<Option<UserRecord>> {
        Ok(self.rows.iter().find(|row| row.id == user_id).cloned())
    }
}

pub fn expense_payload(date: &str, category: &str, description: &str, amount: Value) -> ExpensePayload {
    ExpensePayload {
        date: Some(json!(date)),
        category: Some(json!(category)),
        description: Some(json!(description)),
        amount: Some(amount),
    }
}

fn test_tokens() -> TokenService {
    TokenService::new(
        b"test-secret",
        Duration::seconds(300),
        Duration::seconds(3600),
    )
}

/// Any handler that reaches for a connection will fail, so only use this
/// for requests that are settled before the database.
pub fn lazy_app_config() -> AppConfig {
    let manager = ConnectionManager::<PgConnection>::new("postgres://localhost/expense_tracker_unused");
    let pool = Pool::builder()
        .min_idle(Some(0))
        .build_unchecked(manager);

    AppConfig::new(pool, test_tokens())
}

/// A migrated database from `TEST_DATABASE_URL`, or `None` when it is unset so
/// database tests can return early.
pub fn database_app_config() -> Option<AppConfig> {
    let Ok(url) = std::env::var("TEST_DATABASE_URL") else {
        eprintln!("TEST_DATABASE_URL not set, skipping database test");
        return None;
    };

    let pool = build_pool(&url, 4).expect("TEST_DATABASE_URL should be reachable");
    MIGRATE_TEST_DATABASE.call_once(|| {
        let mut conn = get_conn(pool.clone()).expect("test database connection");
        run_migrations(&mut conn).expect("test database migrations");
    });

    Some(AppConfig::new(pool, test_tokens()))
}

/// Usernames stay unique across runs against a shared database.
pub fn unique_username(prefix: &str) -> String {
    format!("{}_{}", prefix, uuid::Uuid::new_v4().simple())
}
