use diesel::result::{DatabaseErrorKind, Error as DieselError};

use crate::auth::{AuthError, Principal};
use crate::errors::StoreError;
use crate::expenses::db_types::ExpenseRecord;
use crate::expenses::storage::ExpenseRepository;
use crate::expenses::validation::{ExpensePayload, UpdateMode, validate_changes, validate_new};

pub fn create_expense<R: ExpenseRepository + ?Sized>(
    repo: &mut R,
    principal: &Principal,
    payload: &ExpensePayload,
) -> Result<ExpenseRecord, StoreError> {
    let expense = validate_new(payload, principal.user_id)?;
    // A token can outlive its user; the owner foreign key is the last word.
    let record = repo.insert_expense(&expense).map_err(|e| match e {
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
            tracing::warn!(user_id = principal.user_id, "Rejected expense for a deleted user");
            StoreError::Auth(AuthError::InvalidToken)
        }
        other => StoreError::Database(other),
    })?;

    tracing::info!(expense_id = record.id, user_id = principal.user_id, "Created expense");
    Ok(record)
}

pub fn list_expenses<R: ExpenseRepository + ?Sized>(
    repo: &mut R,
    principal: &Principal,
) -> Result<Vec<ExpenseRecord>, StoreError> {
    Ok(repo.expenses_for_owner(principal.user_id)?)
}

pub fn get_expense<R: ExpenseRepository + ?Sized>(
    repo: &mut R,
    principal: &Principal,
    expense_id: i64,
) -> Result<ExpenseRecord, StoreError> {
    repo.expense_for_owner(principal.user_id, expense_id)?
        .ok_or(StoreError::NotFound("Expense"))
}

/// Ownership is checked before the payload is validated.
pub fn update_expense<R: ExpenseRepository + ?Sized>(
    repo: &mut R,
    principal: &Principal,
    expense_id: i64,
    payload: &ExpensePayload,
    mode: UpdateMode,
) -> Result<ExpenseRecord, StoreError> {
    let current = get_expense(repo, principal, expense_id)?;
    let changes = validate_changes(payload, mode)?;

    if changes.is_empty() {
        return Ok(current);
    }

    let record = repo
        .update_expense_for_owner(principal.user_id, expense_id, &changes)?
        .ok_or(StoreError::NotFound("Expense"))?;

    tracing::info!(expense_id, user_id = principal.user_id, "Updated expense");
    Ok(record)
}

pub fn delete_expense<R: ExpenseRepository + ?Sized>(
    repo: &mut R,
    principal: &Principal,
    expense_id: i64,
) -> Result<(), StoreError> {
    if !repo.delete_expense_for_owner(principal.user_id, expense_id)? {
        return Err(StoreError::NotFound("Expense"));
    }

    tracing::info!(expense_id, user_id = principal.user_id, "Deleted expense");
    Ok(())
}
