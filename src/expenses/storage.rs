use diesel::prelude::*;
use diesel::{PgConnection, QueryResult};

use crate::expenses::db_types::{CreateExpense, ExpenseRecord, UpdateExpense};
use crate::schema::expenses as ExpensesTable;

/// Persistence for expense rows. Every read and write past `insert_expense` is
/// filtered by owner.
pub trait ExpenseRepository {
    fn insert_expense(&mut self, expense: &CreateExpense) -> QueryResult<ExpenseRecord>;

    /// Ascending by id.
    fn expenses_for_owner(&mut self, owner: i64) -> QueryResult<Vec<ExpenseRecord>>;

    fn expense_for_owner(&mut self, owner: i64, expense_id: i64) -> QueryResult<Option<ExpenseRecord>>;

    fn update_expense_for_owner(
        &mut self,
        owner: i64,
        expense_id: i64,
        changes: &UpdateExpense,
    ) -> QueryResult<Option<ExpenseRecord>>;

    /// Returns whether a row was removed.
    fn delete_expense_for_owner(&mut self, owner: i64, expense_id: i64) -> QueryResult<bool>;
}

impl ExpenseRepository for PgConnection {
    fn insert_expense(&mut self, expense: &CreateExpense) -> QueryResult<ExpenseRecord> {
        diesel::insert_into(ExpensesTable::table)
            .values(expense)
            .returning(ExpenseRecord::as_returning())
            .get_result(self)
    }

    fn expenses_for_owner(&mut self, owner: i64) -> QueryResult<Vec<ExpenseRecord>> {
        use crate::schema::expenses::dsl::*;

        expenses
            .filter(user_id.eq(owner))
            .order(id.asc())
            .select(ExpenseRecord::as_select())
            .get_results(self)
    }

    fn expense_for_owner(&mut self, owner: i64, expense_id: i64) -> QueryResult<Option<ExpenseRecord>> {
        use crate::schema::expenses::dsl::*;

        expenses
            .filter(id.eq(expense_id))
            .filter(user_id.eq(owner))
            .select(ExpenseRecord::as_select())
            .first(self)
            .optional()
    }

    fn update_expense_for_owner(
        &mut self,
        owner: i64,
        expense_id: i64,
        changes: &UpdateExpense,
    ) -> QueryResult<Option<ExpenseRecord>> {
        use crate::schema::expenses::dsl::*;

        diesel::update(expenses.filter(id.eq(expense_id)).filter(user_id.eq(owner)))
            .set(changes)
            .returning(ExpenseRecord::as_returning())
            .get_result(self)
            .optional()
    }

    fn delete_expense_for_owner(&mut self, owner: i64, expense_id: i64) -> QueryResult<bool> {
        use crate::schema::expenses::dsl::*;

        let removed = diesel::delete(expenses.filter(id.eq(expense_id)).filter(user_id.eq(owner)))
            .execute(self)?;

        Ok(removed > 0)
    }
}
