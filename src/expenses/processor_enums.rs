use serde::{Deserialize, Serialize};

use crate::expenses::db_types::ExpenseRecord;
use crate::expenses::validation::{ExpensePayload, UpdateMode};

#[derive(Deserialize, Serialize, Debug)]
pub struct UpdateExpenseInputArgs {
    pub expense_id: i64,
    pub changes: ExpensePayload,
    pub mode: UpdateMode,
}

#[derive(Deserialize, Serialize, Debug)]
pub enum ExpensesProcessorInput {
    CreateExpense(ExpensePayload),
    GetExpenses,
    GetExpense(i64),
    UpdateExpense(UpdateExpenseInputArgs),
    DeleteExpense(i64),
}

#[derive(Deserialize, Serialize, Debug)]
pub enum ExpensesProcessorOutput {
    CreateExpense(ExpenseRecord),
    GetExpenses(Vec<ExpenseRecord>),
    GetExpense(ExpenseRecord),
    UpdateExpense(ExpenseRecord),
    DeleteExpense,
}
