use anyhow::anyhow;
use diesel::PgConnection;

use crate::expenses::config::ExpensesProcessorConfig;
use crate::expenses::operations::{create_expense, delete_expense, get_expense, list_expenses, update_expense};
use crate::expenses::processor_enums::{ExpensesProcessorInput, ExpensesProcessorOutput};
use crate::utils::app_config::AppConfig;
use crate::utils::db::DbConn;
use crate::utils::traits::ActionProcessor;

impl ActionProcessor<ExpensesProcessorConfig, ExpensesProcessorOutput> for ExpensesProcessorInput {
    async fn process(&self, _app_config: &mut AppConfig, local_config: &mut ExpensesProcessorConfig, conn: Option<DbConn<'_>>) -> anyhow::Result<ExpensesProcessorOutput> {
        let app_conn = conn.ok_or_else(||anyhow!("Db Connection not found"))?;
        let repo: &mut PgConnection = &mut **app_conn;
        let principal = &local_config.principal;

        match self {
            ExpensesProcessorInput::CreateExpense(payload) => {
                let record = create_expense(repo, principal, payload)?;
                Ok(ExpensesProcessorOutput::CreateExpense(record))
            }
            ExpensesProcessorInput::GetExpenses => {
                let records = list_expenses(repo, principal)?;
                Ok(ExpensesProcessorOutput::GetExpenses(records))
            }
            ExpensesProcessorInput::GetExpense(expense_id) => {
                let record = get_expense(repo, principal, *expense_id)?;
                Ok(ExpensesProcessorOutput::GetExpense(record))
            }
            ExpensesProcessorInput::UpdateExpense(args) => {
                let record = update_expense(repo, principal, args.expense_id, &args.changes, args.mode)?;
                Ok(ExpensesProcessorOutput::UpdateExpense(record))
            }
            ExpensesProcessorInput::DeleteExpense(expense_id) => {
                delete_expense(repo, principal, *expense_id)?;
                Ok(ExpensesProcessorOutput::DeleteExpense)
            }
        }
    }
}
