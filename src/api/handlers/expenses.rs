use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use crate::{
    action_router::{ActionRouterInput, ActionRouterOutput},
    api::{error::ApiError, extractors::JsonBody, validation::parse_record_id},
    auth::Principal,
    expenses::{
        db_types::ExpenseRecord,
        processor_enums::{ExpensesProcessorInput, ExpensesProcessorOutput, UpdateExpenseInputArgs},
        validation::{ExpensePayload, UpdateMode},
    },
    utils::app_config::AppConfig,
};

async fn run(
    app_config: AppConfig,
    principal: Principal,
    input: ExpensesProcessorInput,
) -> Result<ExpensesProcessorOutput, ApiError> {
    match ActionRouterInput::Expenses(principal, input).process(app_config).await? {
        ActionRouterOutput::Expenses(output) => Ok(output),
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

/// POST /api/expenses/ - Create an expense owned by the caller
pub async fn create_expense(
    State(app_config): State<AppConfig>,
    Extension(principal): Extension<Principal>,
    JsonBody(payload): JsonBody<ExpensePayload>,
) -> Result<(StatusCode, Json<ExpenseRecord>), ApiError> {
    match run(app_config, principal, ExpensesProcessorInput::CreateExpense(payload)).await? {
        ExpensesProcessorOutput::CreateExpense(expense) => {
            Ok((StatusCode::CREATED, Json(expense)))
        }
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

/// GET /api/expenses/ - List the caller's expenses
pub async fn get_expenses(
    State(app_config): State<AppConfig>,
    Extension(principal): Extension<Principal>,
) -> Result<(StatusCode, Json<Vec<ExpenseRecord>>), ApiError> {
    match run(app_config, principal, ExpensesProcessorInput::GetExpenses).await? {
        ExpensesProcessorOutput::GetExpenses(expenses) => {
            Ok((StatusCode::OK, Json(expenses)))
        }
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

/// GET /api/expenses/{id}/ - Get one of the caller's expenses
pub async fn get_expense_by_id(
    State(app_config): State<AppConfig>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<ExpenseRecord>), ApiError> {
    let expense_id = parse_record_id(&id, "Expense")?;

    match run(app_config, principal, ExpensesProcessorInput::GetExpense(expense_id)).await? {
        ExpensesProcessorOutput::GetExpense(expense) => {
            Ok((StatusCode::OK, Json(expense)))
        }
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

/// PUT /api/expenses/{id}/ - Replace every field of an expense
pub async fn replace_expense(
    State(app_config): State<AppConfig>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<ExpensePayload>,
) -> Result<(StatusCode, Json<ExpenseRecord>), ApiError> {
    update(app_config, principal, &id, payload, UpdateMode::Full).await
}

/// PATCH /api/expenses/{id}/ - Update the supplied fields of an expense
pub async fn patch_expense(
    State(app_config): State<AppConfig>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<ExpensePayload>,
) -> Result<(StatusCode, Json<ExpenseRecord>), ApiError> {
    update(app_config, principal, &id, payload, UpdateMode::Partial).await
}

async fn update(
    app_config: AppConfig,
    principal: Principal,
    id: &str,
    changes: ExpensePayload,
    mode: UpdateMode,
) -> Result<(StatusCode, Json<ExpenseRecord>), ApiError> {
    let expense_id = parse_record_id(id, "Expense")?;

    let input = ExpensesProcessorInput::UpdateExpense(UpdateExpenseInputArgs {
        expense_id,
        changes,
        mode,
    });

    match run(app_config, principal, input).await? {
        ExpensesProcessorOutput::UpdateExpense(expense) => {
            Ok((StatusCode::OK, Json(expense)))
        }
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

/// DELETE /api/expenses/{id}/ - Permanently delete an expense
pub async fn delete_expense(
    State(app_config): State<AppConfig>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let expense_id = parse_record_id(&id, "Expense")?;

    match run(app_config, principal, ExpensesProcessorInput::DeleteExpense(expense_id)).await? {
        ExpensesProcessorOutput::DeleteExpense => Ok(StatusCode::NO_CONTENT),
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}
