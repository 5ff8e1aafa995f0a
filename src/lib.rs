// Public library interface for expense-tracker-backend
pub mod action_router;
pub mod api;
pub mod auth;
pub mod cli_helper;
pub mod cli_utils;
pub mod errors;
pub mod expenses;
pub mod schema;
pub mod users;
pub mod utils;

#[cfg(test)]
pub mod test_utils;
