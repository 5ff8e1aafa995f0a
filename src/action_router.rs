use anyhow::Result;

use crate::auth::Principal;
use crate::expenses::config::ExpensesProcessorConfig;
use crate::expenses::processor_enums::{ExpensesProcessorInput, ExpensesProcessorOutput};
use crate::users::config::UsersProcessorConfig;
use crate::users::processor_enums::{UsersProcessorInput, UsersProcessorOutput};
use crate::utils::app_config::AppConfig;
use crate::utils::db::get_conn;
use crate::utils::traits::ActionProcessor;

pub enum ActionRouterInput {
    /// Expense actions always run on behalf of a principal.
    Expenses(Principal, ExpensesProcessorInput),
    Users(UsersProcessorInput),
}

#[derive(Debug)]
pub enum ActionRouterOutput {
    Expenses(ExpensesProcessorOutput),
    Users(UsersProcessorOutput),
}

impl ActionRouterInput {

    pub async fn process(&self, app_config: AppConfig)-> Result<ActionRouterOutput> {
        match self {
            ActionRouterInput::Expenses(principal, processor) => {
                let mut conn = get_conn(app_config.pool.clone())?;

                let mut config = ExpensesProcessorConfig {
                    principal: *principal,
                };

                let res = processor.process(&mut app_config.clone(), &mut config, Some(&mut conn)).await?;

                Ok(ActionRouterOutput::Expenses(res))
            }
            ActionRouterInput::Users(processor) => {
                let mut conn = get_conn(app_config.pool.clone())?;

                let mut config = UsersProcessorConfig::default();

                let res = processor.process(&mut app_config.clone(), &mut config, Some(&mut conn)).await?;

                Ok(ActionRouterOutput::Users(res))
            }
        }
    }
}
