use crate::auth::Principal;

#[derive(Clone, Debug)]
pub struct ExpensesProcessorConfig {
    pub principal: Principal,
}
