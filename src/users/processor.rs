use anyhow::anyhow;
use diesel::PgConnection;

use crate::errors::StoreError;
use crate::users::config::UsersProcessorConfig;
use crate::users::operations::{authenticate, get_user, register_user};
use crate::users::processor_enums::{UsersProcessorInput, UsersProcessorOutput};
use crate::utils::app_config::AppConfig;
use crate::utils::db::DbConn;
use crate::utils::traits::ActionProcessor;
use crate::utils::validation::{FieldErrors, REQUIRED};

impl ActionProcessor<UsersProcessorConfig, UsersProcessorOutput> for UsersProcessorInput {
    async fn process(&self, app_config: &mut AppConfig, _local_config: &mut UsersProcessorConfig, conn: Option<DbConn<'_>>) -> anyhow::Result<UsersProcessorOutput> {
        let app_conn = conn.ok_or_else(||anyhow!("Db Connection not found"))?;
        let repo: &mut PgConnection = &mut **app_conn;

        match self {
            UsersProcessorInput::Register(args) => {
                let user = register_user(repo, args)?;
                Ok(UsersProcessorOutput::Register(user))
            }
            UsersProcessorInput::ObtainTokenPair(args) => {
                let (Some(username), Some(password)) = (&args.username, &args.password) else {
                    let mut errors = FieldErrors::new();
                    if args.username.is_none() {
                        errors.add("username", REQUIRED);
                    }
                    if args.password.is_none() {
                        errors.add("password", REQUIRED);
                    }
                    return Err(StoreError::Validation(errors).into());
                };

                let user = authenticate(repo, username, password)?;
                let pair = app_config.tokens.issue_pair(user.id)?;
                tracing::info!(user_id = user.id, "Issued token pair");

                Ok(UsersProcessorOutput::ObtainTokenPair(pair))
            }
            UsersProcessorInput::GetUser(args) => {
                let user = get_user(repo, args)?;
                Ok(UsersProcessorOutput::GetUser(user))
            }
        }
    }
}
