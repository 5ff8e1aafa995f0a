use serde::{Deserialize, Serialize};

use crate::auth::tokens::TokenPair;
use crate::users::db_types::UserRecord;

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct RegisterUserInputArgs {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub password2: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct ObtainTokenPairInputArgs {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct RefreshTokenInputArgs {
    pub refresh: Option<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub enum GetUserInputArgs {
    ById(i64),
    ByUsername(String),
}

#[derive(Deserialize, Serialize, Debug)]
pub enum UsersProcessorInput {
    Register(RegisterUserInputArgs),
    ObtainTokenPair(ObtainTokenPairInputArgs),
    GetUser(GetUserInputArgs),
}

#[derive(Deserialize, Serialize, Debug)]
pub enum UsersProcessorOutput {
    Register(UserRecord),
    ObtainTokenPair(TokenPair),
    GetUser(UserRecord),
}
