use diesel::result::{DatabaseErrorKind, Error as DieselError};

use crate::auth::AuthError;
use crate::errors::StoreError;
use crate::users::db_types::{CreateUser, UserRecord};
use crate::users::password::{hash_password, verify_password};
use crate::users::processor_enums::{GetUserInputArgs, RegisterUserInputArgs};
use crate::users::storage::UserRepository;
use crate::users::validation::validate_registration;

pub const USERNAME_TAKEN: &str = "A user with that username already exists.";

pub fn register_user<R: UserRepository + ?Sized>(
    repo: &mut R,
    args: &RegisterUserInputArgs,
) -> Result<UserRecord, StoreError> {
    let registration = validate_registration(args)?;

    if repo.user_by_username(&registration.username)?.is_some() {
        return Err(StoreError::field("username", USERNAME_TAKEN));
    }

    let password_hash = hash_password(&registration.password)
        .map_err(|e| StoreError::Hashing(e.to_string()))?;

    let user = repo
        .insert_user(&CreateUser {
            username: registration.username,
            email: registration.email,
            password_hash,
        })
        .map_err(|e| match e {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                StoreError::field("username", USERNAME_TAKEN)
            }
            other => StoreError::Database(other),
        })?;

    tracing::info!(user_id = user.id, "Registered user {}", user.username);
    Ok(user)
}

/// Unknown usernames and wrong passwords fail identically.
pub fn authenticate<R: UserRepository + ?Sized>(
    repo: &mut R,
    username: &str,
    password: &str,
) -> Result<UserRecord, StoreError> {
    let user = repo
        .user_by_username(username.trim())?
        .ok_or(AuthError::InvalidCredentials)?;

    if !verify_password(password, &user.password_hash) {
        tracing::warn!(user_id = user.id, "Rejected login with wrong password");
        return Err(AuthError::InvalidCredentials.into());
    }

    Ok(user)
}

pub fn get_user<R: UserRepository + ?Sized>(
    repo: &mut R,
    args: &GetUserInputArgs,
) -> Result<UserRecord, StoreError> {
    let user = match args {
        GetUserInputArgs::ById(user_id) => repo.user_by_id(*user_id)?,
        GetUserInputArgs::ByUsername(name) => repo.user_by_username(name)?,
    };

    user.ok_or(StoreError::NotFound("User"))
}
