use diesel::prelude::*;
use diesel::{PgConnection, QueryResult};

use crate::schema::users as UsersTable;
use crate::users::db_types::{CreateUser, UserRecord};

pub trait UserRepository {
    fn insert_user(&mut self, user: &CreateUser) -> QueryResult<UserRecord>;

    fn user_by_username(&mut self, name: &str) -> QueryResult<Option<UserRecord>>;

    fn user_by_id(&mut self, user_id: i64) -> QueryResult<Option<UserRecord>>;
}

impl UserRepository for PgConnection {
    fn insert_user(&mut self, user: &CreateUser) -> QueryResult<UserRecord> {
        diesel::insert_into(UsersTable::table)
            .values(user)
            .returning(UserRecord::as_returning())
            .get_result(self)
    }

    fn user_by_username(&mut self, name: &str) -> QueryResult<Option<UserRecord>> {
        use crate::schema::users::dsl::*;

        users
            .filter(username.eq(name))
            .select(UserRecord::as_select())
            .first(self)
            .optional()
    }

    fn user_by_id(&mut self, user_id: i64) -> QueryResult<Option<UserRecord>> {
        use crate::schema::users::dsl::*;

        users
            .filter(id.eq(user_id))
            .select(UserRecord::as_select())
            .first(self)
            .optional()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::StoreError;
    use crate::test_utils::{database_app_config, unique_username};
    use crate::users::operations::{USERNAME_TAKEN, authenticate, register_user};
    use crate::users::processor_enums::RegisterUserInputArgs;
    use crate::utils::db::get_conn;

    #[test]
    fn test_pg_registration_and_lookup() {
        let Some(app_config) = database_app_config() else {
            return;
        };
        let mut pooled = get_conn(app_config.pool).unwrap();
        let conn: &mut PgConnection = &mut pooled;

        conn.test_transaction::<_, StoreError, _>(|conn| {
            let args = RegisterUserInputArgs {
                username: Some(unique_username("pg")),
                email: Some("pg@example.com".to_string()),
                password: Some("wonderland".to_string()),
                password2: Some("wonderland".to_string()),
            };

            let user = register_user(conn, &args)?;
            assert_eq!(conn.user_by_id(user.id)?, Some(user.clone()));
            assert_eq!(conn.user_by_username(&user.username)?, Some(user.clone()));
            assert_eq!(authenticate(conn, &user.username, "wonderland")?.id, user.id);

            match register_user(conn, &args) {
                Err(StoreError::Validation(errors)) => {
                    assert_eq!(errors.get("username"), Some(&[USERNAME_TAKEN.to_string()][..]));
                }
                other => panic!("expected duplicate username, got {:?}", other),
            }

            Ok(())
        });
    }
}
