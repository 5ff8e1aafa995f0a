use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::users as UsersTable;

#[derive(Serialize, Deserialize, Queryable, Selectable, Identifiable, Debug, Clone, PartialEq)]
#[diesel(table_name = UsersTable)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub email: Option<String>,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub date_joined: NaiveDateTime,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = UsersTable)]
pub struct CreateUser {
    pub username: String,
    pub email: Option<String>,
    pub password_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_never_serialized() {
        let user = UserRecord {
            id: 1,
            username: "alice".to_string(),
            email: None,
            password_hash: "$argon2id$secret".to_string(),
            date_joined: chrono::Utc::now().naive_utc(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["username"], "alice");
    }
}
