use diesel::{Identifiable, Queryable, Selectable};
use serde::Serialize;

use crate::db::mysql::schema::users;

#[derive(Queryable, Identifiable, Selectable, Debug, PartialEq, Clone, Serialize)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct User {
    pub id: i32,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub role: String,
}
