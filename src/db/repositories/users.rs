use anyhow::{Context, Result};
use diesel::prelude::*;
use diesel::result::Error as DieselError;
use std::sync::Arc;
use tracing::{error, info};

use super::repositories_utils::get_conn;
use super::DBPool;
use crate::db::models::user::User;
use crate::db::mysql::schema::users::dsl::*;

#[derive(Clone)]
pub struct UserRepository {
    pool: Arc<DBPool>,
}

impl UserRepository {
    pub fn new(pool: Arc<DBPool>) -> Self {
        UserRepository { pool }
    }

    pub fn list(&self, limit: u32) -> Result<Vec<User>> {
        let mut conn = get_conn(&self.pool)?;
        users
            .select(User::as_select())
            .order(id.asc())
            .limit(i64::from(limit))
            .load(&mut conn)
            .context("Failed to list users")
    }

    pub fn find_by_email(&self, target_email: &str) -> Result<Option<User>> {
        let mut conn = get_conn(&self.pool)?;
        match users
            .select(User::as_select())
            .filter(email.eq(target_email))
            .first(&mut conn)
        {
            Ok(user) => Ok(Some(user)),
            Err(DieselError::NotFound) => Ok(None),
            Err(e) => {
                error!(email = %target_email, error = ?e, "Failed to find user by email");
                Err(anyhow::anyhow!("Failed to find user by email: {}", e))
            }
        }
    }

    /// Overwrites the stored password hash. Returns the number of rows touched.
    pub fn update_password_hash(&self, target_email: &str, new_hash: &str) -> Result<usize> {
        let mut conn = get_conn(&self.pool)?;
        let updated = diesel::update(users.filter(email.eq(target_email)))
            .set(password.eq(new_hash))
            .execute(&mut conn)
            .map_err(|e| {
                error!(email = %target_email, error = ?e, "Failed to update password");
                anyhow::anyhow!("Failed to update password: {}", e)
            })?;
        info!("Updated password hash for {} ({} row(s))", target_email, updated);
        Ok(updated)
    }
}
