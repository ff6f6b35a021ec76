use anyhow::{Context, Result};
use diesel::prelude::*;
use diesel::result::Error as DieselError;
use std::sync::Arc;
use tracing::{error, info};

use super::repositories_utils::get_conn;
use super::DBPool;
use crate::db::models::subscription_plan::{NewSubscriptionPlan, SubscriptionPlan};
use crate::db::mysql::schema::subscription_plans::dsl::*;

#[derive(Clone)]
pub struct SubscriptionPlanRepository {
    pool: Arc<DBPool>,
}

impl SubscriptionPlanRepository {
    pub fn new(pool: Arc<DBPool>) -> Self {
        SubscriptionPlanRepository { pool }
    }

    pub fn list_all(&self) -> Result<Vec<SubscriptionPlan>> {
        let mut conn = get_conn(&self.pool)?;
        subscription_plans
            .select(SubscriptionPlan::as_select())
            .order(id.asc())
            .load(&mut conn)
            .context("Failed to list subscription plans")
    }

    pub fn find_by_name(&self, plan_name: &str) -> Result<Option<SubscriptionPlan>> {
        let mut conn = get_conn(&self.pool)?;
        match subscription_plans
            .select(SubscriptionPlan::as_select())
            .filter(name.eq(plan_name))
            .first(&mut conn)
        {
            Ok(plan) => Ok(Some(plan)),
            Err(DieselError::NotFound) => Ok(None),
            Err(e) => {
                error!(name = %plan_name, error = ?e, "Failed to find subscription plan");
                Err(anyhow::anyhow!("Failed to find subscription plan: {}", e))
            }
        }
    }

    /// Inserts `new_plan` unless a plan with the same name exists. Returns the
    /// stored plan and whether it was created by this call.
    pub fn ensure_exists(&self, new_plan: &NewSubscriptionPlan) -> Result<(SubscriptionPlan, bool)> {
        if let Some(existing) = self.find_by_name(&new_plan.name)? {
            info!("Subscription plan {} already exists (id {})", existing.name, existing.id);
            return Ok((existing, false));
        }

        let mut conn = get_conn(&self.pool)?;
        // MySQL has no RETURNING, so read the row back by its unique name.
        conn.transaction::<_, DieselError, _>(|conn| {
            diesel::insert_into(subscription_plans)
                .values(new_plan)
                .execute(conn)?;
            subscription_plans
                .select(SubscriptionPlan::as_select())
                .filter(name.eq(&new_plan.name))
                .first(conn)
        })
        .map(|plan| {
            info!("Created subscription plan {} (id {})", plan.name, plan.id);
            (plan, true)
        })
        .map_err(|e| {
            error!(plan = ?new_plan, error = ?e, "Failed to insert subscription plan");
            anyhow::anyhow!("Failed to insert subscription plan: {}", e)
        })
    }
}
