use bigdecimal::BigDecimal;
use diesel::{Identifiable, Insertable, Queryable, Selectable};
use serde::Serialize;

use crate::db::mysql::schema::subscription_plans;

pub const FREE_PLAN_NAME: &str = "FREE";

#[derive(Queryable, Identifiable, Selectable, Debug, PartialEq, Clone, Serialize)]
#[diesel(table_name = subscription_plans)]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct SubscriptionPlan {
    pub id: i32,
    pub name: String,
    pub price: BigDecimal,
    pub duration_days: i32,
    pub is_active: bool,
}

#[derive(Insertable, Debug, Clone, PartialEq, Serialize)]
#[diesel(table_name = subscription_plans)]
pub struct NewSubscriptionPlan {
    pub name: String,
    pub price: BigDecimal,
    pub duration_days: i32,
    pub is_active: bool,
}

impl NewSubscriptionPlan {
    /// The tier every new account starts on.
    pub fn free() -> Self {
        Self {
            name: FREE_PLAN_NAME.to_string(),
            price: BigDecimal::from(0),
            duration_days: 30,
            is_active: true,
        }
    }
}
