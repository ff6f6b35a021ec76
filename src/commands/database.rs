use anyhow::{bail, Result};
use tracing::info;

use crate::config::Config;
use crate::db;
use crate::db::models::subscription_plan::NewSubscriptionPlan;
use crate::db::repositories::repositories_utils::run_blocking;
use crate::db::repositories::schema_inspector::SchemaInspector;
use crate::db::repositories::subscription_plans::SubscriptionPlanRepository;
use crate::db::repositories::users::UserRepository;
use crate::db::tables::KnownTable;
use crate::password;

fn selected(table: Option<KnownTable>) -> Vec<KnownTable> {
    match table {
        Some(t) => vec![t],
        None => KnownTable::ALL.to_vec(),
    }
}

pub async fn tables(config: &Config) -> Result<()> {
    let pool = db::connect(config.database_url()?)?;
    let inspector = SchemaInspector::new(pool);
    let names = run_blocking(move || inspector.list_tables()).await?;
    for name in names {
        println!("{}", name);
    }
    Ok(())
}

pub async fn describe(config: &Config, table: Option<KnownTable>) -> Result<()> {
    let pool = db::connect(config.database_url()?)?;
    let inspector = SchemaInspector::new(pool);
    let tables = selected(table);

    let described = run_blocking(move || {
        tables
            .into_iter()
            .map(|t| inspector.describe(t).map(|columns| (t, columns)))
            .collect::<Result<Vec<_>>>()
    })
    .await?;

    for (table, columns) in described {
        println!("\n=== {} ===", table);
        for column in columns {
            println!("{}", column);
        }
    }
    Ok(())
}

pub async fn count(config: &Config, table: Option<KnownTable>) -> Result<()> {
    let pool = db::connect(config.database_url()?)?;
    let inspector = SchemaInspector::new(pool);
    let tables = selected(table);

    let counts = run_blocking(move || {
        tables
            .into_iter()
            .map(|t| inspector.count_rows(t).map(|n| (t, n)))
            .collect::<Result<Vec<_>>>()
    })
    .await?;

    for (table, rows) in counts {
        println!("{:<24} {}", table, rows);
    }
    Ok(())
}

pub async fn users(config: &Config, limit: u32) -> Result<()> {
    let pool = db::connect(config.database_url()?)?;
    let repo = UserRepository::new(pool);
    let users = run_blocking(move || repo.list(limit)).await?;
    for user in users {
        println!("{:>6}  {:<40} {}", user.id, user.email, user.role);
    }
    Ok(())
}

pub async fn set_password(config: &Config, email: String, new_password: String) -> Result<()> {
    let pool = db::connect(config.database_url()?)?;
    let repo = UserRepository::new(pool);
    let cost = config.password.bcrypt_cost;

    run_blocking(move || {
        password::reset_password(&repo, &email, &new_password, cost)?;

        // Read the row back so a trigger or a wrong column cannot fail silently.
        let stored = repo
            .find_by_email(&email)?
            .ok_or_else(|| anyhow::anyhow!("User {} disappeared after update", email))?;
        if !password::verify_password(&new_password, &stored.password)? {
            bail!("Stored hash for {} does not verify against the new password", email);
        }
        info!("Verified new password hash for {}", email);
        println!("Password updated for {} (user id {})", stored.email, stored.id);
        Ok(())
    })
    .await
}

pub async fn plans(config: &Config) -> Result<()> {
    let pool = db::connect(config.database_url()?)?;
    let repo = SubscriptionPlanRepository::new(pool);
    let plans = run_blocking(move || repo.list_all()).await?;
    for plan in plans {
        println!(
            "{:>4}  {:<16} {:>10} {:>5}d  {}",
            plan.id,
            plan.name,
            plan.price,
            plan.duration_days,
            if plan.is_active { "active" } else { "inactive" }
        );
    }
    Ok(())
}

pub async fn seed_plan(config: &Config) -> Result<()> {
    let pool = db::connect(config.database_url()?)?;
    let repo = SubscriptionPlanRepository::new(pool);
    let (plan, created) = run_blocking(move || repo.ensure_exists(&NewSubscriptionPlan::free())).await?;
    if created {
        println!("Created plan {} (id {})", plan.name, plan.id);
    } else {
        println!("Plan {} already exists (id {})", plan.name, plan.id);
    }
    Ok(())
}
