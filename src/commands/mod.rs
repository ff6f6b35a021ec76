use anyhow::Result;

use crate::cli::Command;
use crate::config::Config;

mod database;
mod layout;
mod smoke;
mod upload;

pub async fn run(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Tables => database::tables(config).await,
        Command::Describe { table } => database::describe(config, table).await,
        Command::Count { table } => database::count(config, table).await,
        Command::Users { limit } => database::users(config, limit).await,
        Command::SetPassword { email, password } => database::set_password(config, email, password).await,
        Command::Plans => database::plans(config).await,
        Command::SeedPlan => database::seed_plan(config).await,
        Command::Smoke {
            email,
            password,
            targets,
            job_id,
            job_payload,
            application_payload,
            upload_file,
        } => {
            let options = smoke::SmokeOptions {
                email,
                password,
                targets,
                job_id,
                job_payload,
                application_payload,
                upload_file,
            };
            smoke::run(config, options).await
        }
        Command::Validate { path, max_size_mb, mime } => upload::validate(config, &path, max_size_mb, mime.as_deref()),
        Command::Upload {
            path,
            upload_type,
            mime,
            max_size_mb,
            login,
        } => upload::upload(config, &path, &upload_type, mime.as_deref(), max_size_mb, login).await,
        Command::Layout { paths } => {
            layout::run(&paths);
            Ok(())
        }
    }
}
