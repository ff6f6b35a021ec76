use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::api::client::ApiClient;
use crate::api::smoke::{self, Credentials, SmokePayloads, SmokeTarget};
use crate::config::Config;
use crate::upload::UploadFile;

#[derive(Debug, Default)]
pub struct SmokeOptions {
    pub email: Option<String>,
    pub password: Option<String>,
    pub targets: Vec<SmokeTarget>,
    pub job_id: Option<i64>,
    pub job_payload: Option<PathBuf>,
    pub application_payload: Option<PathBuf>,
    pub upload_file: Option<PathBuf>,
}

fn read_json(path: &Path) -> Result<Value> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("Failed to read payload file {:?}", path))?;
    serde_json::from_str(&raw).with_context(|| format!("Payload file {:?} is not valid JSON", path))
}

/// CLI flags win over the `[smoke]` config section.
pub fn credentials(config: &Config, email: Option<String>, password: Option<String>) -> Result<Credentials> {
    let email = email
        .or_else(|| config.smoke.email.clone())
        .context("No login email: pass --email or set smoke.email")?;
    let password = password
        .or_else(|| config.smoke.password.clone())
        .context("No login password: pass --password or set smoke.password")?;
    Ok(Credentials { email, password })
}

pub async fn run(config: &Config, options: SmokeOptions) -> Result<()> {
    let credentials = credentials(config, options.email, options.password)?;
    let targets = if options.targets.is_empty() {
        SmokeTarget::ALL.to_vec()
    } else {
        options.targets
    };

    let payloads = SmokePayloads {
        application: options.application_payload.as_deref().map(read_json).transpose()?,
        job: options.job_payload.as_deref().map(read_json).transpose()?,
        upload: options
            .upload_file
            .as_deref()
            .map(|p| UploadFile::load(p, None, Some(config.upload.max_size_mb)))
            .transpose()?,
        job_id: options.job_id,
    };

    let mut client = ApiClient::new(&config.api)?;
    info!("Running smoke test against {}", client.base_url());
    let reports = smoke::run(
        &mut client,
        &credentials,
        &targets,
        &payloads,
        Some(config.upload.max_size_mb),
    )
    .await;

    for report in &reports {
        println!("{}", report);
    }

    let failed = reports.iter().filter(|r| !r.passed()).count();
    if failed > 0 {
        error!(failed, total = reports.len(), "Smoke test finished with failures");
        bail!("{} of {} smoke steps did not pass", failed, reports.len());
    }
    info!("All {} smoke steps passed", reports.len());
    Ok(())
}
