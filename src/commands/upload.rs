use anyhow::Result;
use std::path::Path;
use tracing::info;

use crate::api::client::ApiClient;
use crate::commands::smoke::credentials;
use crate::config::Config;
use crate::upload::{upload_file, validate_file, UploadFile};

pub fn validate(config: &Config, path: &Path, max_size_mb: Option<u64>, mime: Option<&str>) -> Result<()> {
    let limit = max_size_mb.unwrap_or(config.upload.max_size_mb);
    let file = UploadFile::load(path, mime, Some(limit))?;
    validate_file(&file, Some(limit))?;
    println!("{}: ok ({} bytes, {})", file.name, file.size(), file.mime_type);
    Ok(())
}

pub async fn upload(
    config: &Config,
    path: &Path,
    upload_type: &str,
    mime: Option<&str>,
    max_size_mb: Option<u64>,
    login: bool,
) -> Result<()> {
    let limit = max_size_mb.unwrap_or(config.upload.max_size_mb);
    let file = UploadFile::load(path, mime, Some(limit))?;

    let mut client = ApiClient::new(&config.api)?;
    if login {
        let creds = credentials(config, None, None)?;
        client.login(&creds.email, &creds.password).await?;
        info!("Logged in as {}", creds.email);
    }

    let url = upload_file(&client, &file, upload_type, Some(limit)).await?;
    println!("{}", url);
    Ok(())
}
