use serde_json::{json, Value};
use std::fmt;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::api::client::ApiClient;
use crate::upload::{upload_file, UploadFile, DEFAULT_UPLOAD_TYPE, MIME_TXT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SmokeTarget {
    Applications,
    Jobs,
    Upload,
}

impl SmokeTarget {
    pub const ALL: [SmokeTarget; 3] = [SmokeTarget::Applications, SmokeTarget::Jobs, SmokeTarget::Upload];

    pub fn step_name(&self) -> &'static str {
        match self {
            SmokeTarget::Applications => "POST /applications",
            SmokeTarget::Jobs => "POST /jobs",
            SmokeTarget::Upload => "POST /upload",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Request bodies for the smoke run. Missing entries fall back to the
/// built-in defaults.
#[derive(Debug, Clone, Default)]
pub struct SmokePayloads {
    pub application: Option<Value>,
    pub job: Option<Value>,
    pub upload: Option<UploadFile>,
    pub job_id: Option<i64>,
}

impl SmokePayloads {
    fn application(&self) -> Value {
        self.application.clone().unwrap_or_else(|| {
            json!({
                "jobId": self.job_id.unwrap_or(1),
                "coverLetter": "Submitted by the cvking smoke test.",
            })
        })
    }

    fn job(&self) -> Value {
        self.job.clone().unwrap_or_else(|| {
            json!({
                "title": format!("Smoke test job {}", Uuid::new_v4()),
                "description": "Created by the cvking smoke test.",
                "location": "Remote",
                "jobType": "FULL_TIME",
            })
        })
    }

    fn upload(&self) -> UploadFile {
        self.upload.clone().unwrap_or_else(|| {
            UploadFile::new(
                "smoke-test.txt",
                MIME_TXT,
                b"cvking smoke test upload\n".to_vec(),
            )
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    Passed(Value),
    Failed(String),
    Skipped,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StepReport {
    pub name: String,
    pub outcome: StepOutcome,
}

impl StepReport {
    fn new(name: &str, outcome: StepOutcome) -> Self {
        Self {
            name: name.to_string(),
            outcome,
        }
    }

    pub fn passed(&self) -> bool {
        matches!(self.outcome, StepOutcome::Passed(_))
    }
}

impl fmt::Display for StepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            StepOutcome::Passed(body) => write!(f, "[PASS] {} -> {}", self.name, body),
            StepOutcome::Failed(reason) => write!(f, "[FAIL] {}: {}", self.name, reason),
            StepOutcome::Skipped => write!(f, "[SKIP] {}", self.name),
        }
    }
}

/// Logs in, then runs each target in order. Every step gets a report; when
/// login fails the remaining steps are reported as skipped.
pub async fn run(
    client: &mut ApiClient,
    credentials: &Credentials,
    targets: &[SmokeTarget],
    payloads: &SmokePayloads,
    max_upload_mb: Option<u64>,
) -> Vec<StepReport> {
    let mut reports = Vec::with_capacity(targets.len() + 1);

    match client.login(&credentials.email, &credentials.password).await {
        Ok(_) => {
            info!("Login succeeded for {}", credentials.email);
            reports.push(StepReport::new("POST /auth/login", StepOutcome::Passed(json!({ "token": "<redacted>" }))));
        }
        Err(e) => {
            error!(email = %credentials.email, error = %e, "Login failed, skipping remaining steps");
            reports.push(StepReport::new("POST /auth/login", StepOutcome::Failed(e.to_string())));
            reports.extend(
                targets
                    .iter()
                    .map(|t| StepReport::new(t.step_name(), StepOutcome::Skipped)),
            );
            return reports;
        }
    }

    for target in targets {
        let outcome = match target {
            SmokeTarget::Applications => client
                .create_application(&payloads.application())
                .await
                .map_err(|e| e.to_string()),
            SmokeTarget::Jobs => client.create_job(&payloads.job()).await.map_err(|e| e.to_string()),
            SmokeTarget::Upload => upload_file(client, &payloads.upload(), DEFAULT_UPLOAD_TYPE, max_upload_mb)
                .await
                .map(|url| json!({ "url": url }))
                .map_err(|e| e.to_string()),
        };

        let outcome = match outcome {
            Ok(body) => StepOutcome::Passed(body),
            Err(reason) => {
                warn!(step = target.step_name(), reason = %reason, "Smoke step failed");
                StepOutcome::Failed(reason)
            }
        };
        reports.push(StepReport::new(target.step_name(), outcome));
    }

    reports
}
