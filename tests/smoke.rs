mod common;

use serde_json::json;

use common::{client_for, spawn_mock, EMAIL, PASSWORD};
use cvking_tools::api::smoke::{run, Credentials, SmokePayloads, SmokeTarget, StepOutcome};

fn credentials(password: &str) -> Credentials {
    Credentials {
        email: EMAIL.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn full_run_passes_every_step() {
    let (base_url, state) = spawn_mock().await;
    let mut client = client_for(&base_url);

    let reports = run(
        &mut client,
        &credentials(PASSWORD),
        &SmokeTarget::ALL,
        &SmokePayloads::default(),
        None,
    )
    .await;

    assert_eq!(reports.len(), 4);
    assert!(reports.iter().all(|r| r.passed()), "{reports:?}");
    let paths: Vec<_> = state.requests().iter().map(|r| r.path).collect();
    assert_eq!(paths, vec!["/auth/login", "/applications", "/jobs", "/upload"]);
}

#[tokio::test]
async fn failed_login_skips_remaining_steps() {
    let (base_url, state) = spawn_mock().await;
    let mut client = client_for(&base_url);

    let reports = run(
        &mut client,
        &credentials("wrong"),
        &[SmokeTarget::Jobs, SmokeTarget::Applications],
        &SmokePayloads::default(),
        None,
    )
    .await;

    assert_eq!(reports.len(), 3);
    assert!(matches!(&reports[0].outcome, StepOutcome::Failed(reason) if reason.contains("401")));
    assert_eq!(reports[1].outcome, StepOutcome::Skipped);
    assert_eq!(reports[2].outcome, StepOutcome::Skipped);
    assert_eq!(state.requests().len(), 1);
}

#[tokio::test]
async fn rejected_step_is_reported_and_run_continues() {
    let (base_url, _state) = spawn_mock().await;
    let mut client = client_for(&base_url);
    let payloads = SmokePayloads {
        job: Some(json!({ "description": "missing title" })),
        job_id: Some(9),
        ..Default::default()
    };

    let reports = run(
        &mut client,
        &credentials(PASSWORD),
        &[SmokeTarget::Jobs, SmokeTarget::Applications],
        &payloads,
        None,
    )
    .await;

    assert!(matches!(&reports[1].outcome, StepOutcome::Failed(reason) if reason.contains("title is required")));
    match &reports[2].outcome {
        StepOutcome::Passed(body) => assert_eq!(body["jobId"], 9),
        other => panic!("expected application to pass, got {other:?}"),
    }
}
