mod common;

use std::sync::Arc;

use anyhow::Result;
use serde_json::json;

use marine_tracker_client::cli::commands::{certificates, documents};
use marine_tracker_client::cli::{Context, OutputFormat};
use marine_tracker_client::models::{CertificatePayload, DocumentPayload, RecordStatus};
use marine_tracker_client::quota::{RejectionReason, UploadCandidate};
use marine_tracker_client::{AlertLevel, ApiGateway, ClientError, EventBus, QuotaPolicy, UploadGate};

const MB: u64 = 1024 * 1024;

fn document_payload() -> DocumentPayload {
    DocumentPayload {
        doc_id: "DOC-1700000000000".to_string(),
        doc: "aGVsbG8=".to_string(),
        doc_type: "Passport".to_string(),
        category: "Identity".to_string(),
        status: RecordStatus::Valid,
        expiry: "2030-01-01".to_string(),
        doc_name: "passport.png".to_string(),
        issue_date: "2024-01-01T00:00:00Z".to_string(),
        upload_date: "2024-01-02T00:00:00Z".to_string(),
        hidden: false,
    }
}

fn summary_with_usage(usage_mb: f64) -> serde_json::Value {
    json!({
        "seaTime": {"totalDays": 0},
        "certificates": {"total": 0},
        "documents": {"total": 0},
        "alerts": [],
        "storageUsedMB": usage_mb
    })
}

fn context(gateway: Arc<ApiGateway>) -> Context {
    Context {
        session: gateway.session().clone(),
        gateway,
        bus: EventBus::new(),
        policy: QuotaPolicy::default(),
    }
}

fn rejection(err: ClientError) -> RejectionReason {
    match err {
        ClientError::Policy(rejection) => rejection.reason,
        other => panic!("expected policy rejection, got {:?}", other),
    }
}

#[tokio::test]
async fn accepted_png_is_forwarded() -> Result<()> {
    let backend = common::StubBackend::start().await?;
    backend.respond("GET", "/dashboard/summary", 200, summary_with_usage(120.0));
    backend.respond("POST", "/documents", 201, common::document_json(11, false));
    let gateway = backend.gateway(common::signed_in_session("abc123"));
    let gate = UploadGate::new(gateway, QuotaPolicy::default());

    let candidate = UploadCandidate::new("passport.png", "image/png", 5 * MB);
    let document = gate.upload_document(&candidate, &document_payload()).await?;

    assert_eq!(document.id, 11);
    let posted = &backend.requests_to("POST", "/documents")[0];
    let body = posted.body.as_ref().expect("document body sent");
    assert_eq!(body["docID"], "DOC-1700000000000");
    assert_eq!(body["status"], "VALID");
    Ok(())
}

#[tokio::test]
async fn zip_never_reaches_backend() -> Result<()> {
    let backend = common::StubBackend::start().await?;
    backend.respond("GET", "/dashboard/summary", 200, summary_with_usage(0.0));
    let gateway = backend.gateway(common::signed_in_session("abc123"));
    let gate = UploadGate::new(gateway, QuotaPolicy::default());

    let candidate = UploadCandidate::new("logbook.zip", "application/zip", 1024);
    let err = gate.upload_document(&candidate, &document_payload()).await.unwrap_err();

    assert_eq!(rejection(err), RejectionReason::UnsupportedType);
    assert!(backend.requests().is_empty());
    Ok(())
}

#[tokio::test]
async fn oversized_certificate_is_refused() -> Result<()> {
    let backend = common::StubBackend::start().await?;
    backend.respond("GET", "/dashboard/summary", 200, summary_with_usage(0.0));
    let gateway = backend.gateway(common::signed_in_session("abc123"));
    let gate = UploadGate::new(gateway, QuotaPolicy::default());

    let candidate = UploadCandidate::new("stcw.pdf", "application/pdf", 11 * MB);
    let payload = CertificatePayload {
        cert: "JVBERi0=".to_string(),
        cert_type: "STCW".to_string(),
        issued_by: "DG Shipping".to_string(),
        status: RecordStatus::Valid,
        expiry: "2029-06-30".to_string(),
        cert_name: "Basic Safety".to_string(),
        issue_date: "2024-06-30".to_string(),
        upload_date: "2024-07-01T00:00:00Z".to_string(),
        hidden: false,
    };
    let err = gate.upload_certificate(&candidate, &payload).await.unwrap_err();

    assert_eq!(err.error_code(), "FILE_TOO_LARGE");
    assert!(backend.requests().is_empty());
    Ok(())
}

#[tokio::test]
async fn full_quota_blocks_upload() -> Result<()> {
    let backend = common::StubBackend::start().await?;
    backend.respond("GET", "/dashboard/summary", 200, summary_with_usage(498.0));
    let gateway = backend.gateway(common::signed_in_session("abc123"));
    let gate = UploadGate::new(gateway, QuotaPolicy::default());

    let candidate = UploadCandidate::new("medical.pdf", "application/pdf", 4 * MB);
    let err = gate.upload_document(&candidate, &document_payload()).await.unwrap_err();

    assert_eq!(rejection(err), RejectionReason::QuotaExceeded);
    assert!(backend.requests_to("POST", "/documents").is_empty());
    Ok(())
}

#[tokio::test]
async fn usage_is_classified_from_dashboard() -> Result<()> {
    let backend = common::StubBackend::start().await?;
    backend.respond("GET", "/dashboard/summary", 200, summary_with_usage(420.0));
    let gateway = backend.gateway(common::signed_in_session("abc123"));
    let gate = UploadGate::new(gateway, QuotaPolicy::default());

    let (usage_mb, level) = gate.usage().await?;

    assert_eq!(usage_mb, 420.0);
    assert_eq!(level, AlertLevel::Warning);
    Ok(())
}

#[tokio::test]
async fn unreported_usage_counts_as_empty() -> Result<()> {
    let backend = common::StubBackend::start().await?;
    backend.respond("GET", "/dashboard/summary", 200, json!({}));
    let gateway = backend.gateway(common::signed_in_session("abc123"));
    let gate = UploadGate::new(gateway, QuotaPolicy::default());

    let candidate = UploadCandidate::new("passport.jpg", "image/jpeg", 2 * MB);
    let level = gate.check(&candidate).await?;

    assert_eq!(level, AlertLevel::Normal);
    Ok(())
}

#[tokio::test]
async fn rejected_type_makes_no_request_at_all() -> Result<()> {
    let backend = common::StubBackend::start().await?;
    backend.respond("GET", "/dashboard/summary", 200, summary_with_usage(0.0));
    let gateway = backend.gateway(common::signed_in_session("abc123"));
    let gate = UploadGate::new(gateway, QuotaPolicy::default());

    let candidate = UploadCandidate::new("logbook.zip", "application/zip", 1024);
    let err = gate.check(&candidate).await.unwrap_err();

    assert_eq!(rejection(err), RejectionReason::UnsupportedType);
    assert!(backend.requests().is_empty());
    Ok(())
}

#[tokio::test]
async fn oversized_file_makes_no_request_at_all() -> Result<()> {
    let backend = common::StubBackend::start().await?;
    backend.respond("GET", "/dashboard/summary", 200, summary_with_usage(0.0));
    let gateway = backend.gateway(common::signed_in_session("abc123"));
    let gate = UploadGate::new(gateway, QuotaPolicy::default());

    let candidate = UploadCandidate::new("stcw.pdf", "application/pdf", 11 * MB);
    let err = gate.upload_document(&candidate, &document_payload()).await.unwrap_err();

    assert_eq!(rejection(err), RejectionReason::FileTooLarge);
    assert!(backend.requests().is_empty());
    Ok(())
}

#[tokio::test]
async fn local_rejection_does_not_need_backend() -> Result<()> {
    let session = common::signed_in_session("abc123");
    let gateway = Arc::new(ApiGateway::new(&common::unreachable_base_url(), session)?);
    let gate = UploadGate::new(gateway, QuotaPolicy::default());

    let candidate = UploadCandidate::new("logbook.zip", "application/zip", 1024);
    let err = gate.check(&candidate).await.unwrap_err();

    assert_eq!(rejection(err), RejectionReason::UnsupportedType);
    Ok(())
}

#[tokio::test]
async fn payload_create_is_gated_like_upload() -> Result<()> {
    let backend = common::StubBackend::start().await?;
    backend.respond("GET", "/dashboard/summary", 200, summary_with_usage(0.0));
    let ctx = context(backend.gateway(common::signed_in_session("abc123")));

    let mut payload = document_payload();
    payload.doc_name = "logbook.zip".to_string();
    let file = tempfile::NamedTempFile::new()?;
    std::fs::write(file.path(), serde_json::to_string(&payload)?)?;

    let create = documents::DocumentCommands::Create { file: Some(file.path().to_path_buf()) };
    let err = documents::handle(create, &ctx, OutputFormat::Json).await.unwrap_err();

    assert_eq!(
        rejection(err.downcast::<ClientError>()?),
        RejectionReason::UnsupportedType
    );
    assert!(backend.requests().is_empty());
    Ok(())
}

#[tokio::test]
async fn payload_certificate_update_checks_quota() -> Result<()> {
    let backend = common::StubBackend::start().await?;
    backend.respond("GET", "/dashboard/summary", 200, summary_with_usage(500.0));
    let ctx = context(backend.gateway(common::signed_in_session("abc123")));

    let payload = json!({
        "cert": "JVBERi0xLjQK",
        "certType": "STCW",
        "issuedBy": "DG Shipping",
        "status": "VALID",
        "expiry": "2029-06-30",
        "certName": "basic-safety.pdf",
        "issueDate": "2024-06-30",
        "uploadDate": "2024-07-01T00:00:00Z",
        "hidden": false
    });
    let file = tempfile::NamedTempFile::new()?;
    std::fs::write(file.path(), payload.to_string())?;

    let update = certificates::CertificateCommands::Update { id: 4, file: Some(file.path().to_path_buf()) };
    let err = certificates::handle(update, &ctx, OutputFormat::Json).await.unwrap_err();

    assert_eq!(
        rejection(err.downcast::<ClientError>()?),
        RejectionReason::QuotaExceeded
    );
    assert!(backend.requests_to("PUT", "/certificates/4").is_empty());
    Ok(())
}
