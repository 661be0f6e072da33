use std::sync::Arc;
use tracing::{debug, info};

use super::{AlertLevel, QuotaPolicy, UploadCandidate};
use crate::api::ApiGateway;
use crate::error::ClientError;
use crate::models::{Certificate, CertificatePayload, Document, DocumentPayload};

/// Runs the local upload policy against live usage before forwarding a write.
///
/// A rejected candidate never reaches the backend.
pub struct UploadGate {
    gateway: Arc<ApiGateway>,
    policy: QuotaPolicy,
}

impl UploadGate {
    pub fn new(gateway: Arc<ApiGateway>, policy: QuotaPolicy) -> Self {
        Self { gateway, policy }
    }

    pub fn policy(&self) -> &QuotaPolicy {
        &self.policy
    }

    /// Current usage in MB and its alert level
    pub async fn usage(&self) -> Result<(f64, AlertLevel), ClientError> {
        let summary = self.gateway.dashboard_summary().await?;
        let usage_mb = summary.storage_usage_mb();
        Ok((usage_mb, self.policy.classify(usage_mb)))
    }

    /// Check a candidate without uploading anything. Type and size are
    /// checked locally; usage is only fetched for the quota step.
    pub async fn check(&self, candidate: &UploadCandidate) -> Result<AlertLevel, ClientError> {
        self.policy.check_file(candidate)?;

        let (usage_mb, level) = self.usage().await?;
        debug!(
            "Checking quota for {} ({} bytes) at {:.1}MB used",
            candidate.file_name, candidate.size_bytes, usage_mb
        );
        self.policy.check_quota(candidate, usage_mb)?;
        Ok(level)
    }

    pub async fn upload_document(
        &self,
        candidate: &UploadCandidate,
        payload: &DocumentPayload,
    ) -> Result<Document, ClientError> {
        self.check(candidate).await?;
        let document = self.gateway.create_document(payload).await?;
        info!("Uploaded document {} as id {}", candidate.file_name, document.id);
        Ok(document)
    }

    pub async fn upload_certificate(
        &self,
        candidate: &UploadCandidate,
        payload: &CertificatePayload,
    ) -> Result<Certificate, ClientError> {
        self.check(candidate).await?;
        let certificate = self.gateway.create_certificate(payload).await?;
        info!("Uploaded certificate {} as id {}", candidate.file_name, certificate.id);
        Ok(certificate)
    }
}
