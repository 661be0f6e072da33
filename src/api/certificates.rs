use super::ApiGateway;
use crate::error::ClientError;
use crate::models::{Certificate, CertificatePayload};
use crate::types::Operation;

impl ApiGateway {
    pub async fn list_certificates(&self) -> Result<Vec<Certificate>, ClientError> {
        self.get(Operation::ListCertificates, "/certificates", &[]).await
    }

    pub async fn get_certificate(&self, id: i64) -> Result<Certificate, ClientError> {
        self.get(Operation::GetCertificate, &format!("/certificates/{}", id), &[]).await
    }

    pub async fn create_certificate(&self, payload: &CertificatePayload) -> Result<Certificate, ClientError> {
        self.post(Operation::CreateCertificate, "/certificates", payload).await
    }

    pub async fn update_certificate(&self, id: i64, payload: &CertificatePayload) -> Result<Certificate, ClientError> {
        self.put(Operation::UpdateCertificate, &format!("/certificates/{}", id), payload).await
    }

    pub async fn delete_certificate(&self, id: i64) -> Result<bool, ClientError> {
        self.delete(Operation::DeleteCertificate, &format!("/certificates/{}", id)).await
    }
}
