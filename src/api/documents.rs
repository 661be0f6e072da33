use reqwest::Method;

use super::ApiGateway;
use crate::error::ClientError;
use crate::models::{Document, DocumentPatch, DocumentPayload};
use crate::types::Operation;

impl ApiGateway {
    /// `archived: None` lists everything the backend returns by default
    pub async fn list_documents(&self, archived: Option<bool>) -> Result<Vec<Document>, ClientError> {
        let query: Vec<(&str, String)> = archived
            .map(|flag| vec![("archived", flag.to_string())])
            .unwrap_or_default();
        self.get(Operation::ListDocuments, "/documents", &query).await
    }

    pub async fn get_document(&self, id: i64) -> Result<Document, ClientError> {
        self.get(Operation::GetDocument, &format!("/documents/{}", id), &[]).await
    }

    pub async fn create_document(&self, payload: &DocumentPayload) -> Result<Document, ClientError> {
        self.post(Operation::CreateDocument, "/documents", payload).await
    }

    pub async fn update_document(&self, id: i64, patch: &DocumentPatch) -> Result<Document, ClientError> {
        self.patch(Operation::UpdateDocument, &format!("/documents/{}", id), patch).await
    }

    pub async fn delete_document(&self, id: i64) -> Result<bool, ClientError> {
        self.delete(Operation::DeleteDocument, &format!("/documents/{}", id)).await
    }

    pub async fn set_document_archived(&self, id: i64, archived: bool) -> Result<Document, ClientError> {
        self.send::<(), _>(
            Operation::ArchiveDocument,
            Method::PATCH,
            &format!("/documents/{}/archive", id),
            &[("archived", archived.to_string())],
            None,
        )
        .await
    }
}
