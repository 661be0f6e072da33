use super::ApiGateway;
use crate::error::ClientError;
use crate::models::{ResumeDraft, ResumeDraftCreate, ResumeDraftUpdate};
use crate::types::Operation;

impl ApiGateway {
    pub async fn list_resumes(&self) -> Result<Vec<ResumeDraft>, ClientError> {
        self.get(Operation::ListResumes, "/resumes", &[]).await
    }

    pub async fn get_resume(&self, id: i64) -> Result<ResumeDraft, ClientError> {
        self.get(Operation::GetResume, &format!("/resumes/{}", id), &[]).await
    }

    pub async fn create_resume(&self, draft: &ResumeDraftCreate) -> Result<ResumeDraft, ClientError> {
        self.post(Operation::CreateResume, "/resumes", draft).await
    }

    pub async fn update_resume(&self, id: i64, update: &ResumeDraftUpdate) -> Result<ResumeDraft, ClientError> {
        self.put(Operation::UpdateResume, &format!("/resumes/{}", id), update).await
    }

    pub async fn delete_resume(&self, id: i64) -> Result<bool, ClientError> {
        self.delete(Operation::DeleteResume, &format!("/resumes/{}", id)).await
    }
}
