use super::ApiGateway;
use crate::error::ClientError;
use crate::models::{SeaTimeLog, SeaTimeLogPayload};
use crate::types::Operation;

impl ApiGateway {
    pub async fn list_sea_time_logs(&self) -> Result<Vec<SeaTimeLog>, ClientError> {
        self.get(Operation::ListSeaTimeLogs, "/seatimelogs", &[]).await
    }

    pub async fn get_sea_time_log(&self, id: i64) -> Result<SeaTimeLog, ClientError> {
        self.get(Operation::GetSeaTimeLog, &format!("/seatimelogs/{}", id), &[]).await
    }

    pub async fn create_sea_time_log(&self, payload: &SeaTimeLogPayload) -> Result<SeaTimeLog, ClientError> {
        self.post(Operation::CreateSeaTimeLog, "/seatimelogs", payload).await
    }

    pub async fn update_sea_time_log(&self, id: i64, payload: &SeaTimeLogPayload) -> Result<SeaTimeLog, ClientError> {
        self.put(Operation::UpdateSeaTimeLog, &format!("/seatimelogs/{}", id), payload).await
    }

    pub async fn delete_sea_time_log(&self, id: i64) -> Result<bool, ClientError> {
        self.delete(Operation::DeleteSeaTimeLog, &format!("/seatimelogs/{}", id)).await
    }
}
