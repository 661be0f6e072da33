use super::ApiGateway;
use crate::error::ClientError;
use crate::models::DashboardSummary;
use crate::types::Operation;

impl ApiGateway {
    pub async fn dashboard_summary(&self) -> Result<DashboardSummary, ClientError> {
        self.get(Operation::DashboardSummary, "/dashboard/summary", &[]).await
    }
}
