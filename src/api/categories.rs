use super::ApiGateway;
use crate::error::ClientError;
use crate::models::{Category, CategoryCreate, CategoryScope, CategoryUpdate};
use crate::types::Operation;

impl ApiGateway {
    /// System categories plus the user's own, for one scope
    pub async fn list_categories(&self, scope: CategoryScope) -> Result<Vec<Category>, ClientError> {
        self.get(Operation::ListCategories, "/categories", &[("scope", scope.to_string())]).await
    }

    pub async fn create_category(&self, category: &CategoryCreate) -> Result<Category, ClientError> {
        self.post(Operation::CreateCategory, "/categories", category).await
    }

    pub async fn update_category(&self, id: i64, update: &CategoryUpdate) -> Result<Category, ClientError> {
        self.put(Operation::UpdateCategory, &format!("/categories/{}", id), update).await
    }

    /// The backend refuses system categories; its message is passed through
    pub async fn delete_category(&self, id: i64) -> Result<bool, ClientError> {
        self.delete(Operation::DeleteCategory, &format!("/categories/{}", id)).await
    }
}
