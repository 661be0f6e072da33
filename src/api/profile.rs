use super::ApiGateway;
use crate::error::ClientError;
use crate::models::{Profile, ProfileUpdate};
use crate::types::Operation;

impl ApiGateway {
    pub async fn get_profile(&self) -> Result<Profile, ClientError> {
        self.get(Operation::GetProfile, "/profile", &[]).await
    }

    /// Does not broadcast; see `crate::profile::save_profile`
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<Profile, ClientError> {
        self.put(Operation::UpdateProfile, "/profile", update).await
    }
}
