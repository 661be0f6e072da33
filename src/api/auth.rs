use super::ApiGateway;
use crate::error::ClientError;
use crate::models::{LoginRequest, Profile, RegisterRequest, TokenResponse};
use crate::types::Operation;

impl ApiGateway {
    pub async fn login(&self, request: &LoginRequest) -> Result<TokenResponse, ClientError> {
        self.post(Operation::Login, "/auth/login", request).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<Profile, ClientError> {
        self.post(Operation::Register, "/auth/register", request).await
    }

    /// Log in and store the issued token. `remember` selects the durable slot
    /// and records the email for the next login prompt.
    pub async fn sign_in(&self, email: &str, password: &str, remember: bool) -> Result<TokenResponse, ClientError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let token = self.login(&request).await?;
        self.session.start(&token.access_token, remember)?;

        if remember {
            self.session.remember_user(email)?;
        } else {
            self.session.forget_user()?;
        }

        tracing::info!("Signed in as {}", email);
        Ok(token)
    }

    /// Local logout; the backend keeps no session state to revoke
    pub fn sign_out(&self) -> Result<(), ClientError> {
        self.session.clear()
    }
}
