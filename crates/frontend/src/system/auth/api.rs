use contracts::shared::envelope::ApiError;
use contracts::system::auth::{ApiScope, LoginRequest, LoginResponse};

use crate::shared::api_utils::post_public;

/// Login with email and password
pub async fn login(email: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { email, password };
    post_public(&ApiScope::Auth.endpoint("login"), &request).await
}
