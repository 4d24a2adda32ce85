use contracts::shared::jwt::decode_payload;
use contracts::system::auth::{UserInfo, UserRole};
use leptos::prelude::*;
use once_cell::sync::OnceCell;

use super::{api, storage};

/// Setter of the mounted [`AuthProvider`], for code that runs outside the
/// component tree (the fetch adapter).
static SESSION_WRITER: OnceCell<WriteSignal<AuthState>> = OnceCell::new();

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some() && self.user_info.is_some()
    }

    pub fn role(&self) -> Option<UserRole> {
        self.user_info.as_ref().map(|u| u.role)
    }
}

/// Session from localStorage, dropped when the token is unreadable or expired.
fn restore_session(now_secs: i64) -> AuthState {
    let (Some(token), Some(user)) = (storage::get_access_token(), storage::get_user_info()) else {
        return AuthState::default();
    };

    match decode_payload(&token) {
        Ok(payload) if !payload.is_expired(now_secs) => AuthState {
            access_token: Some(token),
            user_info: Some(user),
        },
        Ok(_) => {
            log::info!("Stored session expired");
            storage::clear_session();
            AuthState::default()
        }
        Err(e) => {
            log::warn!("Stored token unreadable: {}", e);
            storage::clear_session();
            AuthState::default()
        }
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let restored = restore_session(chrono::Utc::now().timestamp());
    if let Some(user) = &restored.user_info {
        log::info!("Session restored for {}", user.email);
    }
    let (auth_state, set_auth_state) = signal(restored);
    let _ = SESSION_WRITER.set(set_auth_state);

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Role of the logged-in user; pages use it to pick the API scope.
pub fn current_role() -> Option<UserRole> {
    let (auth_state, _) = use_auth();
    auth_state.with_untracked(|s| s.role())
}

/// Helper: Perform login
pub async fn do_login(
    email: String,
    password: String,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), String> {
    let response = api::login(email, password)
        .await
        .map_err(|e| e.to_string())?;

    storage::save_access_token(&response.token);
    storage::save_user_info(&response.user);
    log::info!("Logged in as {} ({})", response.user.email, response.user.role.code());

    set_auth_state.set(AuthState {
        access_token: Some(response.token),
        user_info: Some(response.user),
    });

    Ok(())
}

/// Helper: Perform logout
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_session();
    set_auth_state.set(AuthState::default());
    log::info!("Logged out");
}

/// The backend refused the token: drop the session so the router shows the
/// login page again.
pub fn expire_session() {
    log::warn!("Session rejected by the server");
    match SESSION_WRITER.get() {
        Some(set_auth_state) => do_logout(*set_auth_state),
        None => storage::clear_session(),
    }
}
