use contracts::system::auth::UserInfo;
use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "evdms_access_token";
const USER_INFO_KEY: &str = "evdms_user";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save access token to localStorage
pub fn save_access_token(token: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(ACCESS_TOKEN_KEY, token);
    }
}

/// Get access token from localStorage
pub fn get_access_token() -> Option<String> {
    get_local_storage()?.get_item(ACCESS_TOKEN_KEY).ok()?
}

/// Save the logged-in user as JSON
pub fn save_user_info(user: &UserInfo) {
    let Some(storage) = get_local_storage() else {
        return;
    };
    match serde_json::to_string(user) {
        Ok(json) => {
            let _ = storage.set_item(USER_INFO_KEY, &json);
        }
        Err(e) => log::warn!("Failed to store user info: {}", e),
    }
}

/// Stored user, `None` when missing or unreadable
pub fn get_user_info() -> Option<UserInfo> {
    let json = get_local_storage()?.get_item(USER_INFO_KEY).ok()??;
    serde_json::from_str(&json)
        .map_err(|e| log::warn!("Discarding stored user info: {}", e))
        .ok()
}

/// Clear token and user
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        let _ = storage.remove_item(USER_INFO_KEY);
    }
}
