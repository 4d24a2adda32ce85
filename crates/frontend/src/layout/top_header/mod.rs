//! Top bar: sidebar toggle, brand, current user and logout.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth, AuthState};
use contracts::shared::jwt::user_id_from_token;
use leptos::prelude::*;

/// `Name #id · Role · Dealer`; the id is read from the token's `userId` claim.
fn format_user_line(state: &AuthState) -> String {
    let Some(user) = &state.user_info else {
        return "Guest".to_string();
    };
    let user_id = state
        .access_token
        .as_deref()
        .and_then(user_id_from_token)
        .unwrap_or_else(|| user.user_id.clone());

    let mut parts = vec![
        format!("{} #{}", user.display_name(), user_id),
        user.role.label().to_string(),
    ];
    if let Some(dealer) = &user.dealer_name {
        parts.push(dealer.clone());
    }
    parts.join(" · ")
}

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, set_auth_state) = use_auth();

    let toggle_sidebar = move |_| ctx.toggle_left();

    let logout = move |_| {
        ctx.close_all();
        do_logout(set_auth_state);
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    let user_line = move || auth_state.with(format_user_line);

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"EVDMS"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("users")}
                    <span>{user_line}</span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Log out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::{UserInfo, UserRole};

    // payload: {"userId":17,"role":"DEALER_MANAGER","exp":2000000000}
    const TOKEN: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.eyJ1c2VySWQiOjE3LCJyb2xlIjoiREVBTEVSX01BTkFHRVIiLCJleHAiOjIwMDAwMDAwMDB9.sig";

    fn manager() -> UserInfo {
        UserInfo {
            user_id: "3".into(),
            full_name: "Le Hoa".into(),
            email: "hoa@dealer.vn".into(),
            role: UserRole::DealerManager,
            dealer_id: Some("2".into()),
            dealer_name: Some("Saigon EV".into()),
        }
    }

    #[test]
    fn test_user_line_shows_token_user_id() {
        let state = AuthState {
            access_token: Some(TOKEN.to_string()),
            user_info: Some(manager()),
        };
        assert_eq!(
            format_user_line(&state),
            format!("Le Hoa #17 · {} · Saigon EV", UserRole::DealerManager.label())
        );
    }

    #[test]
    fn test_user_line_fallbacks() {
        let mut user = manager();
        user.dealer_name = None;
        let state = AuthState {
            access_token: Some("not-a-jwt".to_string()),
            user_info: Some(user),
        };
        assert_eq!(
            format_user_line(&state),
            format!("Le Hoa #3 · {}", UserRole::DealerManager.label())
        );
        assert_eq!(format_user_line(&AuthState::default()), "Guest");
    }
}
