use contracts::system::auth::UserRole;
use leptos::prelude::*;

use super::context::use_auth;

/// Renders children only for the given roles.
#[component]
pub fn RequireRole(roles: &'static [UserRole], children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.with(|s| s.role().map(|r| roles.contains(&r)).unwrap_or(false))
            fallback=|| view! {
                <div class="alert alert--error">"Access denied for your role."</div>
            }
        >
            {children()}
        </Show>
    }
}

pub const EVM_ROLES: &[UserRole] = &[UserRole::Admin, UserRole::EvmStaff];
pub const DEALER_ROLES: &[UserRole] = &[UserRole::DealerManager, UserRole::DealerStaff];
pub const ADMIN_ONLY: &[UserRole] = &[UserRole::Admin];
