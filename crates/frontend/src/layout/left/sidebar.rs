//! Role-aware sidebar with collapsible menu groups

use contracts::system::auth::UserRole;
use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{roles_for_key, tab_label_for_key};
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str)>, // (tab key, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "overview",
            label: "Overview",
            icon: "dashboard",
            items: vec![("d400_dealer_overview", "dashboard")],
        },
        MenuGroup {
            id: "sales",
            label: "Sales",
            icon: "money",
            items: vec![
                ("a001_customer", "customers"),
                ("a007_quotation", "file-text"),
                ("a006_contract", "clipboard"),
                ("a003_promotion", "tag"),
                ("p901_sales_report", "trending-up"),
            ],
        },
        MenuGroup {
            id: "stock",
            label: "Vehicles & Stock",
            icon: "car",
            items: vec![
                ("a002_inventory", "car"),
                ("a005_vehicle_request", "truck"),
                ("p900_inventory_report", "bar-chart"),
                ("p902_consumption_rate", "battery"),
            ],
        },
        MenuGroup {
            id: "service",
            label: "Customer Care",
            icon: "message-square",
            items: vec![("a008_feedback", "message-square")],
        },
        MenuGroup {
            id: "administration",
            label: "Administration",
            icon: "users",
            items: vec![("sys_dealer_accounts", "users")],
        },
    ]
}

/// Groups with only the items `role` may open; empty groups are dropped.
fn groups_for_role(role: UserRole) -> Vec<MenuGroup> {
    get_menu_groups()
        .into_iter()
        .filter_map(|mut group| {
            group.items.retain(|(key, _)| roles_for_key(key).contains(&role));
            (!group.items.is_empty()).then_some(group)
        })
        .collect()
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, _) = use_auth();

    let expanded_groups = RwSignal::new(vec!["overview".to_string()]);

    let groups = move || {
        auth_state
            .with(|s| s.role())
            .map(groups_for_role)
            .unwrap_or_default()
    };

    view! {
        <div class="app-sidebar__content">
            {move || groups().into_iter().map(|group| {
                let group_id = group.id.to_string();
                let gid_click = group_id.clone();
                let gid_exp = group_id.clone();
                let gid_show = group_id;

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                let gid = gid_click.clone();
                                expanded_groups.update(move |items| {
                                    if let Some(pos) = items.iter().position(|x| x == &gid) {
                                        items.remove(pos);
                                    } else {
                                        items.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.with(|g| g.contains(&gid_exp))
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.with(|g| g.contains(&gid_show))>
                            <div class="app-sidebar__children">
                                {group.items.iter().map(|&(key, icon_name)| {
                                    let label = tab_label_for_key(key);
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                ctx.active.with(|a| a.as_deref() == Some(key))
                                            }
                                            style:padding-left="10px"
                                            on:click=move |_| ctx.open_tab(key, label)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(groups: &[MenuGroup]) -> Vec<&'static str> {
        groups.iter().flat_map(|g| g.items.iter().map(|(k, _)| *k)).collect()
    }

    #[test]
    fn test_menu_follows_role() {
        let admin = keys(&groups_for_role(UserRole::Admin));
        assert!(admin.contains(&"sys_dealer_accounts"));
        assert!(admin.contains(&"p902_consumption_rate"));
        assert!(!admin.contains(&"a001_customer"));

        let staff = groups_for_role(UserRole::DealerStaff);
        assert!(staff.iter().all(|g| g.id != "administration"));
        let staff = keys(&staff);
        assert!(staff.contains(&"a001_customer"));
        assert!(staff.contains(&"a002_inventory"));
        assert!(!staff.contains(&"a003_promotion"));
    }

    #[test]
    fn test_every_menu_key_has_a_label() {
        for key in keys(&get_menu_groups()) {
            assert_ne!(tab_label_for_key(key), "Unknown page", "{key}");
            assert!(!roles_for_key(key).is_empty(), "{key}");
        }
    }
}
