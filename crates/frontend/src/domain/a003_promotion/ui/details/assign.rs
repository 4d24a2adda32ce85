use std::collections::BTreeSet;

use contracts::domain::a003_promotion::{AssignPromotionDto, Promotion};
use contracts::system::users::{known_dealers, DealerRef};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a003_promotion::api;
use crate::shared::components::modal_form::ModalForm;
use crate::system::users::api as users_api;

/// Dealer picker for a promotion. Dealers are collected from the dealer
/// accounts; names already on the promotion start checked.
#[component]
pub fn AssignDealersForm<F1, F2>(promotion: Promotion, on_close: F1, on_assigned: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let dealers: RwSignal<Vec<DealerRef>> = RwSignal::new(Vec::new());
    let selected: RwSignal<BTreeSet<String>> = RwSignal::new(BTreeSet::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let assigned_names = promotion.dealer_names.clone();
    spawn_local(async move {
        match users_api::fetch_dealer_accounts().await {
            Ok(accounts) => {
                let known = known_dealers(&accounts);
                selected.set(
                    known
                        .iter()
                        .filter(|d| assigned_names.contains(&d.dealer_name))
                        .map(|d| d.dealer_id.clone())
                        .collect(),
                );
                dealers.set(known);
            }
            Err(e) => set_error.set(Some(format!("Could not load dealers: {}", e))),
        }
        set_loading.set(false);
    });

    let promotion_id = promotion.promotion_id.clone();
    let on_submit = move |_| {
        let dto = AssignPromotionDto {
            promotion_id: promotion_id.clone(),
            dealer_ids: selected.get_untracked().into_iter().collect(),
        };
        if let Err(e) = dto.validate() {
            set_error.set(Some(e));
            return;
        }

        set_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::assign_promotion(&dto).await {
                Ok(_) => {
                    log::info!(
                        "Promotion {} assigned to {} dealers",
                        dto.promotion_id,
                        dto.dealer_ids.len()
                    );
                    on_assigned();
                }
                Err(e) => {
                    set_error.set(Some(format!("Could not assign dealers: {}", e)));
                    set_saving.set(false);
                }
            }
        });
    };

    let toggle = move |dealer_id: String, checked: bool| {
        selected.update(|s| {
            if checked {
                s.insert(dealer_id);
            } else {
                s.remove(&dealer_id);
            }
        });
    };

    view! {
        <ModalForm
            title=format!("Assign dealers: {}", promotion.display_name())
            error=error
            saving=Signal::derive(move || saving.get() || loading.get())
            on_close=Callback::new(move |_| on_close())
            on_submit=Callback::new(on_submit)
            submit_label="Assign"
        >
            {move || loading.get().then(|| view! { <p class="form__hint">"Loading dealers..."</p> })}
            {move || (!loading.get() && dealers.with(|d| d.is_empty())).then(|| view! {
                <p class="form__hint">"No dealers found."</p>
            })}
            <div class="checkbox-list">
                <For
                    each=move || dealers.get()
                    key=|d| d.dealer_id.clone()
                    children=move |dealer| {
                        let id_for_check = dealer.dealer_id.clone();
                        let id_for_toggle = dealer.dealer_id.clone();
                        view! {
                            <label class="checkbox-list__item">
                                <input
                                    type="checkbox"
                                    prop:checked=move || selected.with(|s| s.contains(&id_for_check))
                                    on:change=move |ev| toggle(id_for_toggle.clone(), event_target_checked(&ev))
                                />
                                {dealer.dealer_name.clone()}
                            </label>
                        }
                    }
                />
            </div>
        </ModalForm>
    }
}
