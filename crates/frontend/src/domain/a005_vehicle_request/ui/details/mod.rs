use contracts::domain::a005_vehicle_request::{RequestStatus, UpdateRequestStatusDto, VehicleRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a005_vehicle_request::api;
use crate::shared::components::modal_form::ModalForm;
use crate::shared::components::status_badge::StatusBadge;

/// Moves a request to one of its allowed next statuses.
#[component]
pub fn RequestStatusForm<F1, F2>(request: VehicleRequest, on_close: F1, on_updated: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let options = request.next_statuses();
    let next: RwSignal<Option<RequestStatus>> = RwSignal::new(options.first().copied());
    let note = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let current_label = request.status_label();
    let current_color = request.status_color();
    let summary = format!(
        "{} · {} {} × {}",
        request.dealer_name.as_deref().unwrap_or("-"),
        request.model_name.as_deref().unwrap_or("-"),
        request.variant_name.as_deref().unwrap_or_default(),
        request.units()
    );
    let title = format!("Request #{}", request.request_id);

    let on_submit = move |_| {
        let Some(status) = next.get_untracked() else {
            set_error.set(Some("This request cannot change status any more".to_string()));
            return;
        };
        let dto = match UpdateRequestStatusDto::for_request(&request, status, &note.get_untracked()) {
            Ok(dto) => dto,
            Err(e) => {
                set_error.set(Some(e));
                return;
            }
        };

        set_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::update_vehicle_request_status(&dto).await {
                Ok(_) => {
                    log::info!("Request {} moved to {}", dto.request_id, dto.status.code());
                    on_updated();
                }
                Err(e) => {
                    set_error.set(Some(format!("Could not update request: {}", e)));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <ModalForm
            title=title
            error=error
            saving=saving
            on_close=Callback::new(move |_| on_close())
            on_submit=Callback::new(on_submit)
            submit_label="Update status"
        >
            <p class="form__hint">{summary}</p>
            <div class="form__group">
                <Label>"Current status"</Label>
                <StatusBadge label=current_label color=current_color />
            </div>
            {if options.is_empty() {
                view! { <p class="form__hint">"No further status changes are possible."</p> }.into_any()
            } else {
                view! {
                    <div class="form__group">
                        <Label>"New status"</Label>
                        <select
                            class="form__select"
                            on:change=move |ev| next.set(RequestStatus::parse(&event_target_value(&ev)))
                        >
                            {options.iter().map(|s| view! {
                                <option value=s.code()>{s.label()}</option>
                            }).collect_view()}
                        </select>
                    </div>
                    <div class="form__group">
                        <Label>"Note"</Label>
                        <Textarea value=note placeholder="Optional note for the dealer" />
                    </div>
                }.into_any()
            }}
        </ModalForm>
    }
}
