use contracts::domain::a006_contract::{Contract, ContractStatus};
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::modal_form::ModalForm;
use crate::shared::components::table::format_vnd;

/// Picks the next status of a contract. `on_apply` performs the change and
/// returns the error to show, if any.
#[component]
pub fn ContractStatusForm<F1>(
    contract: Contract,
    on_close: F1,
    on_apply: Callback<ContractStatus, Result<(), String>>,
) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
{
    let options = contract.status.next_statuses();
    let next: RwSignal<Option<ContractStatus>> = RwSignal::new(options.first().copied());
    let (error, set_error) = signal::<Option<String>>(None);

    let on_submit = move |_| {
        let Some(status) = next.get_untracked() else {
            set_error.set(Some("The contract is closed".to_string()));
            return;
        };
        match on_apply.run(status) {
            Ok(()) => on_close(),
            Err(e) => set_error.set(Some(e)),
        }
    };

    view! {
        <ModalForm
            title=format!("Contract {}", contract.contract_id)
            error=error
            saving=false
            on_close=Callback::new(move |_| on_close())
            on_submit=Callback::new(on_submit)
            submit_label="Apply"
        >
            <dl class="details-list">
                <dt>"Customer"</dt>
                <dd>{contract.customer_name.clone()}</dd>
                <dt>"Vehicle"</dt>
                <dd>{format!("{} {}", contract.model_name, contract.variant_name)}</dd>
                <dt>"Total / remaining"</dt>
                <dd>{format!("{} / {}", format_vnd(contract.total_amount), format_vnd(contract.remaining()))}</dd>
                <dt>"Status"</dt>
                <dd>{contract.status.label()}</dd>
            </dl>
            <div class="form__group">
                <Label>"Move to"</Label>
                <select
                    class="form__select"
                    on:change=move |ev| {
                        let code = event_target_value(&ev);
                        next.set(ContractStatus::ALL.into_iter().find(|s| s.code() == code));
                    }
                >
                    {options.iter().map(|s| view! {
                        <option value=s.code()>{s.label()}</option>
                    }).collect_view()}
                </select>
            </div>
        </ModalForm>
    }
}
