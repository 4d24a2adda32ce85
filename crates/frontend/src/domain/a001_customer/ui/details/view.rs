use leptos::prelude::*;
use thaw::*;

use super::view_model::CustomerFormViewModel;
use crate::shared::components::modal_form::ModalForm;

#[component]
pub fn CreateCustomerForm<F1, F2>(on_close: F1, on_created: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let vm = CustomerFormViewModel::new();
    let saving = vm.saving;

    view! {
        <ModalForm
            title="New customer"
            error=vm.error
            saving=saving
            on_close=Callback::new(move |_| on_close())
            on_submit=Callback::new(move |_| vm.save_command(on_created))
            submit_label="Create"
        >
            <div class="form__group">
                <Label>"Full name"</Label>
                <Input value=vm.full_name placeholder="Nguyen Van An" disabled=saving />
            </div>
            <div class="form__group">
                <Label>"Phone"</Label>
                <Input value=vm.phone input_type=InputType::Tel disabled=saving />
            </div>
            <div class="form__group">
                <Label>"Email"</Label>
                <Input value=vm.email input_type=InputType::Email disabled=saving />
            </div>
            <div class="form__group">
                <Label>"Address"</Label>
                <Input value=vm.address disabled=saving />
            </div>
            <div class="form__group">
                <Label>"ID number"</Label>
                <Input value=vm.id_number disabled=saving />
            </div>
        </ModalForm>
    }
}
