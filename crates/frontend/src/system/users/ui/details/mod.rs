//! Create / edit / delete dialogs for dealer accounts.

use contracts::system::auth::UserRole;
use contracts::system::users::{
    CreateDealerAccountDto, DealerAccount, DealerRef, UpdateDealerAccountDto,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::modal_form::ModalForm;
use crate::system::users::api;

fn optional(value: String) -> Option<String> {
    let value = value.trim().to_string();
    (!value.is_empty()).then_some(value)
}

#[component]
fn RoleSelect(role: RwSignal<UserRole>) -> impl IntoView {
    view! {
        <select
            class="form__select"
            prop:value=move || role.get().code()
            on:change=move |ev| {
                if let Some(r) = UserRole::parse(&event_target_value(&ev)) {
                    role.set(r);
                }
            }
        >
            {UserRole::ALL.iter().map(|r| view! {
                <option value=r.code()>{r.label()}</option>
            }).collect_view()}
        </select>
    }
}

#[component]
pub fn CreateDealerAccountForm<F1, F2>(
    dealers: Vec<DealerRef>,
    on_close: F1,
    on_created: F2,
) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let role = RwSignal::new(UserRole::DealerStaff);
    let dealer_id = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_submit = move |_| {
        let dto = CreateDealerAccountDto {
            full_name: full_name.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
            phone: optional(phone.get_untracked()),
            role: role.get_untracked(),
            dealer_id: if role.get_untracked().is_dealer() {
                optional(dealer_id.get_untracked())
            } else {
                None
            },
        };
        if let Err(e) = dto.validate() {
            set_error.set(Some(e));
            return;
        }

        set_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::create_dealer_account(&dto).await {
                Ok(_) => on_created(),
                Err(e) => {
                    set_error.set(Some(format!("Could not create account: {}", e)));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <ModalForm
            title="New dealer account"
            error=error
            saving=saving
            on_close=Callback::new(move |_| on_close())
            on_submit=Callback::new(on_submit)
            submit_label="Create"
        >
            <div class="form__group">
                <Label>"Full name"</Label>
                <Input value=full_name disabled=saving />
            </div>
            <div class="form__group">
                <Label>"Email"</Label>
                <Input value=email input_type=InputType::Email disabled=saving />
            </div>
            <div class="form__group">
                <Label>"Password"</Label>
                <Input value=password input_type=InputType::Password disabled=saving />
            </div>
            <div class="form__group">
                <Label>"Phone"</Label>
                <Input value=phone disabled=saving />
            </div>
            <div class="form__group">
                <Label>"Role"</Label>
                <RoleSelect role=role />
            </div>
            <Show when=move || role.get().is_dealer()>
                <div class="form__group">
                    <Label>"Dealer ID"</Label>
                    <input
                        class="form__input"
                        list="dealer-account-dealers"
                        prop:value=move || dealer_id.get()
                        on:input=move |ev| dealer_id.set(event_target_value(&ev))
                    />
                </div>
            </Show>
            <datalist id="dealer-account-dealers">
                {dealers.iter().map(|d| view! {
                    <option value=d.dealer_id.clone()>{d.dealer_name.clone()}</option>
                }).collect_view()}
            </datalist>
        </ModalForm>
    }
}

#[component]
pub fn EditDealerAccountForm<F1, F2>(account: DealerAccount, on_close: F1, on_saved: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let full_name = RwSignal::new(account.full_name.clone());
    let phone = RwSignal::new(account.phone.clone().unwrap_or_default());
    let role = RwSignal::new(account.role.unwrap_or(UserRole::DealerStaff));
    let is_active = RwSignal::new(account.is_active);
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let title = format!("Edit: {}", account.display_email());
    let account_id = account.account_id.clone();

    let on_submit = move |_| {
        if full_name.get_untracked().trim().is_empty() {
            set_error.set(Some("Full name is required".to_string()));
            return;
        }
        let dto = UpdateDealerAccountDto {
            account_id: account_id.clone(),
            full_name: full_name.get_untracked().trim().to_string(),
            phone: optional(phone.get_untracked()),
            role: role.get_untracked(),
            is_active: is_active.get_untracked(),
        };

        set_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::update_dealer_account(&dto).await {
                Ok(_) => on_saved(),
                Err(e) => {
                    set_error.set(Some(format!("Could not save account: {}", e)));
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
        >
            <div class="form__group">
                <Label>"Full name"</Label>
                <Input value=full_name disabled=saving />
            </div>
            <div class="form__group">
                <Label>"Phone"</Label>
                <Input value=phone disabled=saving />
            </div>
            <div class="form__group">
                <Label>"Role"</Label>
                <RoleSelect role=role />
            </div>
            <div class="form__group">
                <Checkbox checked=is_active label="Active" />
            </div>
        </ModalForm>
    }
}

#[component]
pub fn DeleteDealerAccountConfirm<F1, F2>(
    account: DealerAccount,
    on_close: F1,
    on_deleted: F2,
) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);
    let account_id = account.account_id.clone();

    let on_submit = move |_| {
        let account_id = account_id.clone();
        set_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::delete_dealer_account(account_id).await {
                Ok(_) => on_deleted(),
                Err(e) => {
                    set_error.set(Some(format!("Could not delete account: {}", e)));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <ModalForm
            title="Delete account"
            error=error
            saving=saving
            on_close=Callback::new(move |_| on_close())
            on_submit=Callback::new(on_submit)
            submit_label="Delete"
            danger=true
        >
            <p>{format!("Delete the account of {} ({})?", account.display_name(), account.display_email())}</p>
        </ModalForm>
    }
}
