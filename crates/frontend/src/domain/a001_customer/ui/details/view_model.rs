use contracts::domain::a001_customer::CreateCustomerDto;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_customer::api;

/// ViewModel for the customer form
#[derive(Clone, Copy)]
pub struct CustomerFormViewModel {
    pub full_name: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub email: RwSignal<String>,
    pub address: RwSignal<String>,
    pub id_number: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl CustomerFormViewModel {
    pub fn new() -> Self {
        Self {
            full_name: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            address: RwSignal::new(String::new()),
            id_number: RwSignal::new(String::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn to_dto(&self) -> CreateCustomerDto {
        CreateCustomerDto::from_form(
            &self.full_name.get_untracked(),
            &self.phone.get_untracked(),
            &self.email.get_untracked(),
            &self.address.get_untracked(),
            &self.id_number.get_untracked(),
        )
    }

    /// Validates and posts the form; `on_saved` runs after the backend accepts it.
    pub fn save_command<F>(&self, on_saved: F)
    where
        F: Fn() + 'static,
    {
        let dto = self.to_dto();
        if let Err(e) = dto.validate() {
            self.error.set(Some(e));
            return;
        }

        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        error.set(None);
        spawn_local(async move {
            match api::create_customer(&dto).await {
                Ok(message) => {
                    log::info!("Customer created: {}", message);
                    on_saved();
                }
                Err(e) => {
                    error.set(Some(format!("Could not create customer: {}", e)));
                    saving.set(false);
                }
            }
        });
    }
}

impl Default for CustomerFormViewModel {
    fn default() -> Self {
        Self::new()
    }
}
