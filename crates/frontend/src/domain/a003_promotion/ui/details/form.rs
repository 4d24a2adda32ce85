use contracts::domain::a003_promotion::{
    CreatePromotionDto, DiscountType, Promotion, UpdatePromotionDto,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a003_promotion::api;
use crate::shared::components::modal_form::ModalForm;

/// Parses the discount input; accepts a comma as decimal separator.
fn parse_discount(value: &str) -> Result<f64, String> {
    value
        .trim()
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|_| "Discount value must be a number".to_string())
}

enum SaveRequest {
    Create(CreatePromotionDto),
    Update(UpdatePromotionDto),
}

fn optional(value: String) -> Option<String> {
    let value = value.trim().to_string();
    (!value.is_empty()).then_some(value)
}

/// Create form when `promotion` is `None`, edit form otherwise.
#[component]
pub fn PromotionForm<F1, F2>(
    #[prop(optional)] promotion: Option<Promotion>,
    on_close: F1,
    on_saved: F2,
) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let initial = promotion.as_ref().map(UpdatePromotionDto::from_promotion);
    let promotion_id = initial.as_ref().map(|dto| dto.promotion_id.clone());
    let is_edit = promotion_id.is_some();

    let name = RwSignal::new(initial.as_ref().map(|d| d.name.clone()).unwrap_or_default());
    let description = RwSignal::new(
        initial.as_ref().and_then(|d| d.description.clone()).unwrap_or_default(),
    );
    let discount_type = RwSignal::new(
        initial.as_ref().map(|d| d.discount_type).unwrap_or(DiscountType::Percentage),
    );
    let discount_value = RwSignal::new(
        initial.as_ref().map(|d| d.discount_value.to_string()).unwrap_or_default(),
    );
    let start_date = RwSignal::new(initial.as_ref().map(|d| d.start_date.clone()).unwrap_or_default());
    let end_date = RwSignal::new(initial.as_ref().map(|d| d.end_date.clone()).unwrap_or_default());
    let is_active = RwSignal::new(initial.as_ref().map(|d| d.is_active).unwrap_or(true));

    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_submit = move |_| {
        let value = match parse_discount(&discount_value.get_untracked()) {
            Ok(v) => v,
            Err(e) => {
                set_error.set(Some(e));
                return;
            }
        };

        let request = match promotion_id.clone() {
            Some(promotion_id) => {
                let dto = UpdatePromotionDto {
                    promotion_id,
                    name: name.get_untracked().trim().to_string(),
                    description: optional(description.get_untracked()),
                    discount_type: discount_type.get_untracked(),
                    discount_value: value,
                    start_date: start_date.get_untracked(),
                    end_date: end_date.get_untracked(),
                    is_active: is_active.get_untracked(),
                };
                dto.validate().map(|_| SaveRequest::Update(dto))
            }
            None => {
                let dto = CreatePromotionDto {
                    name: name.get_untracked().trim().to_string(),
                    description: optional(description.get_untracked()),
                    discount_type: discount_type.get_untracked(),
                    discount_value: value,
                    start_date: start_date.get_untracked(),
                    end_date: end_date.get_untracked(),
                };
                dto.validate().map(|_| SaveRequest::Create(dto))
            }
        };
        let request = match request {
            Ok(request) => request,
            Err(e) => {
                set_error.set(Some(e));
                return;
            }
        };

        set_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = match &request {
                SaveRequest::Create(dto) => api::create_promotion(dto).await,
                SaveRequest::Update(dto) => api::update_promotion(dto).await,
            };
            match result {
                Ok(message) => {
                    log::info!("Promotion saved: {}", message);
                    on_saved();
                }
                Err(e) => {
                    set_error.set(Some(format!("Could not save promotion: {}", e)));
                    set_saving.set(false);
                }
            }
        });
    };

    let (title, submit_label) = if is_edit {
        ("Edit promotion", "Save")
    } else {
        ("New promotion", "Create")
    };

    view! {
        <ModalForm
            title=title
            error=error
            saving=saving
            on_close=Callback::new(move |_| on_close())
            on_submit=Callback::new(on_submit)
            submit_label=submit_label
        >
            <div class="form__group">
                <Label>"Name"</Label>
                <Input value=name disabled=saving />
            </div>
            <div class="form__group">
                <Label>"Description"</Label>
                <Textarea value=description disabled=saving />
            </div>
            <div class="form__row">
                <div class="form__group">
                    <Label>"Discount type"</Label>
                    <select
                        class="form__select"
                        prop:value=move || discount_type.get().code()
                        on:change=move |ev| {
                            if let Some(t) = DiscountType::parse(&event_target_value(&ev)) {
                                discount_type.set(t);
                            }
                        }
                    >
                        <option value=DiscountType::Percentage.code()>{DiscountType::Percentage.label()}</option>
                        <option value=DiscountType::FixedAmount.code()>{DiscountType::FixedAmount.label()}</option>
                    </select>
                </div>
                <div class="form__group">
                    <Label>
                        {move || match discount_type.get() {
                            DiscountType::Percentage => "Discount (%)",
                            DiscountType::FixedAmount => "Discount (VND)",
                        }}
                    </Label>
                    <Input value=discount_value disabled=saving />
                </div>
            </div>
            <div class="form__row">
                <div class="form__group">
                    <Label>"Start date"</Label>
                    <Input value=start_date input_type=InputType::Date disabled=saving />
                </div>
                <div class="form__group">
                    <Label>"End date"</Label>
                    <Input value=end_date input_type=InputType::Date disabled=saving />
                </div>
            </div>
            <Show when=move || is_edit>
                <div class="form__group">
                    <Checkbox checked=is_active label="Active" />
                </div>
            </Show>
        </ModalForm>
    }
}

#[component]
pub fn DeletePromotionConfirm<F1, F2>(
    promotion: Promotion,
    on_close: F1,
    on_deleted: F2,
) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);
    let promotion_id = promotion.promotion_id.clone();

    let on_submit = move |_| {
        let promotion_id = promotion_id.clone();
        set_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::delete_promotion(promotion_id).await {
                Ok(_) => on_deleted(),
                Err(e) => {
                    set_error.set(Some(format!("Could not delete promotion: {}", e)));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <ModalForm
            title="Delete promotion"
            error=error
            saving=saving
            on_close=Callback::new(move |_| on_close())
            on_submit=Callback::new(on_submit)
            submit_label="Delete"
            danger=true
        >
            <p>{format!("Delete promotion \"{}\"? Dealers lose access to it.", promotion.display_name())}</p>
        </ModalForm>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_discount() {
        assert_eq!(parse_discount(" 12,5 "), Ok(12.5));
        assert_eq!(parse_discount("5000000"), Ok(5_000_000.0));
        assert!(parse_discount("ten").is_err());
    }
}
