use contracts::domain::a008_feedback::Feedback;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::modal_form::ModalForm;

/// Reply form that closes a feedback item. `on_resolve` gets the response
/// text and returns the error to show, if any.
#[component]
pub fn ResolveFeedbackForm<F1>(
    feedback: Feedback,
    on_close: F1,
    on_resolve: Callback<String, Result<(), String>>,
) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
{
    let response = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let on_submit = move |_| match on_resolve.run(response.get_untracked()) {
        Ok(()) => on_close(),
        Err(e) => set_error.set(Some(e)),
    };

    view! {
        <ModalForm
            title=format!("{}: {}", feedback.feedback_id, feedback.subject)
            error=error
            saving=false
            on_close=Callback::new(move |_| on_close())
            on_submit=Callback::new(on_submit)
            submit_label="Resolve"
        >
            <p class="form__hint">{format!("{} ({})", feedback.customer_name, feedback.kind.label())}</p>
            <blockquote class="feedback__content">{feedback.content.clone()}</blockquote>
            <div class="form__group">
                <Label>"Response"</Label>
                <Textarea value=response placeholder="What was done for the customer" />
            </div>
        </ModalForm>
    }
}
