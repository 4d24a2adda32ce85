use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Modal dialog with header, scrollable body and Cancel/Submit footer.
/// Clicking the overlay closes it unless a save is in flight.
#[component]
pub fn ModalForm(
    #[prop(into)]
    title: Signal<String>,
    /// Inline error shown above the fields
    #[prop(into)]
    error: Signal<Option<String>>,
    /// Disables the buttons while a request runs
    #[prop(into)]
    saving: Signal<bool>,
    on_close: Callback<()>,
    on_submit: Callback<()>,
    #[prop(optional, into)]
    submit_label: Option<String>,
    /// Destructive actions render the submit button in the danger style
    #[prop(optional)]
    danger: bool,
    children: Children,
) -> impl IntoView {
    let submit_label = submit_label.unwrap_or_else(|| "Save".to_string());
    let close = move || {
        if !saving.get_untracked() {
            on_close.run(());
        }
    };

    view! {
        <div class="modal-overlay" on:click=move |_| close()>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{move || title.get()}</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| close()>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                    {children()}
                </div>

                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| close()
                        disabled=saving
                    >
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        attr:class=if danger { "button--danger" } else { "" }
                        on_click=move |_| on_submit.run(())
                        disabled=saving
                    >
                        {move || if saving.get() { "Saving...".to_string() } else { submit_label.clone() }}
                    </Button>
                </div>
            </div>
        </div>
    }
}
