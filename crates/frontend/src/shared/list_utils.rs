//! Shared widgets for list pages: debounced search box, category drop-down,
//! sort indicators and match highlighting.

use contracts::shared::table_view::{SortDirection, SortState, ALL};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::shared::config::config;

/// Highlights case-insensitive occurrences of `filter` in `text`.
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let filter = filter.trim();
    if filter.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last = 0;
    for (start, end) in ranges {
        if start > last {
            parts.push(view! { <span>{text[last..start].to_string()}</span> }.into_any());
        }
        parts.push(view! { <mark class="search-hit">{text[start..end].to_string()}</mark> }.into_any());
        last = end;
    }
    if last < text.len() {
        parts.push(view! { <span>{text[last..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Byte ranges of non-overlapping matches. Texts whose lowercase form
/// changes length are not highlighted.
fn match_ranges(text: &str, filter: &str) -> Vec<(usize, usize)> {
    let text_lower = text.to_lowercase();
    let filter_lower = filter.to_lowercase();
    if text_lower.len() != text.len() || filter_lower.is_empty() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut from = 0;
    while let Some(pos) = text_lower[from..].find(&filter_lower) {
        let start = from + pos;
        let end = start + filter_lower.len();
        if !text.is_char_boundary(start) || !text.is_char_boundary(end) {
            break;
        }
        ranges.push((start, end));
        from = end;
    }
    ranges
}

/// Search box that reports its value after the configured debounce delay.
#[component]
pub fn SearchInput(
    /// Current filter value
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());
    let debounce_timeout = StoredValue::new(None::<i32>);
    let delay = config().ui.search_debounce_ms as i32;

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        let Some(window) = web_sys::window() else {
            on_change.run(new_value);
            return;
        };
        if let Some(timeout_id) = debounce_timeout.get_value() {
            window.clear_timeout_with_handle(timeout_id);
        }

        let closure = wasm_bindgen::closure::Closure::once(move || {
            on_change.run(new_value);
        });
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref::<js_sys::Function>(),
            delay,
        ) {
            Ok(timeout_id) => {
                closure.forget();
                debounce_timeout.set_value(Some(timeout_id));
            }
            Err(e) => log::warn!("setTimeout failed: {:?}", e),
        }
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    let clear_filter = move |_| {
        if let (Some(window), Some(timeout_id)) = (web_sys::window(), debounce_timeout.get_value()) {
            window.clear_timeout_with_handle(timeout_id);
        }
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input" class:search-input--active=is_filter_active>
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            {move || (!input_value.get().is_empty()).then(|| view! {
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            })}
        </div>
    }
}

/// `<select>` for one categorical filter; the first option ("All") sends `"all"`.
#[component]
pub fn CategoryFilter(
    #[prop(into)]
    label: String,
    /// Distinct values offered in the drop-down.
    #[prop(into)]
    options: Signal<Vec<String>>,
    /// Currently selected value, `"all"` when unset.
    #[prop(into)]
    selected: Signal<String>,
    on_change: Callback<String>,
    /// Maps a stored value to the text shown in the drop-down.
    #[prop(optional)]
    display: Option<fn(&str) -> String>,
) -> impl IntoView {
    let display = display.unwrap_or(|v: &str| v.to_string());

    view! {
        <label class="category-filter">
            <span class="category-filter__label">{label}</span>
            <select
                class="category-filter__select"
                prop:value=move || selected.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value=ALL>"All"</option>
                {move || options.get().into_iter().map(|value| {
                    let text = display(&value);
                    let is_selected = value == selected.get_untracked();
                    view! { <option value=value selected=is_selected>{text}</option> }
                }).collect_view()}
            </select>
        </label>
    }
}

/// Sort indicator for a column header.
pub fn get_sort_indicator(sort: Option<&SortState>, field: &str) -> &'static str {
    match sort {
        Some(s) if s.key == field => match s.direction {
            SortDirection::Asc => " ▲",
            SortDirection::Desc => " ▼",
        },
        _ => " ⇅",
    }
}

pub fn get_sort_class(sort: Option<&SortState>, field: &str) -> &'static str {
    match sort {
        Some(s) if s.key == field => "table__sort-indicator table__sort-indicator--active",
        _ => "table__sort-indicator",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indicator() {
        let sort = SortState::desc("qty");
        assert_eq!(get_sort_indicator(Some(&sort), "qty"), " ▼");
        assert_eq!(get_sort_indicator(Some(&SortState::asc("qty")), "qty"), " ▲");
        assert_eq!(get_sort_indicator(Some(&sort), "model"), " ⇅");
        assert_eq!(get_sort_indicator(None, "qty"), " ⇅");
        assert!(get_sort_class(Some(&sort), "qty").ends_with("--active"));
    }

    #[test]
    fn test_match_ranges() {
        assert_eq!(match_ranges("VinFast VF 8", "vf"), vec![(8, 10)]);
        assert_eq!(match_ranges("VinFast VF 8", "f"), vec![(3, 4), (9, 10)]);
        assert!(match_ranges("VF 8", "x").is_empty());
        assert!(match_ranges("VF 8", "").is_empty());
        // "İ" grows by a byte when lowercased, so byte offsets would not line up.
        assert!(match_ranges("İstanbul", "i").is_empty());
    }
}
