use leptos::prelude::*;
use thaw::*;

/// Maps the colour names used by status enums to thaw badge colours.
pub fn badge_color(name: &str) -> BadgeColor {
    match name {
        "success" => BadgeColor::Success,
        "warning" => BadgeColor::Warning,
        "danger" => BadgeColor::Danger,
        "brand" => BadgeColor::Brand,
        "important" => BadgeColor::Important,
        "informative" => BadgeColor::Informative,
        _ => BadgeColor::Subtle,
    }
}

#[component]
pub fn StatusBadge(#[prop(into)] label: String, color: &'static str) -> impl IntoView {
    view! {
        <Badge appearance=BadgeAppearance::Tint color=badge_color(color)>
            {label}
        </Badge>
    }
}
