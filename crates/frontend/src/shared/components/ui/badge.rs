use contracts::domain::common::StatusTone;
use leptos::prelude::*;

/// CSS class of a badge with the given tone.
pub fn badge_class(tone: StatusTone) -> String {
    format!("badge badge--{}", tone.as_str())
}

/// Neutral outline badge (category, type).
#[component]
pub fn Badge(children: Children) -> impl IntoView {
    view! { <span class="badge badge--outline">{children()}</span> }
}

/// Coloured status badge.
#[component]
pub fn StatusBadge(
    tone: StatusTone,
    #[prop(into)]
    label: String,
) -> impl IntoView {
    view! { <span class=badge_class(tone)>{label}</span> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_class_per_tone() {
        assert_eq!(badge_class(StatusTone::Success), "badge badge--success");
        assert_eq!(badge_class(StatusTone::Error), "badge badge--error");
        assert_eq!(badge_class(StatusTone::Neutral), "badge badge--neutral");
    }
}
