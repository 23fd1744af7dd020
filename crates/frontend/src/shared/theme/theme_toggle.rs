use super::{use_theme, Theme};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Header button switching between light and dark.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();
    let next_label = move || format!("Thème {}", ctx.theme.get().toggled().display_name().to_lowercase());

    view! {
        <button
            class="top-header__icon-btn"
            on:click=move |_| ctx.toggle()
            title=next_label
        >
            {move || match ctx.theme.get() {
                Theme::Light => icon("moon"),
                Theme::Dark => icon("sun"),
            }}
        </button>
    }
}
