//! Sidebar navigation with a collapse toggle.

use crate::layout::global_context::use_global_context;
use crate::routes::routes::{is_active_path, NAV_ITEMS};
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_global_context();
    let location = use_location();
    let is_collapsed = move || ctx.sidebar_collapsed.get();

    view! {
        <div class="app-sidebar__header">
            <Show when=move || !is_collapsed()>
                <span class="app-sidebar__title">"Administrateur"</span>
            </Show>
            <button
                class="app-sidebar__toggle"
                on:click=move |_| ctx.toggle_sidebar()
                title=move || if is_collapsed() { "Déplier le menu" } else { "Replier le menu" }
            >
                {move || if is_collapsed() { icon("chevron-right") } else { icon("chevron-left") }}
            </button>
        </div>

        <nav class="app-sidebar__content">
            {NAV_ITEMS.iter().map(|item| {
                let path = item.path;
                let label = item.label;
                let is_active = move || is_active_path(path, &location.pathname.get());
                view! {
                    <A href=path attr:title=label>
                        <div class="app-sidebar__item" class:app-sidebar__item--active=is_active>
                            <div class="app-sidebar__item-content">
                                {icon(item.icon)}
                                <Show when=move || !is_collapsed()>
                                    <span>{label}</span>
                                </Show>
                            </div>
                        </div>
                    </A>
                }
            }).collect_view()}
        </nav>
    }
}
