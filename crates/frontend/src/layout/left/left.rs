use crate::layout::global_context::use_global_context;
use leptos::prelude::*;

#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_global_context();
    let is_collapsed = move || ctx.sidebar_collapsed.get();

    view! {
        <aside data-zone="left" class="app-sidebar" class:app-sidebar--collapsed=is_collapsed>
            {children()}
        </aside>
    }
}
