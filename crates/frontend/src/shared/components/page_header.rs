use leptos::prelude::*;

/// Title block of a page: heading, optional subtitle and action slot.
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,
    #[prop(optional, into)]
    subtitle: Option<String>,
    /// Buttons shown on the right (e.g. "Ajouter").
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page__header page-header">
            <div class="page-header__text">
                <h1 class="page-header__title">{title}</h1>
                {subtitle.map(|s| view! { <p class="page-header__subtitle">{s}</p> })}
            </div>
            <div class="page-header__actions">
                {children.map(|c| c())}
            </div>
        </div>
    }
}
