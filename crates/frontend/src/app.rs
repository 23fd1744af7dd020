use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::theme::ThemeProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Shell-level UI state (sidebar collapse). Entity data never goes here:
    // every list page owns its own store.
    provide_context(AppGlobalContext::new());

    view! {
        <ThemeProvider>
            <AppRoutes />
        </ThemeProvider>
    }
}
