//! TopHeader component - application top bar.
//!
//! Contains the global search box, theme toggle, notification bell and the
//! admin user menu.

use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

const ADMIN_NAME: &str = "Admin User";
const ADMIN_EMAIL: &str = "admin@example.com";
const ADMIN_INITIALS: &str = "AD";

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let search = RwSignal::new(String::new());
    let menu_open = RwSignal::new(false);

    // The search box is not wired to any index.
    let on_search = move |ev: SubmitEvent| {
        ev.prevent_default();
        log::info!("global search submitted: {:?}", search.get_untracked());
    };

    view! {
        <header class="top-header">
            <form class="top-header__search" on:submit=on_search>
                {icon("search")}
                <input
                    type="search"
                    class="top-header__search-input"
                    placeholder="Rechercher..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
            </form>

            <div class="top-header__actions">
                <ThemeToggle />

                <button class="top-header__icon-btn" title="Notifications">
                    {icon("bell")}
                    <Show when=move || { ctx.unread_notifications.get() > 0 }>
                        <span class="top-header__counter">{move || ctx.unread_notifications.get()}</span>
                    </Show>
                </button>

                <div class="user-menu" on:mouseleave=move |_| menu_open.set(false)>
                    <button
                        class="user-menu__trigger"
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        <span class="avatar avatar--initials">{ADMIN_INITIALS}</span>
                    </button>
                    <Show when=move || menu_open.get()>
                        <div class="user-menu__dropdown">
                            <div class="user-menu__identity">
                                <div class="user-menu__name">{ADMIN_NAME}</div>
                                <div class="user-menu__email">{ADMIN_EMAIL}</div>
                            </div>
                            <div class="user-menu__separator"></div>
                            <button class="user-menu__item">{icon("user")}"Profil"</button>
                            <button class="user-menu__item">{icon("settings")}"Paramètres"</button>
                            <div class="user-menu__separator"></div>
                            <button class="user-menu__item">{icon("log-out")}"Déconnexion"</button>
                        </div>
                    </Show>
                </div>
            </div>
        </header>
    }
}
