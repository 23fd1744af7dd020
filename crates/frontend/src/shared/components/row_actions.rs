//! Per-row "..." action menu.

use crate::shared::icons::icon;
use leptos::prelude::*;

/// One entry of a [`RowActions`] menu.
#[derive(Clone)]
pub struct RowAction {
    pub label: String,
    pub icon: &'static str,
    pub danger: bool,
    /// Rendered greyed out; clicking it does nothing.
    pub disabled: bool,
    pub on_select: Callback<()>,
}

impl RowAction {
    pub fn new(label: impl Into<String>, icon: &'static str, on_select: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            label: label.into(),
            icon,
            danger: false,
            disabled: false,
            on_select: Callback::new(move |_| on_select()),
        }
    }

    pub fn danger(mut self) -> Self {
        self.danger = true;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

#[component]
pub fn RowActions(actions: Vec<RowAction>) -> impl IntoView {
    let open = RwSignal::new(false);
    let actions = StoredValue::new(actions);

    view! {
        <div class="row-actions" on:mouseleave=move |_| open.set(false)>
            <button
                class="row-actions__trigger"
                title="Actions"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                {icon("more-horizontal")}
            </button>
            <Show when=move || open.get()>
                <div class="row-actions__menu">
                    {actions.get_value().into_iter().map(|action| {
                        let on_select = action.on_select;
                        let disabled = action.disabled;
                        view! {
                            <button
                                class="row-actions__item"
                                class:row-actions__item--danger=action.danger
                                disabled=disabled
                                on:click=move |_| {
                                    if disabled {
                                        return;
                                    }
                                    open.set(false);
                                    on_select.run(());
                                }
                            >
                                {icon(action.icon)}
                                <span>{action.label}</span>
                            </button>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}
