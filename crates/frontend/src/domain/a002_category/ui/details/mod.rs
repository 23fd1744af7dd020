use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use contracts::domain::a002_category::{Category, CategoryDraft};
use contracts::domain::common::today;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn CategoryDetails(
    category: Option<Category>,
    on_save: Callback<Category>,
    on_close: Callback<()>,
) -> impl IntoView {
    let is_edit = category.is_some();
    let form = RwSignal::new(category.as_ref().map(CategoryDraft::from).unwrap_or_default());
    let existing = StoredValue::new(category);

    // thaw Switch needs its own signal; mirrored into the draft.
    let active = RwSignal::new(form.get_untracked().is_active);
    Effect::new(move |_| {
        let value = active.get();
        form.update(|f| f.is_active = value);
    });

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let record = existing.with_value(|c| form.with(|f| f.submit(c.as_ref(), today())));
        match record {
            Some(record) => on_save.run(record),
            None => log::debug!("category form submitted without a name"),
        }
    };

    let title = if is_edit { "Modifier la catégorie" } else { "Créer une nouvelle catégorie" };

    view! {
        <ModalFrame title=title.to_string() on_close=on_close modal_class="modal--form">
            <form class="details-form" on:submit=handle_submit>
                <div class="form-group">
                    <label for="category_name">"Nom"</label>
                    <input
                        type="text"
                        id="category_name"
                        required
                        prop:value=move || form.get().name
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        placeholder="Nom de la catégorie"
                    />
                </div>

                <div class="form-group">
                    <label for="category_description">"Description"</label>
                    <textarea
                        id="category_description"
                        rows="3"
                        prop:value=move || form.get().description
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                        placeholder="Décrivez la catégorie"
                    />
                </div>

                <Switch checked=active label="Catégorie active" />

                <div class="details-actions">
                    <button type="button" class="btn btn-secondary" on:click=move |_| on_close.run(())>
                        "Annuler"
                    </button>
                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled=move || form.with(|f| f.name.trim().is_empty())
                    >
                        {icon("check")}
                        {if is_edit { " Enregistrer" } else { " Créer la catégorie" }}
                    </button>
                </div>
            </form>
        </ModalFrame>
    }
}
