use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use contracts::domain::a001_product::{Product, ProductDraft, PRODUCT_CATEGORIES};
use leptos::prelude::*;

/// Create/edit form for a product, shown in a modal.
///
/// `product` is `None` when creating. The draft is built once per mount, so
/// reopening the modal always starts from the record (or a blank form).
#[component]
pub fn ProductDetails(
    product: Option<Product>,
    on_save: Callback<Product>,
    on_close: Callback<()>,
) -> impl IntoView {
    let is_edit = product.is_some();
    let form = RwSignal::new(product.as_ref().map(ProductDraft::from).unwrap_or_default());
    let existing = StoredValue::new(product);

    let is_valid = move || {
        existing.with_value(|p| form.with(|f| f.submit(p.as_ref()).is_some()))
    };

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let record = existing.with_value(|p| form.with(|f| f.submit(p.as_ref())));
        match record {
            Some(record) => on_save.run(record),
            None => log::debug!("product form submitted with missing title, category or price"),
        }
    };

    let title = if is_edit { "Modifier le produit" } else { "Ajouter un nouveau produit" };

    view! {
        <ModalFrame title=title.to_string() on_close=on_close modal_class="modal--form">
            <form class="details-form" on:submit=handle_submit>
                <div class="form-group">
                    <label for="product_title">"Titre"</label>
                    <input
                        type="text"
                        id="product_title"
                        required
                        prop:value=move || form.get().title
                        on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                        placeholder="Nom du produit"
                    />
                </div>

                <div class="form-group">
                    <label for="product_description">"Description"</label>
                    <textarea
                        id="product_description"
                        rows="3"
                        prop:value=move || form.get().description
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                        placeholder="Description du produit"
                    />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="product_price">"Prix ($)"</label>
                        <input
                            type="number"
                            id="product_price"
                            min="0"
                            step="0.01"
                            required
                            prop:value=move || form.get().price
                            on:input=move |ev| form.update(|f| f.price = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="product_stock">"Stock"</label>
                        <input
                            type="number"
                            id="product_stock"
                            min="0"
                            step="1"
                            prop:value=move || form.get().stock
                            on:input=move |ev| form.update(|f| f.stock = event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="product_category">"Catégorie"</label>
                        <select
                            id="product_category"
                            required
                            prop:value=move || form.get().category
                            on:change=move |ev| form.update(|f| f.category = event_target_value(&ev))
                        >
                            <option value="">"Sélectionnez une catégorie"</option>
                            {PRODUCT_CATEGORIES
                                .iter()
                                .map(|c| view! { <option value=*c>{*c}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="product_rating">"Note (0-5)"</label>
                        <input
                            type="number"
                            id="product_rating"
                            min="0"
                            max="5"
                            step="0.1"
                            prop:value=move || form.get().rating
                            on:input=move |ev| form.update(|f| f.rating = event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label for="product_image">"URL de l'image"</label>
                    <input
                        type="text"
                        id="product_image"
                        prop:value=move || form.get().image
                        on:input=move |ev| form.update(|f| f.image = event_target_value(&ev))
                        placeholder="Laisser vide pour une image par défaut"
                    />
                </div>

                <label class="form-check">
                    <input
                        type="checkbox"
                        prop:checked=move || form.get().is_favorite
                        on:change=move |ev| form.update(|f| f.is_favorite = event_target_checked(&ev))
                    />
                    " Produit favori"
                </label>

                <div class="details-actions">
                    <button type="button" class="btn btn-secondary" on:click=move |_| on_close.run(())>
                        "Annuler"
                    </button>
                    <button type="submit" class="btn btn-primary" disabled=move || !is_valid()>
                        {icon("check")}
                        {if is_edit { " Mettre à jour le produit" } else { " Ajouter le produit" }}
                    </button>
                </div>
            </form>
        </ModalFrame>
    }
}
