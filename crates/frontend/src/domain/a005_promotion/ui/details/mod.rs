use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use contracts::domain::a005_promotion::{
    DiscountKind, Promotion, PromotionDraft, PromotionStatus, PromotionType,
};
use contracts::domain::common::today;
use leptos::prelude::*;

#[component]
pub fn PromotionDetails(
    promotion: Option<Promotion>,
    on_save: Callback<Promotion>,
    on_close: Callback<()>,
) -> impl IntoView {
    let is_edit = promotion.is_some();
    let form = RwSignal::new(promotion.as_ref().map(PromotionDraft::from).unwrap_or_default());
    let existing = StoredValue::new(promotion);

    let is_valid = move || {
        existing.with_value(|p| form.with(|f| f.submit(p.as_ref(), today()).is_some()))
    };

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let record = existing.with_value(|p| form.with(|f| f.submit(p.as_ref(), today())));
        match record {
            Some(record) => on_save.run(record),
            None => log::debug!("promotion form submitted with missing title, discount or dates"),
        }
    };

    let title = if is_edit { "Modifier la promotion" } else { "Créer une nouvelle promotion" };

    view! {
        <ModalFrame title=title.to_string() on_close=on_close modal_class="modal--form">
            <form class="details-form" on:submit=handle_submit>
                <div class="form-group">
                    <label for="promotion_title">"Titre"</label>
                    <input
                        type="text"
                        id="promotion_title"
                        required
                        prop:value=move || form.get().title
                        on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                        placeholder="Soldes d'été"
                    />
                </div>

                <div class="form-group">
                    <label for="promotion_description">"Description"</label>
                    <textarea
                        id="promotion_description"
                        rows="2"
                        prop:value=move || form.get().description
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="promotion_type">"Type"</label>
                        <select
                            id="promotion_type"
                            prop:value=move || form.get().promotion_type.code()
                            on:change=move |ev| {
                                if let Some(t) = PromotionType::from_code(&event_target_value(&ev)) {
                                    form.update(|f| f.promotion_type = t);
                                }
                            }
                        >
                            {PromotionType::all()
                                .into_iter()
                                .map(|t| view! { <option value=t.code()>{t.display_name()}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="promotion_discount_kind">"Type de réduction"</label>
                        <select
                            id="promotion_discount_kind"
                            prop:value=move || form.get().discount_kind.code()
                            on:change=move |ev| {
                                if let Some(k) = DiscountKind::from_code(&event_target_value(&ev)) {
                                    form.update(|f| f.discount_kind = k);
                                }
                            }
                        >
                            {DiscountKind::all()
                                .into_iter()
                                .map(|k| view! { <option value=k.code()>{k.display_name()}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="promotion_discount_value">"Valeur"</label>
                        <input
                            type="number"
                            id="promotion_discount_value"
                            min="0"
                            step="0.01"
                            required
                            prop:value=move || form.get().discount_value
                            on:input=move |ev| form.update(|f| f.discount_value = event_target_value(&ev))
                        />
                    </div>
                </div>

                <Show when=move || form.with(|f| f.promotion_type == PromotionType::Code)>
                    <div class="form-group">
                        <label for="promotion_code">"Code promo"</label>
                        <input
                            type="text"
                            id="promotion_code"
                            prop:value=move || form.get().code
                            on:input=move |ev| form.update(|f| f.code = event_target_value(&ev))
                            placeholder="SUMMER25"
                        />
                    </div>
                </Show>

                <Show when=move || form.with(|f| f.promotion_type == PromotionType::Banner)>
                    <div class="form-group">
                        <label for="promotion_image">"URL de la bannière"</label>
                        <input
                            type="text"
                            id="promotion_image"
                            prop:value=move || form.get().image
                            on:input=move |ev| form.update(|f| f.image = event_target_value(&ev))
                            placeholder="Laisser vide pour une image par défaut"
                        />
                    </div>
                </Show>

                <div class="form-row">
                    <div class="form-group">
                        <label for="promotion_start">"Date de début"</label>
                        <input
                            type="date"
                            id="promotion_start"
                            required
                            prop:value=move || form.get().start_date
                            on:input=move |ev| form.update(|f| f.start_date = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="promotion_end">"Date de fin"</label>
                        <input
                            type="date"
                            id="promotion_end"
                            required
                            prop:value=move || form.get().end_date
                            on:input=move |ev| form.update(|f| f.end_date = event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="promotion_usage_limit">"Limite d'utilisation"</label>
                        <input
                            type="number"
                            id="promotion_usage_limit"
                            min="0"
                            step="1"
                            prop:value=move || form.get().usage_limit
                            on:input=move |ev| form.update(|f| f.usage_limit = event_target_value(&ev))
                            placeholder="Illimitée"
                        />
                    </div>
                    <div class="form-group">
                        <label for="promotion_min_order">"Commande minimum ($)"</label>
                        <input
                            type="number"
                            id="promotion_min_order"
                            min="0"
                            step="0.01"
                            prop:value=move || form.get().min_order_amount
                            on:input=move |ev| form.update(|f| f.min_order_amount = event_target_value(&ev))
                            placeholder="Aucun"
                        />
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="promotion_status">"Statut"</label>
                        <select
                            id="promotion_status"
                            prop:value=move || form.get().status.code()
                            on:change=move |ev| {
                                if let Some(s) = PromotionStatus::from_code(&event_target_value(&ev)) {
                                    form.update(|f| f.status = s);
                                }
                            }
                        >
                            {PromotionStatus::all()
                                .into_iter()
                                .map(|s| view! { <option value=s.code()>{s.display_name()}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    // Shortcut over the select: Active or Inactive.
                    <label class="form-check">
                        <input
                            type="checkbox"
                            prop:checked=move || form.get().is_active()
                            on:change=move |ev| form.update(|f| f.set_active(event_target_checked(&ev)))
                        />
                        " Activer immédiatement"
                    </label>
                </div>

                <div class="details-actions">
                    <button type="button" class="btn btn-secondary" on:click=move |_| on_close.run(())>
                        "Annuler"
                    </button>
                    <button type="submit" class="btn btn-primary" disabled=move || !is_valid()>
                        {icon("check")}
                        {if is_edit { " Mettre à jour" } else { " Créer la promotion" }}
                    </button>
                </div>
            </form>
        </ModalFrame>
    }
}
