use crate::domain::a005_promotion::ui::details::PromotionDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::row_actions::{RowAction, RowActions};
use crate::shared::components::ui::{Badge, StatusBadge};
use crate::shared::date_utils::format_period;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a005_promotion::{Promotion, PromotionFilter, PromotionStatus, PromotionType};
use contracts::domain::common::{today, Choice, EntityStore, RecordId, CHOICE_ALL};
use leptos::prelude::*;
use thaw::*;

#[derive(Clone, Debug, PartialEq)]
enum Editing {
    Closed,
    New,
    Existing(RecordId),
}

pub fn type_icon(promotion_type: PromotionType) -> &'static str {
    match promotion_type {
        PromotionType::Banner => "image",
        PromotionType::Code => "tag",
        PromotionType::Sale => "megaphone",
    }
}

#[component]
#[allow(non_snake_case)]
pub fn PromotionList() -> impl IntoView {
    let store = RwSignal::new(EntityStore::<Promotion>::seeded());
    let query = RwSignal::new(String::new());
    let type_choice = RwSignal::new(CHOICE_ALL.to_string());
    let status_choice = RwSignal::new(CHOICE_ALL.to_string());
    let editing = RwSignal::new(Editing::Closed);

    let filtered = Memo::new(move |_| {
        let filter = PromotionFilter {
            query: query.get(),
            promotion_type: Choice::parse(&type_choice.get(), PromotionType::from_code),
            status: Choice::parse(&status_choice.get(), PromotionStatus::from_code),
        };
        store.with(|s| s.filtered(&filter))
    });

    let editing_record = move || match editing.get() {
        Editing::Existing(id) => store.with_untracked(|s| s.find(&id).cloned()),
        _ => None,
    };

    let handle_save = move |promotion: Promotion| {
        if let Editing::Existing(_) = editing.get_untracked() {
            let id = promotion.id.clone();
            match store.try_update(|s| s.update(promotion)) {
                Some(Ok(())) => log::info!("promotion {id} updated"),
                Some(Err(e)) => log::warn!("{e}"),
                None => {}
            }
        } else if let Some(id) = store.try_update(|s| s.add(promotion, today())) {
            log::info!("promotion {id} created");
        }
        editing.set(Editing::Closed);
    };

    let handle_toggle = move |id: RecordId| {
        match store.try_update(|s| s.modify(&id, |p| {
            p.toggle_status();
            p.status
        })) {
            Some(Ok(status)) => log::info!("promotion {id} is now {}", status.code()),
            Some(Err(e)) => log::warn!("{e}"),
            None => {}
        }
    };

    let handle_delete = move |id: RecordId| match store.try_update(|s| s.remove(&id)) {
        Some(Ok(removed)) => log::info!("promotion {} ({}) deleted", removed.id, removed.title),
        Some(Err(e)) => log::warn!("{e}"),
        None => {}
    };

    view! {
        <PageFrame page_id="a005_promotion--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Gestion des promotions"
                subtitle="Créez et gérez des campagnes promotionnelles, des codes de réduction et des bannières marketing."
            >
                <Button appearance=ButtonAppearance::Primary on_click=move |_| editing.set(Editing::New)>
                    {icon("plus")}
                    " Nouvelle promotion"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="card">
                    <div class="card__toolbar">
                        <div class="search-box">
                            {icon("search")}
                            <Input value=query placeholder="Rechercher des promotions..." />
                        </div>
                        <Select value=type_choice>
                            <option value=CHOICE_ALL>"Tous les types"</option>
                            {PromotionType::all()
                                .into_iter()
                                .map(|t| view! { <option value=t.code()>{t.display_name()}</option> })
                                .collect_view()}
                        </Select>
                        <Select value=status_choice>
                            <option value=CHOICE_ALL>"Tous les statuts"</option>
                            {PromotionStatus::all()
                                .into_iter()
                                .map(|s| view! { <option value=s.code()>{s.display_name()}</option> })
                                .collect_view()}
                        </Select>
                    </div>

                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=240.0>"Promotion"</TableHeaderCell>
                                <TableHeaderCell>"Type"</TableHeaderCell>
                                <TableHeaderCell>"Réduction"</TableHeaderCell>
                                <TableHeaderCell min_width=180.0>"Période"</TableHeaderCell>
                                <TableHeaderCell>"Utilisation"</TableHeaderCell>
                                <TableHeaderCell>"Statut"</TableHeaderCell>
                                <TableHeaderCell min_width=60.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let rows = filtered.get();
                                if rows.is_empty() {
                                    return view! {
                                        <TableRow>
                                            <TableCell attr:colspan="7">
                                                <div class="table__empty">"Aucune promotion trouvée."</div>
                                            </TableCell>
                                        </TableRow>
                                    }.into_any();
                                }
                                rows.into_iter().map(|promotion| {
                                    let promotion_type = promotion.promotion_type();
                                    let id_for_edit = promotion.id.clone();
                                    let id_for_toggle = promotion.id.clone();
                                    let id_for_delete = promotion.id.clone();
                                    let actions = vec![
                                        RowAction::new("Editer", "edit", move || editing.set(Editing::Existing(id_for_edit.clone()))),
                                        RowAction::new(promotion.toggle_label(), "power", move || handle_toggle(id_for_toggle.clone())),
                                        RowAction::new("Supprimer", "trash", move || handle_delete(id_for_delete.clone())).danger(),
                                    ];
                                    let title = promotion.title.clone();
                                    let description = promotion.description.clone();
                                    let code = promotion.kind.code().map(|code| code.to_string());
                                    let discount_label = promotion.discount.label();
                                    let period = format_period(promotion.start_date, promotion.end_date);
                                    let usage_label = promotion.usage_label();
                                    let status_tone = promotion.status.tone();
                                    let status_label = promotion.status.display_name();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <div>
                                                        <div class="cell-strong">{title}</div>
                                                        <div class="cell-muted">{description}</div>
                                                        {code.map(|code| view! {
                                                            <code class="promo-code">{code}</code>
                                                        })}
                                                    </div>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Badge>
                                                        {icon(type_icon(promotion_type))}
                                                        " "{promotion_type.display_name()}
                                                    </Badge>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{discount_label}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{period}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{usage_label}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <StatusBadge tone=status_tone label=status_label />
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <RowActions actions=actions />
                                            </TableCell>
                                        </TableRow>
                                    }
                                }).collect_view().into_any()
                            }}
                        </TableBody>
                    </Table>
                </div>
            </div>

            <Show when=move || editing.get() != Editing::Closed>
                <PromotionDetails
                    promotion=editing_record()
                    on_save=Callback::new(handle_save)
                    on_close=Callback::new(move |_| editing.set(Editing::Closed))
                />
            </Show>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_icons() {
        assert_eq!(type_icon(PromotionType::Banner), "image");
        assert_eq!(type_icon(PromotionType::Code), "tag");
        assert_eq!(type_icon(PromotionType::Sale), "megaphone");
    }
}
