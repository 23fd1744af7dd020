use crate::domain::a002_category::ui::details::CategoryDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::row_actions::{RowAction, RowActions};
use crate::shared::components::ui::StatusBadge;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a002_category::Category;
use contracts::domain::common::{today, EntityStore, RecordId, TextFilter};
use leptos::prelude::*;
use thaw::*;

#[derive(Clone, Debug, PartialEq)]
enum Editing {
    Closed,
    New,
    Existing(RecordId),
}

#[component]
#[allow(non_snake_case)]
pub fn CategoryList() -> impl IntoView {
    let store = RwSignal::new(EntityStore::<Category>::seeded());
    let query = RwSignal::new(String::new());
    let editing = RwSignal::new(Editing::Closed);

    let filtered = Memo::new(move |_| {
        let filter = TextFilter::new(query.get());
        store.with(|s| s.filtered(&filter))
    });

    let editing_record = move || match editing.get() {
        Editing::Existing(id) => store.with_untracked(|s| s.find(&id).cloned()),
        _ => None,
    };

    let handle_save = move |category: Category| {
        if let Editing::Existing(_) = editing.get_untracked() {
            let id = category.id.clone();
            match store.try_update(|s| s.update(category)) {
                Some(Ok(())) => log::info!("category {id} updated"),
                Some(Err(e)) => log::warn!("{e}"),
                None => {}
            }
        } else if let Some(id) = store.try_update(|s| s.add(category, today())) {
            log::info!("category {id} created");
        }
        editing.set(Editing::Closed);
    };

    let handle_toggle = move |id: RecordId| {
        if let Some(Err(e)) = store.try_update(|s| s.modify(&id, Category::toggle_active)) {
            log::warn!("{e}");
        }
    };

    // A category that still holds products stays in place.
    let handle_delete = move |id: RecordId| match store.try_update(|s| s.remove(&id)) {
        Some(Ok(removed)) => log::info!("category {} ({}) deleted", removed.id, removed.name),
        Some(Err(e)) => log::warn!("{e}"),
        None => {}
    };

    view! {
        <PageFrame page_id="a002_category--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Gestion des catégories"
                subtitle="Organisez vos produits en créant et en gérant des catégories."
            >
                <Button appearance=ButtonAppearance::Primary on_click=move |_| editing.set(Editing::New)>
                    {icon("plus")}
                    " Nouvelle catégorie"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="card">
                    <div class="card__toolbar">
                        <div class="search-box">
                            {icon("search")}
                            <Input value=query placeholder="Rechercher des catégories..." />
                        </div>
                    </div>

                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=180.0>"Nom"</TableHeaderCell>
                                <TableHeaderCell min_width=240.0>"Description"</TableHeaderCell>
                                <TableHeaderCell>"Produits"</TableHeaderCell>
                                <TableHeaderCell>"Statut"</TableHeaderCell>
                                <TableHeaderCell>"Créée le"</TableHeaderCell>
                                <TableHeaderCell min_width=60.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let rows = filtered.get();
                                if rows.is_empty() {
                                    return view! {
                                        <TableRow>
                                            <TableCell attr:colspan="6">
                                                <div class="table__empty">"Aucune catégorie trouvée."</div>
                                            </TableCell>
                                        </TableRow>
                                    }.into_any();
                                }
                                rows.into_iter().map(|category| {
                                    let id_for_edit = category.id.clone();
                                    let id_for_toggle = category.id.clone();
                                    let id_for_delete = category.id.clone();
                                    let toggle_label = if category.is_active { "Désactiver" } else { "Activer" };
                                    let actions = vec![
                                        RowAction::new("Editer", "edit", move || editing.set(Editing::Existing(id_for_edit.clone()))),
                                        RowAction::new(toggle_label, "power", move || handle_toggle(id_for_toggle.clone())),
                                        RowAction::new("Supprimer", "trash", move || handle_delete(id_for_delete.clone()))
                                            .danger()
                                            .disabled(!category.can_delete()),
                                    ];
                                    let name = category.name.clone();
                                    let description = category.description.clone();
                                    let product_count = category.product_count;
                                    let status_tone = category.status_tone();
                                    let status_label = category.status_label();
                                    let created_at = format_date(category.created_at);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class="cell-strong">{name}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{description}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{product_count}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <StatusBadge tone=status_tone label=status_label />
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{created_at}</TableCellLayout>
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
                <CategoryDetails
                    category=editing_record()
                    on_save=Callback::new(handle_save)
                    on_close=Callback::new(move |_| editing.set(Editing::Closed))
                />
            </Show>
        </PageFrame>
    }
}
