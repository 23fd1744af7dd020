use crate::domain::a001_product::ui::details::ProductDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::row_actions::{RowAction, RowActions};
use crate::shared::components::table::number_format::format_money;
use crate::shared::components::ui::{Badge, StatusBadge};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_product::Product;
use contracts::domain::common::{today, EntityStore, RecordId, TextFilter};
use leptos::prelude::*;
use thaw::*;

/// Which product the form modal is open for.
#[derive(Clone, Debug, PartialEq)]
enum Editing {
    Closed,
    New,
    Existing(RecordId),
}

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let store = RwSignal::new(EntityStore::<Product>::seeded());
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

    let handle_save = move |product: Product| {
        match editing.get_untracked() {
            Editing::Existing(_) => {
                let id = product.id.clone();
                match store.try_update(|s| s.update(product)) {
                    Some(Ok(())) => log::info!("product {id} updated"),
                    Some(Err(e)) => log::warn!("{e}"),
                    None => {}
                }
            }
            _ => {
                if let Some(id) = store.try_update(|s| s.add(product, today())) {
                    log::info!("product {id} created");
                }
            }
        }
        editing.set(Editing::Closed);
    };

    let handle_delete = move |id: RecordId| match store.try_update(|s| s.remove(&id)) {
        Some(Ok(removed)) => log::info!("product {} ({}) deleted", removed.id, removed.title),
        Some(Err(e)) => log::warn!("{e}"),
        None => {}
    };

    view! {
        <PageFrame page_id="a001_product--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Gestion de produit"
                subtitle="Gérez les produits, les stocks et les prix de votre boutique."
            >
                <Button appearance=ButtonAppearance::Primary on_click=move |_| editing.set(Editing::New)>
                    {icon("plus")}
                    " Nouveau produit"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="card">
                    <div class="card__toolbar">
                        <div class="search-box">
                            {icon("search")}
                            <Input value=query placeholder="Rechercher des produits..." />
                        </div>
                    </div>

                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=260.0>"Produit"</TableHeaderCell>
                                <TableHeaderCell>"Catégorie"</TableHeaderCell>
                                <TableHeaderCell>"Prix"</TableHeaderCell>
                                <TableHeaderCell>"Stock"</TableHeaderCell>
                                <TableHeaderCell>"Note"</TableHeaderCell>
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
                                                <div class="table__empty">"Aucun produit trouvé."</div>
                                            </TableCell>
                                        </TableRow>
                                    }.into_any();
                                }
                                rows.into_iter().map(|product| {
                                    let level = product.stock_level();
                                    let id_for_edit = product.id.clone();
                                    let id_for_delete = product.id.clone();
                                    let actions = vec![
                                        RowAction::new("Editer", "edit", move || editing.set(Editing::Existing(id_for_edit.clone()))),
                                        RowAction::new("Supprimer", "trash", move || handle_delete(id_for_delete.clone())).danger(),
                                    ];
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <div class="product-cell">
                                                        <img class="product-cell__image" src=product.image.clone() alt=product.title.clone() />
                                                        <div>
                                                            <div class="product-cell__title">
                                                                {product.title.clone()}
                                                                {product.is_favorite.then(|| view! {
                                                                    <span class="favorite-star" title="Produit favori">{icon("star")}</span>
                                                                })}
                                                            </div>
                                                            <div class="product-cell__description">{product.description.clone()}</div>
                                                        </div>
                                                    </div>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Badge>{product.category.clone()}</Badge>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_money(product.price)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{product.stock}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class="rating">
                                                        <span class="favorite-star">{icon("star")}</span>
                                                        {format!("{:.1}", product.rating)}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <StatusBadge tone=level.tone() label=level.display_name() />
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
                <ProductDetails
                    product=editing_record()
                    on_save=Callback::new(handle_save)
                    on_close=Callback::new(move |_| editing.set(Editing::Closed))
                />
            </Show>
        </PageFrame>
    }
}
