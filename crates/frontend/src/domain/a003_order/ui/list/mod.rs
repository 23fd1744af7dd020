use crate::domain::a003_order::ui::details::OrderDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::row_actions::{RowAction, RowActions};
use crate::shared::components::table::number_format::format_money;
use crate::shared::components::ui::StatusBadge;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a003_order::{Order, OrderFilter, OrderStatus};
use contracts::domain::common::{today, Choice, EntityStore, RecordId, CHOICE_ALL};
use leptos::prelude::*;
use thaw::*;

/// Icon shown next to a transition in the row menu and the detail modal.
pub fn transition_icon(target: OrderStatus) -> &'static str {
    match target {
        OrderStatus::Pending => "calendar",
        OrderStatus::Shipped => "truck",
        OrderStatus::Delivered => "check-circle",
        OrderStatus::Cancelled => "x-circle",
    }
}

/// Apply a status change to the order held in `store`, logging the outcome.
pub fn apply_transition(store: RwSignal<EntityStore<Order>>, id: &RecordId, target: OrderStatus) {
    let outcome = store.try_update(|s| s.modify(id, |order| order.transition(target, today())));
    match outcome {
        Some(Ok(Ok(()))) => log::info!("order {id} -> {}", target.code()),
        Some(Ok(Err(e))) => log::warn!("order {id}: {e}"),
        Some(Err(e)) => log::warn!("{e}"),
        None => {}
    }
}

#[component]
#[allow(non_snake_case)]
pub fn OrderList() -> impl IntoView {
    let store = RwSignal::new(EntityStore::<Order>::seeded());
    let query = RwSignal::new(String::new());
    let status_choice = RwSignal::new(CHOICE_ALL.to_string());
    let selected = RwSignal::new(None::<RecordId>);

    let filtered = Memo::new(move |_| {
        let filter = OrderFilter {
            query: query.get(),
            status: Choice::parse(&status_choice.get(), OrderStatus::from_code),
        };
        store.with(|s| s.filtered(&filter))
    });

    // Live record, so the modal follows transitions made from inside it.
    let selected_order = Signal::derive(move || {
        selected
            .get()
            .and_then(|id| store.with(|s| s.find(&id).cloned()))
    });

    view! {
        <PageFrame page_id="a003_order--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Gestion de commande"
                subtitle="Suivez et gérez les commandes des clients, mettez à jour leur statut et consultez les détails des commandes."
            />

            <div class="page__content">
                <div class="card">
                    <div class="card__toolbar">
                        <div class="search-box">
                            {icon("search")}
                            <Input value=query placeholder="Recherche de commande..." />
                        </div>
                        <Select value=status_choice>
                            <option value=CHOICE_ALL>"Tous les statuts"</option>
                            {OrderStatus::all()
                                .into_iter()
                                .map(|s| view! { <option value=s.code()>{s.display_name()}</option> })
                                .collect_view()}
                        </Select>
                    </div>

                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Commande"</TableHeaderCell>
                                <TableHeaderCell min_width=200.0>"Client"</TableHeaderCell>
                                <TableHeaderCell>"Date"</TableHeaderCell>
                                <TableHeaderCell>"Articles"</TableHeaderCell>
                                <TableHeaderCell>"Total"</TableHeaderCell>
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
                                                <div class="table__empty">"Aucune commande trouvée."</div>
                                            </TableCell>
                                        </TableRow>
                                    }.into_any();
                                }
                                rows.into_iter().map(|order| {
                                    let id_for_view = order.id.clone();
                                    let mut actions = vec![RowAction::new("Voir détail", "eye", move || {
                                        selected.set(Some(id_for_view.clone()))
                                    })];
                                    for target in order.available_actions() {
                                        let target = *target;
                                        let id = order.id.clone();
                                        let action = RowAction::new(target.action_label(), transition_icon(target), move || {
                                            apply_transition(store, &id, target)
                                        });
                                        actions.push(if target == OrderStatus::Cancelled { action.danger() } else { action });
                                    }
                                    let order_id = order.id.to_string();
                                    let customer_name = order.customer_name.clone();
                                    let customer_email = order.customer_email.clone();
                                    let order_date = format_date(order.order_date);
                                    let item_count = order.item_count();
                                    let total_amount = format_money(order.total_amount);
                                    let status_tone = order.status.tone();
                                    let status_label = order.status.display_name();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class="cell-strong">{order_id}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <div>
                                                        <div>{customer_name}</div>
                                                        <div class="cell-muted">{customer_email}</div>
                                                    </div>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{order_date}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{item_count}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{total_amount}</TableCellLayout>
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

            <Show when=move || selected_order.with(Option::is_some)>
                <OrderDetails
                    order=selected_order
                    on_transition=Callback::new(move |target: OrderStatus| {
                        if let Some(id) = selected.get_untracked() {
                            apply_transition(store, &id, target);
                        }
                    })
                    on_close=Callback::new(move |_| selected.set(None))
                />
            </Show>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_transition_has_an_icon() {
        for status in OrderStatus::all() {
            assert!(!transition_icon(status).is_empty());
        }
        assert_eq!(transition_icon(OrderStatus::Shipped), "truck");
    }
}
