use crate::shared::components::table::number_format::format_money;
use crate::shared::components::ui::StatusBadge;
use contracts::dashboards::d400_overview::RecentOrder;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn RecentOrders(orders: Vec<RecentOrder>) -> impl IntoView {
    view! {
        <Table>
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"Commande"</TableHeaderCell>
                    <TableHeaderCell>"Client"</TableHeaderCell>
                    <TableHeaderCell>"Montant"</TableHeaderCell>
                    <TableHeaderCell>"Statut"</TableHeaderCell>
                    <TableHeaderCell>"Date"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {orders
                    .into_iter()
                    .map(|o| view! {
                        <TableRow>
                            <TableCell><TableCellLayout>{o.id}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout>{o.customer}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout>{format_money(o.amount)}</TableCellLayout></TableCell>
                            <TableCell>
                                <TableCellLayout>
                                    <StatusBadge tone=o.status.tone() label=o.status.display_name() />
                                </TableCellLayout>
                            </TableCell>
                            <TableCell><TableCellLayout>{o.ago}</TableCellLayout></TableCell>
                        </TableRow>
                    })
                    .collect_view()}
            </TableBody>
        </Table>
    }
}
