use crate::domain::a003_order::ui::list::transition_icon;
use crate::shared::components::table::number_format::format_money;
use crate::shared::components::ui::StatusBadge;
use crate::shared::date_utils::{format_date, format_optional_date};
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use contracts::domain::a003_order::{Order, OrderStatus};
use leptos::prelude::*;

/// Read-only order sheet with the status actions of the current status.
#[component]
pub fn OrderDetails(
    #[prop(into)]
    order: Signal<Option<Order>>,
    on_transition: Callback<OrderStatus>,
    on_close: Callback<()>,
) -> impl IntoView {
    let title = Signal::derive(move || {
        order
            .with(|o| o.as_ref().map(|o| format!("Commande {}", o.id)))
            .unwrap_or_default()
    });

    view! {
        <ModalFrame title=title on_close=on_close modal_class="modal--wide">
            {move || order.get().map(|order| view! {
                <div class="order-details">
                    <div class="order-details__status">
                        <StatusBadge tone=order.status.tone() label=order.status.display_name() />
                        <span class="cell-muted">{format!("Passée le {}", format_date(order.order_date))}</span>
                    </div>

                    <div class="details-grid">
                        <section class="details-section">
                            <h3>"Client"</h3>
                            <p class="cell-strong">{order.customer_name.clone()}</p>
                            <p>{icon("mail")}" "{order.customer_email.clone()}</p>
                            <p>{icon("phone")}" "{order.customer_phone.clone()}</p>
                            <p>{icon("map-pin")}" "{order.shipping_address.clone()}</p>
                        </section>
                        <section class="details-section">
                            <h3>"Dates"</h3>
                            <p>"Commande : "{format_date(order.order_date)}</p>
                            <p>"Expédition : "{format_optional_date(order.shipped_date)}</p>
                            <p>"Livraison : "{format_optional_date(order.delivered_date)}</p>
                        </section>
                    </div>

                    <section class="details-section">
                        <h3>"Articles"</h3>
                        <table class="simple-table">
                            <thead>
                                <tr>
                                    <th>"Produit"</th>
                                    <th>"Quantité"</th>
                                    <th>"Prix"</th>
                                    <th>"Total"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {order.items.iter().map(|item| view! {
                                    <tr>
                                        <td>
                                            <div class="product-cell">
                                                <img class="product-cell__image" src=item.image.clone() alt=item.product_name.clone() />
                                                <span>{item.product_name.clone()}</span>
                                            </div>
                                        </td>
                                        <td>{item.quantity}</td>
                                        <td>{format_money(item.price)}</td>
                                        <td>{format_money(item.line_total())}</td>
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                        <div class="order-details__total">
                            <span>"Total"</span>
                            <span class="cell-strong">{format_money(order.total_amount)}</span>
                        </div>
                    </section>

                    <div class="details-actions">
                        {order.available_actions().iter().map(|target| {
                            let target = *target;
                            let class = if target == OrderStatus::Cancelled { "btn btn-danger" } else { "btn btn-primary" };
                            view! {
                                <button class=class on:click=move |_| on_transition.run(target)>
                                    {icon(transition_icon(target))}
                                    " "{target.action_label()}
                                </button>
                            }
                        }).collect_view()}
                    </div>
                </div>
            })}
        </ModalFrame>
    }
}
