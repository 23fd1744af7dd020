use crate::domain::a004_user::ui::list::UserAvatar;
use crate::shared::components::table::number_format::format_money;
use crate::shared::components::ui::StatusBadge;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use contracts::domain::a004_user::User;
use leptos::prelude::*;

#[component]
pub fn UserDetails(
    #[prop(into)]
    user: Signal<Option<User>>,
    on_toggle_status: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <ModalFrame title="Détails du client".to_string() on_close=on_close modal_class="modal--wide">
            {move || user.get().map(|user| {
                let toggle_class = if user.is_banned() { "btn btn-primary" } else { "btn btn-danger" };
                let toggle_icon = if user.is_banned() { "check" } else { "ban" };
                view! {
                    <div class="user-details">
                        <div class="user-details__header">
                            <UserAvatar user=user.clone() />
                            <div>
                                <h3>{user.name.clone()}</h3>
                                <span class="cell-muted">{user.id.to_string()}</span>
                            </div>
                            <StatusBadge tone=user.status.tone() label=user.status.display_name() />
                        </div>

                        <div class="details-grid">
                            <section class="details-section">
                                <h3>"Contact"</h3>
                                <p>{icon("mail")}" "{user.email.clone()}</p>
                                <p>{icon("phone")}" "{user.phone.clone()}</p>
                                <p>{icon("map-pin")}" "{user.address.clone()}</p>
                            </section>
                            <section class="details-section">
                                <h3>"Activité"</h3>
                                <p>{icon("calendar")}" Inscrit le "{format_date(user.registration_date)}</p>
                                <p>{icon("calendar")}" Dernière connexion le "{format_date(user.last_login_date)}</p>
                                <p>{icon("shopping-cart")}" "{user.total_orders}" commandes"</p>
                                <p>{icon("dollar")}" "{format_money(user.total_spent)}" dépensés"</p>
                            </section>
                        </div>

                        <section class="details-section">
                            <h3>"Historique des commandes"</h3>
                            {if user.orders.is_empty() {
                                view! {
                                    <p class="table__empty">"Aucune commande trouvée pour cet utilisateur."</p>
                                }.into_any()
                            } else {
                                view! {
                                    <table class="simple-table">
                                        <thead>
                                            <tr>
                                                <th>"Commande"</th>
                                                <th>"Date"</th>
                                                <th>"Articles"</th>
                                                <th>"Total"</th>
                                                <th>"Statut"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {user.orders.iter().map(|o| view! {
                                                <tr>
                                                    <td>{o.id.to_string()}</td>
                                                    <td>{format_date(o.order_date)}</td>
                                                    <td>{o.item_count}</td>
                                                    <td>{format_money(o.total_amount)}</td>
                                                    <td><StatusBadge tone=o.status.tone() label=o.status.display_name() /></td>
                                                </tr>
                                            }).collect_view()}
                                        </tbody>
                                    </table>
                                }.into_any()
                            }}
                        </section>

                        <div class="details-actions">
                            <button class="btn btn-secondary" on:click=move |_| on_close.run(())>"Fermer"</button>
                            <button class=toggle_class on:click=move |_| on_toggle_status.run(())>
                                {icon(toggle_icon)}
                                " "{user.toggle_label()}
                            </button>
                        </div>
                    </div>
                }
            })}
        </ModalFrame>
    }
}
