use crate::domain::a004_user::ui::details::UserDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::row_actions::{RowAction, RowActions};
use crate::shared::components::table::number_format::format_money;
use crate::shared::components::ui::StatusBadge;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a004_user::{User, UserFilter, UserStatus};
use contracts::domain::common::{Choice, EntityStore, RecordId, CHOICE_ALL};
use leptos::prelude::*;
use thaw::*;

/// Round avatar: the picture when there is one, initials otherwise.
#[component]
pub fn UserAvatar(user: User) -> impl IntoView {
    let initials = user.initials();
    match user.avatar {
        Some(src) => view! { <img class="avatar" src=src alt=initials /> }.into_any(),
        None => view! { <span class="avatar avatar--initials">{initials}</span> }.into_any(),
    }
}

pub fn toggle_user_status(store: RwSignal<EntityStore<User>>, id: &RecordId) {
    match store.try_update(|s| s.modify(id, |u| {
        u.toggle_status();
        u.status
    })) {
        Some(Ok(status)) => log::info!("user {id} is now {}", status.code()),
        Some(Err(e)) => log::warn!("{e}"),
        None => {}
    }
}

#[component]
#[allow(non_snake_case)]
pub fn UserList() -> impl IntoView {
    let store = RwSignal::new(EntityStore::<User>::seeded());
    let query = RwSignal::new(String::new());
    let status_choice = RwSignal::new(CHOICE_ALL.to_string());
    let selected = RwSignal::new(None::<RecordId>);

    let filtered = Memo::new(move |_| {
        let filter = UserFilter {
            query: query.get(),
            status: Choice::parse(&status_choice.get(), UserStatus::from_code),
        };
        store.with(|s| s.filtered(&filter))
    });

    let selected_user = Signal::derive(move || {
        selected
            .get()
            .and_then(|id| store.with(|s| s.find(&id).cloned()))
    });

    view! {
        <PageFrame page_id="a004_user--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Gestion Client"
                subtitle="Gérer les comptes clients, consulter l'activité des utilisateurs et gérer le statut des comptes."
            />

            <div class="page__content">
                <div class="card">
                    <div class="card__toolbar">
                        <div class="search-box">
                            {icon("search")}
                            <Input value=query placeholder="Recherche client..." />
                        </div>
                        <Select value=status_choice>
                            <option value=CHOICE_ALL>"Tous les statuts"</option>
                            {UserStatus::all()
                                .into_iter()
                                .map(|s| view! { <option value=s.code()>{s.display_name()}</option> })
                                .collect_view()}
                        </Select>
                    </div>

                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=240.0>"Client"</TableHeaderCell>
                                <TableHeaderCell>"Inscription"</TableHeaderCell>
                                <TableHeaderCell>"Dernière connexion"</TableHeaderCell>
                                <TableHeaderCell>"Commandes"</TableHeaderCell>
                                <TableHeaderCell>"Total dépensé"</TableHeaderCell>
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
                                                <div class="table__empty">"Aucun client trouvé."</div>
                                            </TableCell>
                                        </TableRow>
                                    }.into_any();
                                }
                                rows.into_iter().map(|user| {
                                    let id_for_view = user.id.clone();
                                    let id_for_toggle = user.id.clone();
                                    let toggle = RowAction::new(user.toggle_label(), if user.is_banned() { "check" } else { "ban" }, move || {
                                        toggle_user_status(store, &id_for_toggle)
                                    });
                                    let actions = vec![
                                        RowAction::new("Voir détail", "eye", move || selected.set(Some(id_for_view.clone()))),
                                        if user.is_banned() { toggle } else { toggle.danger() },
                                    ];
                                    let user_name = user.name.clone();
                                    let user_email = user.email.clone();
                                    let registration_date = format_date(user.registration_date);
                                    let last_login_date = format_date(user.last_login_date);
                                    let total_orders = user.total_orders;
                                    let total_spent = format_money(user.total_spent);
                                    let status_tone = user.status.tone();
                                    let status_label = user.status.display_name();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <div class="user-cell">
                                                        <UserAvatar user=user.clone() />
                                                        <div>
                                                            <div class="cell-strong">{user_name}</div>
                                                            <div class="cell-muted">{user_email}</div>
                                                        </div>
                                                    </div>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{registration_date}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{last_login_date}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{total_orders}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{total_spent}</TableCellLayout>
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

            <Show when=move || selected_user.with(Option::is_some)>
                <UserDetails
                    user=selected_user
                    on_toggle_status=Callback::new(move |_| {
                        if let Some(id) = selected.get_untracked() {
                            toggle_user_status(store, &id);
                        }
                    })
                    on_close=Callback::new(move |_| selected.set(None))
                />
            </Show>
        </PageFrame>
    }
}
