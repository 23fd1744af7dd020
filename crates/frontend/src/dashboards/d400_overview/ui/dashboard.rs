use super::recent_orders::RecentOrders;
use super::sales_chart::SalesChart;
use super::top_products::TopProducts;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d400_overview;
use leptos::prelude::*;

/// Landing page: headline indicators, monthly sales, best sellers and the
/// latest orders. All figures are static sample data.
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let indicators = d400_overview::indicators();

    view! {
        <PageFrame page_id="d400_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Aperçu du tableau de bord" />

            <div class="page__content">
                <div class="stat-grid">
                    {indicators
                        .into_iter()
                        .map(|indicator| view! { <StatCard indicator=indicator /> })
                        .collect_view()}
                </div>

                <div class="dashboard-grid">
                    <section class="card dashboard-grid__wide">
                        <h2 class="card__title">"Aperçu des ventes"</h2>
                        <SalesChart data=d400_overview::monthly_sales() />
                    </section>
                    <section class="card">
                        <h2 class="card__title">"Meilleurs produits"</h2>
                        <TopProducts products=d400_overview::top_products() />
                    </section>
                </div>

                <section class="card">
                    <h2 class="card__title">"Commandes récentes"</h2>
                    <RecentOrders orders=d400_overview::recent_orders() />
                </section>
            </div>
        </PageFrame>
    }
}
