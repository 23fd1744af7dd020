use contracts::dashboards::d400_overview::{sales_progress, TopProduct, TOP_PRODUCTS_MAX_SALES};
use leptos::prelude::*;

#[component]
pub fn TopProducts(products: Vec<TopProduct>) -> impl IntoView {
    view! {
        <ul class="top-products">
            {products
                .into_iter()
                .map(|p| {
                    let width = format!("width: {:.1}%", sales_progress(p.sales, TOP_PRODUCTS_MAX_SALES));
                    view! {
                        <li class="top-products__item">
                            <div class="top-products__row">
                                <span class="cell-strong">{p.name}</span>
                                <span>{p.revenue}</span>
                            </div>
                            <div class="cell-muted">{format!("{} ventes", p.sales)}</div>
                            <div class="progress">
                                <div class="progress__bar" style=width></div>
                            </div>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
