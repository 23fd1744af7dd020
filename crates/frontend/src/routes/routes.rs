use crate::dashboards::d400_overview::ui::OverviewDashboard;
use crate::domain::a001_product::ui::list::ProductList;
use crate::domain::a002_category::ui::list::CategoryList;
use crate::domain::a003_order::ui::list::OrderList;
use crate::domain::a004_user::ui::list::UserList;
use crate::domain::a005_promotion::ui::list::PromotionList;
use crate::layout::Shell;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

/// Sidebar entry: target path, label and icon name.
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { path: "/", label: "Tableau de bord", icon: "layout-dashboard" },
    NavItem { path: "/products", label: "Produits", icon: "package" },
    NavItem { path: "/categories", label: "Catégories", icon: "folder-tree" },
    NavItem { path: "/orders", label: "Commandes", icon: "shopping-cart" },
    NavItem { path: "/users", label: "Clients", icon: "users" },
    NavItem { path: "/promotions", label: "Promotions", icon: "megaphone" },
    // No page behind it yet; lands on the fallback.
    NavItem { path: "/settings", label: "Paramètres", icon: "settings" },
];

/// Whether `item_path` is the active entry for the current `pathname`.
pub fn is_active_path(item_path: &str, pathname: &str) -> bool {
    if item_path == "/" {
        pathname == "/"
    } else {
        pathname == item_path || pathname.starts_with(&format!("{item_path}/"))
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <PageFrame page_id="not_found--system" category=PAGE_CAT_SYSTEM>
            <div class="page__content not-found">
                {icon("alert-circle")}
                <h2>"Page introuvable"</h2>
                <p>"Cette page n'existe pas ou n'est pas encore disponible."</p>
                <A href="/">"Retour au tableau de bord"</A>
            </div>
        </PageFrame>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=OverviewDashboard />
                    <Route path=path!("/products") view=ProductList />
                    <Route path=path!("/categories") view=CategoryList />
                    <Route path=path!("/orders") view=OrderList />
                    <Route path=path!("/users") view=UserList />
                    <Route path=path!("/promotions") view=PromotionList />
                </Routes>
            </Shell>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_only_active_on_root() {
        assert!(is_active_path("/", "/"));
        assert!(!is_active_path("/", "/orders"));
    }

    #[test]
    fn test_section_matching() {
        assert!(is_active_path("/orders", "/orders"));
        assert!(is_active_path("/orders", "/orders/ORD-001"));
        assert!(!is_active_path("/orders", "/ordersx"));
    }

    #[test]
    fn test_every_nav_item_is_unique() {
        let mut paths: Vec<&str> = NAV_ITEMS.iter().map(|i| i.path).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), NAV_ITEMS.len());
    }
}
