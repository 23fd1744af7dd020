pub mod global_context;
pub mod left;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +-----------+------------------------------+
/// |           |          TopHeader           |
/// |  Sidebar  +------------------------------+
/// |  (Left)   |      routed page content     |
/// +-----------+------------------------------+
/// ```
///
/// The shell carries no entity state; pages own their data.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <left::Left>
                <left::Sidebar />
            </left::Left>

            <div class="app-body">
                <TopHeader />
                <main class="app-main">
                    {children()}
                </main>
            </div>
        </div>
    }
}
