use leptos::prelude::*;

/// Shell-wide UI state shared through context.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Sidebar shows icons only when collapsed.
    pub sidebar_collapsed: RwSignal<bool>,
    /// Unread notifications shown on the bell.
    pub unread_notifications: RwSignal<u32>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            sidebar_collapsed: RwSignal::new(false),
            unread_notifications: RwSignal::new(3),
        }
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_collapsed.update(|collapsed| *collapsed = !*collapsed);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}
