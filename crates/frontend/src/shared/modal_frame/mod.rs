use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Close only when both press and release happened on the overlay itself, so
/// a text selection dragged out of the surface does not close the modal.
pub fn overlay_click_closes(pressed_on_overlay: bool, released_on_overlay: bool) -> bool {
    pressed_on_overlay && released_on_overlay
}

/// Run `on_close` on the next tick. Closing unmounts the modal, including the
/// element whose click handler is still running.
fn close_next_tick(on_close: Callback<()>) {
    spawn_local(async move {
        TimeoutFuture::new(0).await;
        on_close.run(());
    });
}

/// Modal frame container (overlay + positioned surface) with a title bar.
///
/// Forms and detail views render their own body and action row inside.
#[component]
pub fn ModalFrame(
    #[prop(into)]
    title: Signal<String>,
    /// Called when the modal should close (overlay click, close button).
    on_close: Callback<()>,
    /// Extra class for the modal surface (`div.modal`).
    #[prop(optional)]
    modal_class: &'static str,
    children: Children,
) -> impl IntoView {
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close =
            overlay_click_closes(overlay_mouse_down.get_untracked(), is_direct_overlay_event(&ev));
        overlay_mouse_down.set(false);
        if should_close {
            close_next_tick(on_close);
        }
    };

    let surface_class = if modal_class.is_empty() {
        "modal".to_string()
    } else {
        format!("modal {modal_class}")
    };

    view! {
        <div
            class="modal-overlay"
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div class=surface_class role="dialog" on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                <div class="modal__header">
                    <h2 class="modal__title">{move || title.get()}</h2>
                    <button class="modal__close" title="Fermer" on:click=move |_| close_next_tick(on_close)>
                        {crate::shared::icons::icon("x")}
                    </button>
                </div>
                <div class="modal__body">
                    {children()}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_closes_only_on_full_click() {
        assert!(overlay_click_closes(true, true));
        assert!(!overlay_click_closes(false, true));
        assert!(!overlay_click_closes(true, false));
        assert!(!overlay_click_closes(false, false));
    }
}
