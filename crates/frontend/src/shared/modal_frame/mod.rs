use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Close only when both press and release hit the overlay itself,
/// so a text selection that ends outside the surface keeps it open.
fn overlay_click_closes(pressed_on_overlay: bool, released_on_overlay: bool) -> bool {
    pressed_on_overlay && released_on_overlay
}

/// Overlay with a centered surface. The content draws its own header and actions.
#[component]
pub fn ModalFrame(
    /// Called on overlay click or Escape
    on_close: Callback<()>,
    /// Extra class for the surface (`div.modal`)
    #[prop(optional, into)]
    modal_class: Option<String>,
    /// Accessible name of the dialog
    #[prop(into)]
    aria_label: String,
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

    // Deferred: the overlay must not be removed during its own click dispatch
    let close_next_tick = move || {
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            on_close.run(());
        });
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close =
            overlay_click_closes(overlay_mouse_down.get(), is_direct_overlay_event(&ev));
        overlay_mouse_down.set(false);
        if should_close {
            close_next_tick();
        }
    };

    let escape_handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            close_next_tick();
        }
    });
    on_cleanup(move || escape_handle.remove());

    let surface_class = match modal_class {
        Some(cls) => format!("modal {cls}"),
        None => "modal".to_string(),
    };

    view! {
        <div
            class="modal-overlay"
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div
                class=surface_class
                role="dialog"
                aria-modal="true"
                aria-label=aria_label
                on:click=|ev: ev::MouseEvent| ev.stop_propagation()
            >
                {children()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_click_closes() {
        assert!(overlay_click_closes(true, true));
        // selection dragged out of the surface
        assert!(!overlay_click_closes(false, true));
        assert!(!overlay_click_closes(true, false));
    }
}
