use contracts::shared::navigation::{path_for, resolve_view, ViewId};
use leptos::prelude::*;
use web_sys::window;

/// Application-wide UI state shared through context
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub current_view: RwSignal<ViewId>,
    pub left_open: RwSignal<bool>,
    /// Gate of the add-patient wizard, read at each step advance
    pub validation_enabled: RwSignal<bool>,
    pub add_patient_open: RwSignal<bool>,
    /// One-line message shown above the content area
    pub notice: RwSignal<Option<String>>,
}

fn current_pathname() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            current_view: RwSignal::new(resolve_view(&current_pathname())),
            left_open: RwSignal::new(true),
            validation_enabled: RwSignal::new(true),
            add_patient_open: RwSignal::new(false),
            notice: RwSignal::new(None),
        }
    }

    /// Keep `current_view` in sync with browser back/forward.
    pub fn init_router_integration(&self) {
        let this = *self;
        let _ = window_event_listener(leptos::ev::popstate, move |_| {
            let view = resolve_view(&current_pathname());
            log::debug!("popstate -> {:?}", view);
            this.current_view.set(view);
        });
    }

    /// Switch to `view` and push its canonical path onto the history stack.
    pub fn navigate(&self, view: ViewId) {
        if self.current_view.get_untracked() == view {
            return;
        }
        let path = path_for(view);
        if current_pathname() != path {
            if let Some(w) = window() {
                if let Ok(history) = w.history() {
                    let _ = history.push_state_with_url(
                        &wasm_bindgen::JsValue::NULL,
                        "",
                        Some(path),
                    );
                }
            }
        }
        log::debug!("navigate: {:?} ({})", view, path);
        self.current_view.set(view);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }

    pub fn open_add_patient(&self) {
        self.notice.set(None);
        self.add_patient_open.set(true);
    }

    pub fn close_add_patient(&self, notice: Option<String>) {
        self.add_patient_open.set(false);
        self.notice.set(notice);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}
