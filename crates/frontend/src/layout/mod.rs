pub mod center;
pub mod global_context;
pub mod left;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Application frame.
///
/// ```text
/// +------------------------------------------+
/// |  TopHeader (title, switch, add patient)  |
/// +-----------+------------------------------+
/// |  Sidebar  |  active view                 |
/// +-----------+------------------------------+
/// ```
///
/// `content` is re-run whenever the signals it reads change, so the caller
/// passes the view dispatch directly.
#[component]
pub fn Shell<L, C>(sidebar: L, content: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send + Sync,
{
    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <left::Left>{sidebar()}</left::Left>
                <main class="app-main">
                    <center::Center>{content}</center::Center>
                </main>
            </div>
        </div>
    }
}
