use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use contracts::shared::navigation::ViewId;
use leptos::prelude::*;
use thaw::*;

/// Screen reserved for a view that has no content yet
#[component]
pub fn PlaceholderPage(view_id: ViewId, #[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="page">
            <PageHeader title=view_id.title() />
            <Card>
                <Flex vertical=true align=FlexAlign::Center gap=FlexGap::Medium>
                    <div class="placeholder__icon">{icon(view_id.icon())}</div>
                    <div class="placeholder__message">{message}</div>
                </Flex>
            </Card>
        </div>
    }
}
