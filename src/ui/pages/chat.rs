use leptos::prelude::*;

use crate::ui::app::Document;
use crate::ui::chat_embed::ChatEmbed;
use crate::ui::components::Navigation;
use crate::widget::WidgetMount;

/// Navigation on top, the widget filling the rest of the viewport.
#[component]
pub fn ChatPage(mount: WidgetMount) -> impl IntoView {
    view! {
        <Document title="Amore - Plan with Amore" body_class="h-dvh flex flex-col bg-premium-gradient font-geist">
            <div class="shrink-0">
                <Navigation />
            </div>
            <main id="chat-main" class="flex-1 min-h-0 relative">
                <ChatEmbed mount=mount />
            </main>
        </Document>
    }
}
