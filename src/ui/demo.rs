//! Scripted chat demo widget.
//!
//! The server streams the conversation (see [`crate::demo::stream`]); this
//! module renders the phone frame it plays in and the HTML fragments it
//! swaps into it.

use leptos::prelude::*;

use super::components::{HeartIcon, SendIcon};
use super::render_html;
use crate::demo::Role;
use crate::demo::stream::{ACTIVE_EVENT, TRANSCRIPT_EVENT};

/// Three bouncing dots.
#[component]
fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="typing-indicator flex items-center gap-1 px-4 py-3" aria-label="Typing">
            <span class="w-2 h-2 rounded-full bg-wedding-salmon/60 animate-[bounce_1s_ease-in-out_0s_infinite]"></span>
            <span class="w-2 h-2 rounded-full bg-wedding-salmon/60 animate-[bounce_1s_ease-in-out_0.15s_infinite]"></span>
            <span class="w-2 h-2 rounded-full bg-wedding-salmon/60 animate-[bounce_1s_ease-in-out_0.3s_infinite]"></span>
        </div>
    }
}

/// One chat bubble. `None` text shows the typing indicator.
#[component]
pub fn ChatBubble(role: Role, text: Option<String>) -> impl IntoView {
    let (row, bubble) = if role.is_user() {
        (
            "flex justify-end",
            "bg-gradient-to-r from-wedding-coral to-wedding-salmon text-white rounded-br-md",
        )
    } else {
        (
            "flex justify-start",
            "bg-white text-gray-700 shadow-sm border border-wedding-blush/30 rounded-bl-md",
        )
    };
    let speaker = if role.is_user() { "user" } else { "bot" };
    let bubble = format!(
        "max-w-[80%] rounded-2xl px-4 py-2.5 text-sm leading-relaxed whitespace-pre-line {bubble}"
    );

    view! {
        <div class=row data-role=speaker>
            <div class=bubble>
                {match text {
                    Some(text) => text.into_any(),
                    None => view! { <TypingIndicator /> }.into_any(),
                }}
            </div>
        </div>
    }
}

/// Fragment for the active slot.
pub fn bubble_html(role: Role, text: Option<&str>) -> String {
    let text = text.map(str::to_string);
    render_html(move || view! { <ChatBubble role=role text=text /> })
}

/// Fragment for the transcript slot.
pub fn transcript_html(turns: &[(Role, String)]) -> String {
    let turns = turns.to_vec();
    render_html(move || {
        turns
            .into_iter()
            .map(|(role, text)| view! { <ChatBubble role=role text={Some(text)} /> })
            .collect_view()
    })
}

/// Phone-framed chat that plays the scripted conversation.
#[component]
pub fn ChatDemo(
    /// SSE endpoint driving the animation.
    #[prop(default = "/api/demo/stream")]
    stream_url: &'static str,
) -> impl IntoView {
    view! {
        <div class="w-full max-w-lg mx-auto" hx-ext="sse" sse-connect=stream_url>
            <div class="bg-white rounded-3xl shadow-2xl overflow-hidden border border-wedding-blush/40">
                <div class="bg-gradient-to-r from-wedding-coral via-wedding-rose to-wedding-salmon px-5 py-3.5 flex items-center gap-3">
                    <div class="w-9 h-9 rounded-full bg-white/20 flex items-center justify-center">
                        <HeartIcon />
                    </div>
                    <div>
                        <div class="text-white font-semibold text-sm">"AI Wedding Planner"</div>
                        <div class="text-white/70 text-xs">"Online now"</div>
                    </div>
                    <div class="ml-auto flex items-center gap-0.5">
                        <span class="w-2 h-2 rounded-full bg-green-300 animate-pulse"></span>
                    </div>
                </div>

                <div
                    id="demo-body"
                    class="h-80 overflow-y-auto px-4 py-4 flex flex-col gap-3 bg-gradient-to-b from-wedding-blush/10 to-white"
                    aria-live="polite"
                    aria-label="Chat demo"
                    x-data=""
                    x-on:htmx:sse-message.camel="$el.scrollTop = $el.scrollHeight"
                >
                    <div id="demo-transcript" class="flex flex-col gap-3" sse-swap=TRANSCRIPT_EVENT></div>
                    <div id="demo-active" sse-swap=ACTIVE_EVENT></div>
                </div>

                <div class="px-4 py-3 border-t border-wedding-blush/20 flex items-center gap-2 bg-white">
                    <div class="flex-1 bg-gray-50 rounded-full px-4 py-2 text-sm text-gray-400">
                        "Ask about your wedding..."
                    </div>
                    <button
                        class="w-9 h-9 rounded-full bg-gradient-to-r from-wedding-coral to-wedding-salmon flex items-center justify-center shrink-0"
                        tabindex="-1"
                        aria-hidden="true"
                    >
                        <SendIcon />
                    </button>
                </div>
            </div>
        </div>
    }
}
