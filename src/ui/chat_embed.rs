//! Mount point for the hosted chat widget.

use leptos::prelude::*;

use crate::widget::{CONTAINER_ID, WidgetMount};

/// Id of the hidden template holding the fallback message.
const FALLBACK_ID: &str = "chat-embed-fallback";

/// Static red message shown when the widget cannot be used.
#[component]
pub fn ChatUnavailable() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center h-full p-8" role="alert">
            <div class="text-center p-6 rounded-2xl bg-red-50 border border-red-200">
                <p class="text-red-600 font-semibold mb-2">"Unable to load chat interface"</p>
                <p class="text-red-500 text-sm">"Please check the configuration."</p>
            </div>
        </div>
    }
}

/// Module script that loads the vendor bundle and calls `createChat`.
///
/// A container already marked as mounted is left alone. Load or init
/// failures are logged and replace the container with the fallback message.
/// Widget nodes are removed on `pagehide`; a page restored from the
/// back/forward cache mounts again.
fn mount_script(script_url: &str, options_json: &str) -> String {
    let script_url = serde_json::to_string(script_url).unwrap_or_else(|_| "\"\"".to_string());
    format!(
        r#"
const container = document.getElementById('{CONTAINER_ID}');
const showFallback = () => {{
  const fallback = document.getElementById('{FALLBACK_ID}');
  if (container && fallback) container.innerHTML = fallback.innerHTML;
}};
const mount = () => {{
  if (!container || container.dataset.mounted === 'true') return;
  container.dataset.mounted = 'true';
  import({script_url})
    .then(({{ createChat }}) => createChat({options_json}))
    .catch((error) => {{
      console.error('Failed to initialize chat widget:', error);
      showFallback();
    }});
}};
const teardown = () => {{
  document.querySelectorAll('[id^="n8n-chat"]').forEach((el) => {{
    if (el === container) el.replaceChildren();
    else el.remove();
  }});
  if (container) delete container.dataset.mounted;
}};
window.addEventListener('pagehide', teardown);
window.addEventListener('pageshow', (event) => {{
  if (event.persisted) mount();
}});
mount();
"#
    )
}

/// The widget container, or the fallback message when the widget is
/// unavailable.
#[component]
pub fn ChatEmbed(mount: WidgetMount) -> impl IntoView {
    match mount {
        WidgetMount::Unavailable { .. } => view! { <ChatUnavailable /> }.into_any(),
        WidgetMount::Ready {
            options_json,
            script_url,
            style_url,
            ..
        } => {
            let script = mount_script(&script_url, &options_json);
            view! {
                <link rel="stylesheet" href=style_url />
                <div id=CONTAINER_ID class="w-full h-full"></div>
                <template id=FALLBACK_ID>
                    <ChatUnavailable />
                </template>
                <script type="module" inner_html=script></script>
            }
            .into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChatConfig;
    use crate::ui::render_html;

    fn mount(webhook_url: &str) -> WidgetMount {
        WidgetMount::resolve(&ChatConfig {
            webhook_url: webhook_url.to_string(),
            instance_id: None,
            initial_messages: vec!["Hi there! 👋".to_string()],
            allow_file_uploads: false,
            allowed_mime_types: String::new(),
            title: String::new(),
            subtitle: String::new(),
            enable_streaming: true,
            script_url: "https://cdn.test/chat.js".to_string(),
            style_url: "https://cdn.test/chat.css".to_string(),
        })
    }

    #[test]
    fn unavailable_renders_only_the_message() {
        let html = render_html(|| view! { <ChatEmbed mount=mount("not a url") /> });
        assert!(html.contains("Unable to load chat interface"));
        assert!(html.contains("Please check the configuration."));
        assert!(!html.contains("<script"));
        assert!(!html.contains("n8n-chat-container"));
    }

    #[test]
    fn ready_renders_container_and_options() {
        let html = render_html(|| view! { <ChatEmbed mount=mount("https://hooks.test/chat") /> });
        assert!(html.contains(r#"id="n8n-chat-container""#));
        assert!(html.contains("https://cdn.test/chat.css"));
        assert!(html.contains(r#"import("https://cdn.test/chat.js")"#));
        assert!(html.contains(r#""webhookUrl":"https://hooks.test/chat""#));
        assert!(html.contains("createChat({"));
        assert!(html.contains(r#"[id^="n8n-chat"]"#));
    }

    #[test]
    fn widget_is_torn_down_when_leaving_the_page() {
        let script = mount_script("https://cdn.test/chat.js", "{}");
        assert!(script.contains("window.addEventListener('pagehide', teardown)"));
        assert!(script.contains("event.persisted"));
        assert!(!script.contains("htmx:beforeSwap"));
    }
}
