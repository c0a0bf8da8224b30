//! Features / testimonials tab switcher.
//!
//! Both panels are rendered up front; Alpine.js flips between them. The
//! active tab rotates every [`ROTATE_PERIOD`] while a progress bar fills.
//! Clicking a tab selects it and restarts the period.

use std::time::Duration;

use leptos::prelude::*;

use super::components::StrokeIcon;
use crate::content::{FEATURES, TESTIMONIALS};

/// Time a tab stays selected before rotating.
pub const ROTATE_PERIOD: Duration = Duration::from_secs(7);

const ACTIVE_TAB: &str = "bg-gradient-to-r from-wedding-coral to-wedding-salmon text-white";
const INACTIVE_TAB: &str = "text-gray-600 hover:bg-wedding-blush/20";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Features,
    Testimonials,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Features, Tab::Testimonials];

    /// Identifier used by the client-side state.
    pub fn key(self) -> &'static str {
        match self {
            Self::Features => "features",
            Self::Testimonials => "testimonials",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Features => "Features",
            Self::Testimonials => "What Couples Say",
        }
    }

    /// Tab selected after this one.
    pub fn other(self) -> Self {
        match self {
            Self::Features => Self::Testimonials,
            Self::Testimonials => Self::Features,
        }
    }
}

/// Alpine component state: rotation is driven by the progress bar reaching 100%.
fn alpine_state(initial: Tab, period: Duration) -> String {
    let period_ms = period.as_millis();
    let next = Tab::ALL
        .iter()
        .map(|tab| format!("{}: '{}'", tab.key(), tab.other().key()))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "{{ tab: '{initial}', progress: 0, startedAt: 0, next: {{ {next} }}, \
         select(name) {{ this.tab = name; this.startedAt = performance.now(); this.progress = 0 }}, \
         tick() {{ const p = (performance.now() - this.startedAt) / {period_ms} * 100; \
         if (p >= 100) {{ this.select(this.next[this.tab]) }} else {{ this.progress = p }} \
         requestAnimationFrame(() => this.tick()) }} }}",
        initial = initial.key(),
    )
}

fn tab_class_binding(tab: Tab) -> String {
    format!(
        "tab === '{}' ? '{ACTIVE_TAB}' : '{INACTIVE_TAB}'",
        tab.key()
    )
}

#[component]
fn TabButton(tab: Tab, selected: bool) -> impl IntoView {
    let class = format!(
        "flex-1 py-4 px-6 font-semibold text-lg transition-all duration-200 {}",
        if selected { ACTIVE_TAB } else { INACTIVE_TAB }
    );
    let on_click = format!("select('{}')", tab.key());
    let class_binding = tab_class_binding(tab);

    view! {
        <button
            type="button"
            role="tab"
            class=class
            x-on:click=on_click
            x-bind:class=class_binding
        >
            {tab.label()}
        </button>
    }
}

#[component]
fn FeaturesPanel() -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
            {FEATURES
                .iter()
                .map(|feature| {
                    view! {
                        <div class="p-6 rounded-xl bg-white/50 border border-wedding-blush/30 hover:shadow-lg hover:scale-105 transition-all duration-200">
                            <div class="text-wedding-coral mb-4">
                                <StrokeIcon d={feature.icon.path()} class="w-12 h-12" />
                            </div>
                            <h3 class="text-xl font-bold text-gray-800 mb-2">{feature.title}</h3>
                            <p class="text-gray-600">{feature.description}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn TestimonialsPanel() -> impl IntoView {
    view! {
        <div class="space-y-6">
            {TESTIMONIALS
                .iter()
                .map(|t| {
                    view! {
                        <div class="p-6 rounded-xl bg-white/50 border border-wedding-blush/30 hover:shadow-lg transition-all duration-200">
                            <p class="text-gray-700 italic mb-4 text-lg">{format!("\"{}\"", t.quote)}</p>
                            <div class="text-sm">
                                <p class="font-semibold text-wedding-coral">{t.author}</p>
                                <p class="text-gray-500">{t.location}</p>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn FeaturesTestimonials() -> impl IntoView {
    let initial = Tab::Features;
    let state = alpine_state(initial, ROTATE_PERIOD);
    let features_shown = format!("tab === '{}'", Tab::Features.key());
    let testimonials_shown = format!("tab === '{}'", Tab::Testimonials.key());

    view! {
        <div class="w-full h-[600px] flex items-stretch">
            <div
                class="w-full bg-white/80 backdrop-blur-sm rounded-2xl shadow-lg border border-wedding-blush/50 flex flex-col overflow-hidden"
                x-data=state
                x-init="startedAt = performance.now(); tick()"
            >
                <div class="h-1 bg-gray-200 shrink-0">
                    <div
                        class="h-full bg-gradient-to-r from-wedding-coral to-wedding-salmon"
                        style="width: 0%; transition: none"
                        x-bind:style="{ width: progress + '%' }"
                    ></div>
                </div>

                <div class="flex border-b border-wedding-blush/50 shrink-0" role="tablist">
                    <TabButton tab=Tab::Features selected={initial == Tab::Features} />
                    <TabButton tab=Tab::Testimonials selected={initial == Tab::Testimonials} />
                </div>

                <div class="flex-1 overflow-y-auto p-8">
                    <div x-show=features_shown>
                        <FeaturesPanel />
                    </div>
                    <div x-show=testimonials_shown style="display: none">
                        <TestimonialsPanel />
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::render_html;

    #[test]
    fn tabs_alternate() {
        assert_eq!(Tab::Features.other(), Tab::Testimonials);
        assert_eq!(Tab::Features.other().other(), Tab::Features);
    }

    #[test]
    fn client_state_rotates_on_the_configured_period() {
        let state = alpine_state(Tab::Features, ROTATE_PERIOD);
        assert!(state.starts_with("{ tab: 'features'"));
        assert!(state.contains("/ 7000 * 100"));
    }

    #[test]
    fn client_rotation_follows_tab_order() {
        let state = alpine_state(Tab::Testimonials, ROTATE_PERIOD);
        assert!(state.starts_with("{ tab: 'testimonials'"));
        assert!(state.contains("next: { features: 'testimonials', testimonials: 'features' }"));
        assert!(state.contains("this.select(this.next[this.tab])"));
    }

    #[test]
    fn renders_both_panels_with_features_first() {
        let html = render_html(|| view! { <FeaturesTestimonials /> });
        assert!(html.contains("AI-Powered Planning"));
        assert!(html.contains("Sarah &amp; Michael"));
        assert!(html.contains("What Couples Say"));
        assert!(html.contains("display: none"));
        assert!(html.find("AI-Powered Planning") < html.find("Sarah &amp; Michael"));
    }
}
