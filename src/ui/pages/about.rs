use leptos::prelude::*;

use crate::content::{CAPABILITIES, MISSION, WHAT_WE_DO, WHY_CHOOSE_US};
use crate::ui::app::Document;
use crate::ui::components::icons::{ARROW_RIGHT, CHECK_CIRCLE, INFO, LIGHTBULB, STAR};
use crate::ui::components::{
    ButtonSize, ButtonVariant, Footer, LinkButton, Navigation, SectionCard, StrokeIcon,
};

const BODY_TEXT: &str = "text-gray text-lg sm:text-xl leading-relaxed";

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Document title="Amore - About">
            <Navigation />

            <main class="relative z-10 flex-1 px-4 sm:px-6 py-16 sm:py-24">
                <div class="max-w-5xl mx-auto">
                    <div class="text-center mb-16 sm:mb-20">
                        <div class="inline-flex items-center gap-2 px-4 py-2 rounded-full glass border \
                                    border-rose/20 mb-6 shadow-premium">
                            <StrokeIcon d=INFO class="w-5 h-5 text-rose" />
                            <span class="text-sm font-semibold text-gray">"About Us"</span>
                        </div>
                        <h1 class="text-6xl sm:text-7xl font-bold mb-6 leading-tight">
                            <span class="block bg-gradient-to-r from-rose via-purple to-amber bg-clip-text \
                                         text-transparent">
                                "Meet Amore"
                            </span>
                        </h1>
                        <p class="text-xl sm:text-2xl text-gray max-w-3xl mx-auto leading-relaxed">
                            "Your intelligent companion for planning the perfect wedding"
                        </p>
                    </div>

                    <div class="space-y-8 sm:space-y-10">
                        <SectionCard title="Our Mission" gradient="from-rose to-purple" icon=CHECK_CIRCLE>
                            <p class=BODY_TEXT>{MISSION}</p>
                        </SectionCard>

                        <SectionCard title="What We Do" gradient="from-purple to-amber" icon=LIGHTBULB>
                            <p class={format!("{BODY_TEXT} mb-8")}>{WHAT_WE_DO}</p>
                            <div class="grid grid-cols-1 sm:grid-cols-2 gap-5">
                                {CAPABILITIES
                                    .iter()
                                    .map(|c| {
                                        view! {
                                            <div class="capability flex items-start gap-4 p-5 rounded-2xl glass border \
                                                        border-rose/10 hover:border-rose/30 transition-all duration-300 group">
                                                <div class="text-rose group-hover:scale-110 transition-transform duration-300">
                                                    <StrokeIcon d={c.icon.path()} class="w-7 h-7" />
                                                </div>
                                                <div>
                                                    <h3 class="font-bold text-foreground mb-1">{c.title}</h3>
                                                    <p class="text-sm text-gray">{c.description}</p>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </SectionCard>

                        <SectionCard title="Why Choose Us" gradient="from-amber to-rose" icon=STAR>
                            {WHY_CHOOSE_US
                                .iter()
                                .map(|paragraph| view! { <p class={format!("{BODY_TEXT} mb-6 last:mb-0")}>{*paragraph}</p> })
                                .collect_view()}
                        </SectionCard>
                    </div>

                    <div class="mt-16 sm:mt-20 text-center glass-strong rounded-3xl p-10 sm:p-14 border \
                                border-rose/20 shadow-premium-lg">
                        <h2 class="text-4xl sm:text-5xl font-bold mb-6">
                            <span class="bg-gradient-to-r from-rose via-purple to-amber bg-clip-text text-transparent">
                                "Ready to Plan and Book?"
                            </span>
                        </h2>
                        <p class="text-gray text-lg mb-8 max-w-2xl mx-auto">
                            "Join thousands of couples who've planned their perfect wedding with Amore AI"
                        </p>
                        <LinkButton href="/chat" variant=ButtonVariant::Hero size=ButtonSize::Lg>
                            <span class="flex items-center gap-3">
                                "Plan and Book Now"
                                <StrokeIcon d=ARROW_RIGHT class="w-5 h-5" />
                            </span>
                        </LinkButton>
                    </div>
                </div>
            </main>

            <Footer />
        </Document>
    }
}
