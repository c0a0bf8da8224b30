use leptos::prelude::*;

use crate::content::TESTIMONIALS;
use crate::ui::app::Document;
use crate::ui::components::{Card, Footer, LinkButton, Navigation, QuoteIcon};
use crate::ui::components::{ButtonSize, ButtonVariant};

/// Full testimonials with the story behind each quote.
#[component]
pub fn TestimonialsPage() -> impl IntoView {
    view! {
        <Document title="Amore - What Couples Are Saying">
            <Navigation />

            <main class="relative z-10 flex-1 px-6 py-16">
                <div class="max-w-5xl mx-auto">
                    <div class="text-center mb-16">
                        <h1 class="text-5xl font-bold mb-4 text-white leading-tight drop-shadow-md">
                            "What Couples Are Saying"
                        </h1>
                        <p class="text-xl text-white/90 drop-shadow">
                            "Real stories from couples who planned their dream weddings with us"
                        </p>
                    </div>

                    <div class="space-y-8">
                        {TESTIMONIALS
                            .iter()
                            .map(|t| {
                                view! {
                                    <Card class="p-8 hover:shadow-xl transition-all duration-200">
                                        <article class="testimonial">
                                            <div class="mb-6">
                                                <QuoteIcon class="w-12 h-12 text-wedding-coral/30 mb-4" />
                                                <p class="text-2xl text-gray-800 italic mb-6">
                                                    {format!("\u{201c}{}\u{201d}", t.quote)}
                                                </p>
                                                <p class="text-gray-600 leading-relaxed">{t.details}</p>
                                            </div>
                                            <div class="border-t border-wedding-blush/30 pt-4">
                                                <p class="font-bold text-lg text-wedding-coral">{t.author}</p>
                                                <p class="text-gray-500">{t.location}</p>
                                            </div>
                                        </article>
                                    </Card>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="mt-16 text-center">
                        <h2 class="text-3xl font-bold text-white mb-6 drop-shadow-md">
                            "Ready to Plan Your Dream Wedding?"
                        </h2>
                        <LinkButton href="/chat" variant=ButtonVariant::Primary size=ButtonSize::Lg>
                            "Get Started Now"
                        </LinkButton>
                    </div>
                </div>
            </main>

            <Footer />
        </Document>
    }
}
