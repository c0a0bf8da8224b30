use leptos::prelude::*;

use crate::content::HOW_IT_WORKS;
use crate::ui::app::Document;
use crate::ui::components::{Footer, Navigation, NavigationButton};
use crate::ui::demo::ChatDemo;
use crate::ui::features::FeaturesTestimonials;
use crate::ui::upload::ImageUpload;

/// Home page.
#[component]
pub fn LandingPage(
    /// `accept` attribute of the upload picker.
    accept: String,
    /// Upload size limit shown to visitors.
    max_size: String,
) -> impl IntoView {
    view! {
        <Document title="Amore - Plan Your Perfect Day">
            <Navigation />

            <main class="relative z-10 flex-1 flex flex-col items-center px-6 py-16">
                <section class="text-center max-w-5xl w-full">
                    <h1 class="text-6xl font-bold mb-12 bg-gradient-to-r from-rose via-purple to-amber \
                               bg-clip-text text-transparent leading-tight">
                        "Plan Your Perfect Day"
                    </h1>
                    <NavigationButton to="/chat">"Start Planning"</NavigationButton>
                </section>

                <section class="mt-16 w-full max-w-5xl grid grid-cols-1 lg:grid-cols-2 gap-10 items-start">
                    <ChatDemo />
                    <FeaturesTestimonials />
                </section>

                <section id="how-it-works" class="mt-24 w-full max-w-5xl scroll-mt-24">
                    <h2 class="text-4xl font-bold text-center mb-12 text-foreground">"How it works"</h2>
                    <ol class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-16">
                        {HOW_IT_WORKS
                            .iter()
                            .enumerate()
                            .map(|(i, step)| {
                                view! {
                                    <li class="glass rounded-2xl p-6 border border-rose/10 shadow-premium">
                                        <div class="w-10 h-10 rounded-full bg-gradient-to-r from-wedding-coral \
                                                    to-wedding-salmon text-white font-bold flex items-center \
                                                    justify-center mb-4">
                                            {i + 1}
                                        </div>
                                        <h3 class="font-bold text-lg text-foreground mb-2">{step.title}</h3>
                                        <p class="text-sm text-gray">{step.description}</p>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ol>
                    <ImageUpload accept=accept max_size=max_size />
                </section>
            </main>

            <Footer />
        </Document>
    }
}
