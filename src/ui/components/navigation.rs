//! Site header and footer.

use leptos::prelude::*;

use super::{ButtonSize, ButtonVariant, LinkButton, Logo};

/// Sticky header with the logo and primary navigation.
#[component]
pub fn Navigation() -> impl IntoView {
    view! {
        <header class="backdrop-blur-sm bg-white/70 border-b border-wedding-blush/50 sticky top-0 z-50">
            <div class="max-w-7xl mx-auto px-6 py-5 flex items-center justify-between">
                <a href="/" class="cursor-pointer" aria-label="Amore home">
                    <Logo />
                </a>
                <nav class="flex gap-3" aria-label="Main">
                    <LinkButton href="/#how-it-works" variant=ButtonVariant::Outline size=ButtonSize::Sm>
                        "How it works"
                    </LinkButton>
                    <LinkButton href="/testimonials" variant=ButtonVariant::Outline size=ButtonSize::Sm>
                        "Testimonials"
                    </LinkButton>
                    <LinkButton href="/about" variant=ButtonVariant::Outline size=ButtonSize::Sm>
                        "About"
                    </LinkButton>
                    <LinkButton href="/chat" size=ButtonSize::Sm>
                        "Start Planning"
                    </LinkButton>
                </nav>
            </div>
        </header>
    }
}

/// Footer with the copyright line.
#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().format("%Y").to_string();

    view! {
        <footer class="relative z-10 glass-strong border-t border-rose/10 py-10 text-center">
            <div class="max-w-7xl mx-auto px-4">
                <div class="text-gray mb-3 font-medium">
                    {format!("© {year} Amore AI Wedding Planner")}
                </div>
                <div class="flex justify-center gap-8 text-sm text-gray-light mb-6">
                    <a href="#" class="hover:text-rose transition-colors duration-300">"Privacy"</a>
                    <a href="#" class="hover:text-purple transition-colors duration-300">"Terms"</a>
                    <a href="#" class="hover:text-amber transition-colors duration-300">"Contact"</a>
                </div>
                <p class="text-xs text-gray-lighter">
                    "Made with ❤️ for couples planning their special day"
                </p>
            </div>
        </footer>
    }
}
