//! Frosted card container.

use leptos::prelude::*;

use super::StrokeIcon;

/// Translucent card used for page sections.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Card class="p-8">
///         <h2>"Our Mission"</h2>
///     </Card>
/// }
/// ```
#[component]
pub fn Card(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Card content.
    children: Children,
) -> impl IntoView {
    let classes = format!(
        "bg-white/80 backdrop-blur-sm rounded-2xl shadow-lg border border-wedding-blush/50 {class}"
    );

    view! {
        <div class=classes>
            {children()}
        </div>
    }
}

/// Card section with a gradient icon badge and heading.
#[component]
pub fn SectionCard(
    title: &'static str,
    /// Gradient classes for the badge and underline.
    gradient: &'static str,
    /// SVG path of the badge icon.
    icon: &'static str,
    children: Children,
) -> impl IntoView {
    let badge = format!(
        "w-14 h-14 rounded-2xl bg-gradient-to-r {gradient} flex items-center justify-center shadow-premium"
    );
    let underline = format!("h-1 w-20 bg-gradient-to-r {gradient} rounded-full");

    view! {
        <div class="glass-strong rounded-3xl shadow-premium-lg border border-rose/20 p-8 sm:p-12 \
                    hover:scale-[1.02] transition-all duration-500">
            <div class="flex items-start gap-4 mb-6">
                <div class=badge>
                    <StrokeIcon d=icon class="w-8 h-8 text-white" />
                </div>
                <div>
                    <h2 class="text-3xl sm:text-4xl font-bold text-foreground mb-2">{title}</h2>
                    <div class=underline></div>
                </div>
            </div>
            {children()}
        </div>
    }
}
