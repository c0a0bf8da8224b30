//! Button and button-styled link.

use leptos::prelude::*;

/// Button visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Coral to salmon gradient, the main call to action.
    #[default]
    Primary,
    /// Rose, purple and amber gradient used on hero sections.
    Hero,
    /// Blush outline for secondary navigation.
    Outline,
}

impl ButtonVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Primary => {
                "bg-gradient-to-r from-wedding-coral to-wedding-salmon text-white \
                 hover:shadow-lg hover:scale-105"
            }
            Self::Hero => {
                "bg-gradient-to-r from-rose via-purple to-amber text-white shadow-premium-lg \
                 hover:scale-105"
            }
            Self::Outline => {
                "border border-wedding-blush text-gray-700 bg-white/60 \
                 hover:bg-wedding-blush/40 hover:text-wedding-coral"
            }
        }
    }
}

/// Button size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Navigation bar size.
    Sm,
    /// Medium button (default).
    #[default]
    Md,
    /// Call-to-action size.
    Lg,
}

impl ButtonSize {
    /// Get CSS classes for this size.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Sm => "h-9 px-4 text-sm",
            Self::Md => "h-11 px-6 text-base",
            Self::Lg => "px-12 py-4 text-lg",
        }
    }
}

const BASE_CLASSES: &str = "inline-flex items-center justify-center rounded-full font-semibold \
                            transition-all duration-200 focus-visible:outline-none \
                            focus-visible:ring-2 focus-visible:ring-wedding-coral \
                            focus-visible:ring-offset-2 disabled:opacity-50 \
                            disabled:cursor-not-allowed disabled:hover:scale-100";

fn classes(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    format!(
        "{BASE_CLASSES} {} {} {extra}",
        variant.classes(),
        size.classes()
    )
}

/// Form button.
///
/// `bind_disabled` and `bind_text` become Alpine `x-bind:disabled` and
/// `x-text` expressions evaluated against the enclosing `x-data`.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Button button_type="submit" disabled=true bind_disabled="!fileName">
///         "Upload Image"
///     </Button>
/// }
/// ```
#[component]
pub fn Button(
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    /// Whether the button starts out disabled.
    #[prop(default = false)]
    disabled: bool,
    #[prop(default = "button")] button_type: &'static str,
    #[prop(default = "")] class: &'static str,
    #[prop(optional)] bind_disabled: Option<&'static str>,
    #[prop(optional)] bind_text: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let classes = classes(variant, size, class);

    view! {
        <button
            type=button_type
            class=classes
            disabled=disabled
            x-bind:disabled=bind_disabled
            x-text=bind_text
        >
            {children()}
        </button>
    }
}

/// Anchor styled as a button.
#[component]
pub fn LinkButton(
    href: &'static str,
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(default = "")] class: &'static str,
    children: Children,
) -> impl IntoView {
    let classes = classes(variant, size, class);

    view! {
        <a href=href class=classes>
            {children()}
        </a>
    }
}

/// Button-like control that navigates to `to`.
///
/// Activates on click, Enter and Space, and announces its destination to
/// assistive technology.
#[component]
pub fn NavigationButton(to: &'static str, children: Children) -> impl IntoView {
    let label = format!("Navigate to {to}");

    view! {
        <a
            href=to
            role="button"
            aria-label=label
            x-data=""
            x-on:keydown.space.prevent="$el.click()"
            class="inline-flex items-center justify-center min-w-[44px] min-h-[44px] px-10 py-4 \
                   rounded-full bg-gradient-to-r from-wedding-pink to-wedding-cyan text-white \
                   font-semibold text-lg transition-all duration-200 hover:scale-105 \
                   hover:brightness-110 focus:outline-none focus:ring-2 focus:ring-wedding-cyan \
                   focus:ring-offset-2"
        >
            {children()}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::render_html;

    #[test]
    fn button_carries_variant_size_and_bindings() {
        let html = render_html(|| {
            view! {
                <Button
                    button_type="submit"
                    disabled=true
                    class="w-full"
                    bind_disabled="!fileName"
                    bind_text="busy ? 'Wait' : 'Go'"
                >
                    "Go"
                </Button>
            }
        });

        assert!(html.contains(r#"type="submit""#));
        assert!(html.contains("from-wedding-coral"));
        assert!(html.contains("h-11 px-6"));
        assert!(html.contains("w-full"));
        assert!(html.contains(r#"x-bind:disabled="!fileName""#));
        assert!(html.contains("x-text="));
    }

    #[test]
    fn bindings_are_omitted_when_unset() {
        let html = render_html(|| view! { <Button>"Go"</Button> });

        assert!(html.contains(r#"type="button""#));
        assert!(!html.contains("x-bind:disabled"));
        assert!(!html.contains("x-text"));
    }
}
