//! SVG icon components.
//!
//! Icons are rendered inline as SVG elements so they pick up the
//! surrounding text colour.

use leptos::prelude::*;

use crate::content::FeatureIcon;

pub const LIGHTBULB: &str = "M9.663 17h4.673M12 3v1m6.364 1.636l-.707.707M21 12h-1M4 12H3m3.343-5.657l-.707-.707m2.828 9.9a5 5 0 117.072 0l-.548.547A3.374 3.374 0 0014 18.469V19a2 2 0 11-4 0v-.531c0-.895-.356-1.754-.988-2.386l-.548-.547z";
pub const DOLLAR: &str = "M12 8c-1.657 0-3 .895-3 2s1.343 2 3 2 3 .895 3 2-1.343 2-3 2m0-8c1.11 0 2.08.402 2.599 1M12 8V7m0 1v8m0 0v1m0-1c-1.11 0-2.08-.402-2.599-1M21 12a9 9 0 11-18 0 9 9 0 0118 0z";
pub const PEOPLE: &str = "M17 20h5v-2a3 3 0 00-5.356-1.857M17 20H7m10 0v-2c0-.656-.126-1.283-.356-1.857M7 20H2v-2a3 3 0 015.356-1.857M7 20v-2c0-.656.126-1.283.356-1.857m0 0a5.002 5.002 0 019.288 0M15 7a3 3 0 11-6 0 3 3 0 016 0zm6 3a2 2 0 11-4 0 2 2 0 014 0zM7 10a2 2 0 11-4 0 2 2 0 014 0z";
pub const CALENDAR: &str = "M8 7V3m8 4V3m-9 8h10M5 21h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v12a2 2 0 002 2z";
pub const INFO: &str = "M13 16h-1v-4h-1m1-4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z";
pub const CHECK_CIRCLE: &str = "M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z";
pub const STAR: &str = "M11.049 2.927c.3-.921 1.603-.921 1.902 0l1.519 4.674a1 1 0 00.95.69h4.915c.969 0 1.371 1.24.588 1.81l-3.976 2.888a1 1 0 00-.363 1.118l1.518 4.674c.3.922-.755 1.688-1.538 1.118l-3.976-2.888a1 1 0 00-1.176 0l-3.976 2.888c-.783.57-1.838-.197-1.538-1.118l1.518-4.674a1 1 0 00-.363-1.118l-3.976-2.888c-.784-.57-.38-1.81.588-1.81h4.914a1 1 0 00.951-.69l1.519-4.674z";
pub const ARROW_RIGHT: &str = "M13 7l5 5m0 0l-5 5m5-5H6";
pub const IMAGE: &str = "M4 16l4.586-4.586a2 2 0 012.828 0L16 16m-2-2l1.586-1.586a2 2 0 012.828 0L20 14m-6-6h.01M6 20h12a2 2 0 002-2V6a2 2 0 00-2-2H6a2 2 0 00-2 2v12a2 2 0 002 2z";

const QUOTE: &str = "M14.017 21v-7.391c0-5.704 3.731-9.57 8.983-10.609l.995 2.151c-2.432.917-3.995 3.638-3.995 5.849h4v10h-9.983zm-14.017 0v-7.391c0-5.704 3.748-9.57 9-10.609l.996 2.151c-2.433.917-3.996 3.638-3.996 5.849h3.983v10h-9.983z";
const HEART: &str = "M50 88 C50 88, 12 62, 12 38 C12 22, 24 12, 36 12 C44 12, 48 16, 50 22 C52 16, 56 12, 64 12 C76 12, 88 22, 88 38 C88 62, 50 88, 50 88Z";

impl FeatureIcon {
    /// SVG path drawn for this icon.
    pub fn path(self) -> &'static str {
        match self {
            Self::Lightbulb => LIGHTBULB,
            Self::Dollar => DOLLAR,
            Self::People => PEOPLE,
            Self::Calendar => CALENDAR,
        }
    }
}

/// Outline icon drawn from a single 24x24 path.
#[component]
pub fn StrokeIcon(
    /// Path data.
    d: &'static str,
    /// Additional CSS classes.
    #[prop(default = "w-6 h-6")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg class=class fill="none" stroke="currentColor" viewBox="0 0 24 24" aria-hidden="true">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=d />
        </svg>
    }
}

/// Filled quotation mark.
#[component]
pub fn QuoteIcon(#[prop(default = "")] class: &'static str) -> impl IntoView {
    view! {
        <svg class=class fill="currentColor" viewBox="0 0 24 24" aria-hidden="true">
            <path d=QUOTE />
        </svg>
    }
}

/// Heart used as the planner's avatar.
#[component]
pub fn HeartIcon(#[prop(default = "")] class: &'static str) -> impl IntoView {
    view! {
        <svg class=class width="20" height="20" viewBox="0 0 100 100" fill="none" aria-hidden="true">
            <path d=HEART fill="white" opacity="0.9" />
        </svg>
    }
}

/// Send/arrow-right icon.
#[component]
pub fn SendIcon(#[prop(default = "")] class: &'static str) -> impl IntoView {
    let classes = format!("h-4 w-4 {class}");

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="white"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=classes
            aria-hidden="true"
        >
            <line x1="22" y1="2" x2="11" y2="13" />
            <polygon points="22 2 15 22 11 13 2 9 22 2" />
        </svg>
    }
}
