//! Reusable UI components.
//!
//! # Components
//!
//! - [`Button`], [`LinkButton`], [`NavigationButton`]: Buttons and button-styled links
//! - [`Card`], [`SectionCard`]: Frosted containers
//! - [`Logo`]: Amore wordmark
//! - [`Navigation`], [`Footer`]: Page chrome
//! - [`icons`]: SVG icon components

mod button;
mod card;
pub mod icons;
mod logo;
mod navigation;

pub use button::{Button, ButtonSize, ButtonVariant, LinkButton, NavigationButton};
pub use card::{Card, SectionCard};
pub use icons::{HeartIcon, QuoteIcon, SendIcon, StrokeIcon};
pub use logo::Logo;
pub use navigation::{Footer, Navigation};
