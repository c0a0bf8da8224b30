//! Scripted chat demo shown on the landing page.
//!
//! The demo replays a canned conversation: a typing indicator, then the
//! message revealed character by character, then a short pause before the
//! next turn. After the last turn the transcript is cleared and the script
//! starts over.
//!
//! - [`script`]: the canned turns
//! - [`timeline`]: the pure step sequence and its pacing
//! - [`stream`]: timed playback served as server-sent events

pub mod script;
pub mod stream;
pub mod timeline;

pub use script::{CONVERSATION, Role, Turn};
pub use stream::{DemoView, demo_stream_handler, frames};
pub use timeline::{DemoTiming, Frame, Step, Timeline};
