//! Timed playback of the demo, served as server-sent events.
//!
//! Every frame becomes one or more HTML swaps. The landing page connects with
//! the HTMX SSE extension and swaps each event into the element listening for
//! its name: `active` holds the bubble being typed, `transcript` holds the
//! finished messages. Closing the page closes the stream, which drops the
//! pending timer with it.

use std::convert::Infallible;
use std::time::Duration;

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use futures::{Stream, StreamExt};
use tokio::time::{Instant, sleep_until};
use tracing::info;

use super::script::{Role, Turn};
use super::timeline::{DemoTiming, Frame, Timeline};
use crate::AppState;
use crate::ui::demo::{bubble_html, transcript_html};

/// SSE event carrying the active bubble.
pub const ACTIVE_EVENT: &str = "active";
/// SSE event carrying the whole transcript.
pub const TRANSCRIPT_EVENT: &str = "transcript";

/// Plays a script in real time, forever.
///
/// Deadlines accumulate from the first frame so the per-character ticks do
/// not drift.
pub fn frames(script: &'static [Turn], timing: DemoTiming) -> impl Stream<Item = Frame> + Send {
    async_stream::stream! {
        let mut deadline = Instant::now();
        for step in Timeline::new(script, timing) {
            if !step.after.is_zero() {
                deadline += step.after;
                sleep_until(deadline).await;
            }
            yield step.frame;
        }
    }
}

/// An HTML fragment destined for one slot of the demo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swap {
    pub target: &'static str,
    pub html: String,
}

impl Swap {
    fn new(target: &'static str, html: String) -> Self {
        Self { target, html }
    }

    pub fn into_event(self) -> Event {
        Event::default().event(self.target).data(self.html)
    }
}

/// Client-side view of the demo, tracked on the server.
///
/// Frames only describe the active message, so the committed transcript is
/// accumulated here and re-sent whole whenever it changes.
#[derive(Debug, Default)]
pub struct DemoView {
    transcript: Vec<(Role, String)>,
}

impl DemoView {
    /// Swaps that bring the page from the previous frame to `frame`.
    pub fn apply(&mut self, frame: Frame) -> Vec<Swap> {
        match frame {
            Frame::Typing { role } => vec![Swap::new(ACTIVE_EVENT, bubble_html(role, None))],
            Frame::Partial { text, .. } if text.is_empty() => {
                vec![Swap::new(ACTIVE_EVENT, String::new())]
            }
            Frame::Partial { role, text } => {
                vec![Swap::new(ACTIVE_EVENT, bubble_html(role, Some(&text)))]
            }
            Frame::Commit { role, text } => {
                self.transcript.push((role, text));
                vec![
                    Swap::new(TRANSCRIPT_EVENT, transcript_html(&self.transcript)),
                    Swap::new(ACTIVE_EVENT, String::new()),
                ]
            }
            Frame::Reset => {
                self.transcript.clear();
                vec![
                    Swap::new(TRANSCRIPT_EVENT, String::new()),
                    Swap::new(ACTIVE_EVENT, String::new()),
                ]
            }
        }
    }
}

/// Logs when a demo stream is dropped.
struct StreamClosed {
    frames_sent: u64,
}

impl Drop for StreamClosed {
    fn drop(&mut self) {
        info!(
            name: "demo.stream.closed",
            frames_sent = self.frames_sent,
            "Demo stream closed"
        );
    }
}

/// GET /api/demo/stream - Scripted chat demo as SSE.
pub async fn demo_stream_handler(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>> + Send> {
    info!(name: "demo.stream.opened", "Demo stream opened");

    let timing = state.demo_timing;
    let stream = async_stream::stream! {
        let mut closed = StreamClosed { frames_sent: 0 };
        let mut view = DemoView::default();
        let frames = frames(super::CONVERSATION, timing);
        futures::pin_mut!(frames);

        while let Some(frame) = frames.next().await {
            closed.frames_sent += 1;
            for swap in view.apply(frame) {
                yield Ok::<Event, Infallible>(swap.into_event());
            }
        }
    };

    Sse::new(stream).keep_alive(KeepAlive::new().interval(Duration::from_secs(15)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHORT: &[Turn] = &[Turn {
        role: Role::Bot,
        text: "Ok",
    }];

    #[tokio::test(start_paused = true)]
    async fn frames_are_released_on_schedule() {
        let start = Instant::now();
        let frames = frames(SHORT, DemoTiming::default());
        futures::pin_mut!(frames);

        assert_eq!(frames.next().await, Some(Frame::Typing { role: Role::Bot }));
        assert_eq!(start.elapsed(), Duration::ZERO);

        let revealed = frames.next().await;
        assert!(matches!(revealed, Some(Frame::Partial { ref text, .. }) if text.is_empty()));
        assert_eq!(start.elapsed(), Duration::from_millis(1200));

        // "O", "Ok", then commit
        frames.next().await;
        frames.next().await;
        let commit = frames.next().await;
        assert!(matches!(commit, Some(Frame::Commit { .. })));
        assert_eq!(start.elapsed(), Duration::from_millis(1290));

        assert_eq!(frames.next().await, Some(Frame::Reset));
        assert_eq!(start.elapsed(), Duration::from_millis(1290 + 4800));
    }

    #[test]
    fn commit_resends_whole_transcript_and_clears_active() {
        let mut view = DemoView::default();
        view.apply(Frame::Commit {
            role: Role::User,
            text: "first".into(),
        });
        let swaps = view.apply(Frame::Commit {
            role: Role::Bot,
            text: "second".into(),
        });

        assert_eq!(swaps.len(), 2);
        assert_eq!(swaps[0].target, TRANSCRIPT_EVENT);
        assert!(swaps[0].html.contains("first"));
        assert!(swaps[0].html.contains("second"));
        assert_eq!(swaps[1], Swap::new(ACTIVE_EVENT, String::new()));
    }

    #[test]
    fn reset_clears_both_slots() {
        let mut view = DemoView::default();
        view.apply(Frame::Commit {
            role: Role::User,
            text: "hello".into(),
        });
        let swaps = view.apply(Frame::Reset);
        assert!(swaps.iter().all(|s| s.html.is_empty()));

        let after = view.apply(Frame::Commit {
            role: Role::Bot,
            text: "again".into(),
        });
        assert!(!after[0].html.contains("hello"));
    }

    #[test]
    fn typing_frame_renders_indicator_bubble() {
        let swaps = DemoView::default().apply(Frame::Typing { role: Role::User });
        assert_eq!(swaps[0].target, ACTIVE_EVENT);
        assert!(swaps[0].html.contains("typing-indicator"));
        assert!(swaps[0].html.contains("justify-end"));
    }
}
