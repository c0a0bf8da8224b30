//! Pure timeline of the scripted chat demo.
//!
//! [`Timeline`] turns a script into an endless sequence of [`Step`]s. Each
//! step says how long to wait after the previous one and what the demo
//! should show next. No clocks are involved, so the pacing can be checked
//! without sleeping.

use std::time::Duration;

use super::script::{Role, Turn};

/// Pacing of the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoTiming {
    /// Typing indicator time before a bot message.
    pub bot_typing: Duration,
    /// Typing indicator time before a user message.
    pub user_typing: Duration,
    /// Delay between revealed characters.
    pub per_char: Duration,
    /// Pause after a message completes.
    pub between_messages: Duration,
    /// Pause after the last message, before the transcript is cleared.
    pub before_restart: Duration,
}

impl Default for DemoTiming {
    fn default() -> Self {
        Self {
            bot_typing: Duration::from_millis(1200),
            user_typing: Duration::from_millis(600),
            per_char: Duration::from_millis(30),
            between_messages: Duration::from_millis(800),
            before_restart: Duration::from_millis(4000),
        }
    }
}

impl DemoTiming {
    pub fn typing_delay(&self, role: Role) -> Duration {
        match role {
            Role::Bot => self.bot_typing,
            Role::User => self.user_typing,
        }
    }
}

/// What the demo shows at a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// Typing indicator bubble for the active message.
    Typing { role: Role },
    /// Active message with the first characters revealed. Empty text hides the bubble.
    Partial { role: Role, text: String },
    /// Active message finished; it moves into the transcript.
    Commit { role: Role, text: String },
    /// Transcript cleared, the script starts over.
    Reset,
}

/// A frame and the delay separating it from the previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub after: Duration,
    pub frame: Frame,
}

#[derive(Debug, Clone, Copy)]
enum Cursor {
    Typing { index: usize, after: Duration },
    Reveal { index: usize, shown: usize, after: Duration },
    Commit { index: usize },
    Reset,
}

/// Endless replay of a script.
#[derive(Debug, Clone)]
pub struct Timeline {
    script: &'static [Turn],
    timing: DemoTiming,
    cursor: Cursor,
}

impl Timeline {
    pub fn new(script: &'static [Turn], timing: DemoTiming) -> Self {
        Self {
            script,
            timing,
            cursor: Cursor::Typing {
                index: 0,
                after: Duration::ZERO,
            },
        }
    }
}

impl Iterator for Timeline {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.script.is_empty() {
            return None;
        }

        let (step, next) = match self.cursor {
            Cursor::Typing { index, after } => {
                let role = self.script[index].role;
                (
                    Step {
                        after,
                        frame: Frame::Typing { role },
                    },
                    Cursor::Reveal {
                        index,
                        shown: 0,
                        after: self.timing.typing_delay(role),
                    },
                )
            }
            Cursor::Reveal {
                index,
                shown,
                after,
            } => {
                let turn = self.script[index];
                let next = if shown >= turn.text.chars().count() {
                    Cursor::Commit { index }
                } else {
                    Cursor::Reveal {
                        index,
                        shown: shown + 1,
                        after: self.timing.per_char,
                    }
                };
                (
                    Step {
                        after,
                        frame: Frame::Partial {
                            role: turn.role,
                            text: char_prefix(turn.text, shown).to_string(),
                        },
                    },
                    next,
                )
            }
            Cursor::Commit { index } => {
                let turn = self.script[index];
                let next = if index + 1 < self.script.len() {
                    Cursor::Typing {
                        index: index + 1,
                        after: self.timing.between_messages,
                    }
                } else {
                    Cursor::Reset
                };
                (
                    Step {
                        after: self.timing.per_char,
                        frame: Frame::Commit {
                            role: turn.role,
                            text: turn.text.to_string(),
                        },
                    },
                    next,
                )
            }
            Cursor::Reset => (
                Step {
                    after: self.timing.between_messages + self.timing.before_restart,
                    frame: Frame::Reset,
                },
                Cursor::Typing {
                    index: 0,
                    after: Duration::ZERO,
                },
            ),
        };

        self.cursor = next;
        Some(step)
    }
}

/// First `n` characters of `text`.
fn char_prefix(text: &str, n: usize) -> &str {
    text.char_indices().nth(n).map_or(text, |(i, _)| &text[..i])
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHORT: &[Turn] = &[
        Turn {
            role: Role::User,
            text: "Hi",
        },
        Turn {
            role: Role::Bot,
            text: "Yo",
        },
    ];

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn replays_a_short_script_with_expected_pacing() {
        let steps: Vec<Step> = Timeline::new(SHORT, DemoTiming::default()).take(12).collect();

        let partial = |role, text: &str| Frame::Partial {
            role,
            text: text.to_string(),
        };
        let expected = vec![
            (ms(0), Frame::Typing { role: Role::User }),
            (ms(600), partial(Role::User, "")),
            (ms(30), partial(Role::User, "H")),
            (ms(30), partial(Role::User, "Hi")),
            (
                ms(30),
                Frame::Commit {
                    role: Role::User,
                    text: "Hi".into(),
                },
            ),
            (ms(800), Frame::Typing { role: Role::Bot }),
            (ms(1200), partial(Role::Bot, "")),
            (ms(30), partial(Role::Bot, "Y")),
            (ms(30), partial(Role::Bot, "Yo")),
            (
                ms(30),
                Frame::Commit {
                    role: Role::Bot,
                    text: "Yo".into(),
                },
            ),
            (ms(4800), Frame::Reset),
            (ms(0), Frame::Typing { role: Role::User }),
        ];

        let actual: Vec<(Duration, Frame)> =
            steps.into_iter().map(|s| (s.after, s.frame)).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn conversation_commits_every_turn_in_order_then_resets() {
        let script = super::super::CONVERSATION;
        let committed: Vec<(Role, String)> = Timeline::new(script, DemoTiming::default())
            .map(|s| s.frame)
            .take_while(|f| *f != Frame::Reset)
            .filter_map(|f| match f {
                Frame::Commit { role, text } => Some((role, text)),
                _ => None,
            })
            .collect();

        let expected: Vec<(Role, String)> = script
            .iter()
            .map(|t| (t.role, t.text.to_string()))
            .collect();
        assert_eq!(committed, expected);
    }

    #[test]
    fn reveals_multibyte_text_on_char_boundaries() {
        assert_eq!(char_prefix("🏖️ Venue", 1), "🏖");
        assert_eq!(char_prefix("abc", 5), "abc");
        assert_eq!(char_prefix("abc", 0), "");
    }

    #[test]
    fn empty_script_yields_nothing() {
        assert_eq!(Timeline::new(&[], DemoTiming::default()).next(), None);
    }
}
