use dioxus::prelude::*;
use dioxus::core::Task;
#[cfg(target_arch = "wasm32")]
use gloo_timers::future::TimeoutFuture;

pub const TAGLINE_PHRASES: &[&str] = &[
    "Software Engineering Student",
    "Full-Stack Developer",
    "Problem Solver",
    "Database Enthusiast",
];

const TYPE_DELAY_MS: u32 = 100;
const DELETE_DELAY_MS: u32 = 50;
const HOLD_DELAY_MS: u32 = 2000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TypingState {
    phrase: usize,
    shown: usize,
    deleting: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    pub delay_ms: u32,
}

impl TypingState {
    // One tick: grow or shrink by one character and report how long to wait
    // before the next tick. Wraps to the first phrase after the last.
    pub fn advance(&mut self, phrases: &[&str]) -> TypingFrame {
        if phrases.is_empty() {
            return TypingFrame {
                text: String::new(),
                delay_ms: TYPE_DELAY_MS,
            };
        }
        self.phrase %= phrases.len();
        let current = phrases[self.phrase];
        let full_len = current.chars().count();

        if self.deleting {
            self.shown = self.shown.saturating_sub(1);
        } else {
            self.shown = (self.shown + 1).min(full_len);
        }

        let mut delay_ms = if self.deleting {
            DELETE_DELAY_MS
        } else {
            TYPE_DELAY_MS
        };

        if !self.deleting && self.shown == full_len {
            delay_ms = HOLD_DELAY_MS;
            self.deleting = true;
        } else if self.deleting && self.shown == 0 {
            self.deleting = false;
            self.phrase = (self.phrase + 1) % phrases.len();
        }

        TypingFrame {
            text: current.chars().take(self.shown).collect(),
            delay_ms,
        }
    }
}

#[component]
pub fn Tagline() -> Element {
    let mut text = use_signal(String::new);
    let mut task = use_signal(|| None::<Task>);

    use_effect(move || {
        if task.read().is_some() {
            return;
        }
        let mut state = TypingState::default();
        let handle = spawn(async move {
            loop {
                let frame = state.advance(TAGLINE_PHRASES);
                let delay_ms = frame.delay_ms;
                text.set(frame.text);
                #[cfg(target_arch = "wasm32")]
                TimeoutFuture::new(delay_ms).await;
                #[cfg(not(target_arch = "wasm32"))]
                {
                    let _ = delay_ms;
                    break;
                }
            }
        });
        task.set(Some(handle));
    });

    use_drop(move || {
        if let Some(handle) = *task.peek() {
            handle.cancel();
        }
    });

    rsx! {
        span { id: "tagline", class: "tagline", "{text}" }
    }
}
