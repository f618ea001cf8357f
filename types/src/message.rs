//! Fixed console messages.

pub const START_MESSAGE: &str = "🟢 Start App";
pub const SKIP_MESSAGE: &str = "⛔ Skip lazy load";
pub const GREETING: &str = "👋 Hello from the lazy module!";

/// Every line a run can print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Start,
    Skip,
    Greeting,
}

impl Message {
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Message::Start => START_MESSAGE,
            Message::Skip => SKIP_MESSAGE,
            Message::Greeting => GREETING,
        }
    }

    /// Reverse lookup, used when inspecting captured output.
    #[must_use]
    pub fn from_text(text: &str) -> Option<Self> {
        [Message::Start, Message::Skip, Message::Greeting]
            .into_iter()
            .find(|m| m.text() == text)
    }
}
