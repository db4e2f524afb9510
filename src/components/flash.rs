use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub enum FlashLevel {
    Success,
    Error,
}

/// One transient user-facing notice. Every success message, backend error,
/// and validation prompt goes through this.
#[derive(Debug, Clone, PartialEq)]
pub struct FlashMessage {
    pub level: FlashLevel,
    pub text: String,
}

impl FlashMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Error,
            text: text.into(),
        }
    }
}

/// Sequence numbers for the flash slot's dismiss timers. Every shown
/// message gets a fresh number, and a timer may only clear the message it
/// was started for, so a stale timer cannot dismiss a newer message.
#[derive(Debug, Default)]
pub struct DismissGuard {
    seq: u64,
}

impl DismissGuard {
    /// Register a newly shown message and return its sequence number.
    pub fn shown(&mut self) -> u64 {
        self.seq = self.seq.wrapping_add(1);
        self.seq
    }

    /// Whether the timer with this sequence number belongs to the message
    /// currently shown.
    pub fn may_dismiss(&self, seq: u64) -> bool {
        self.seq == seq
    }
}

#[derive(Properties, PartialEq)]
pub struct FlashProps {
    pub message: Option<FlashMessage>,
}

#[function_component(Flash)]
pub fn flash(props: &FlashProps) -> Html {
    match &props.message {
        Some(message) => {
            let class = match message.level {
                FlashLevel::Success => "flash-message success",
                FlashLevel::Error => "flash-message error",
            };
            html! {
                <div class={class}>
                    {&message.text}
                </div>
            }
        }
        None => html! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_the_level() {
        assert_eq!(FlashMessage::success("ok").level, FlashLevel::Success);
        assert_eq!(FlashMessage::error("bad").level, FlashLevel::Error);
        assert_eq!(FlashMessage::error("bad").text, "bad");
    }

    #[test]
    fn stale_timer_cannot_dismiss_a_newer_message() {
        let mut guard = DismissGuard::default();
        let first = guard.shown();
        let second = guard.shown();
        assert!(!guard.may_dismiss(first));
        assert!(guard.may_dismiss(second));
    }

    #[test]
    fn current_timer_may_dismiss() {
        let mut guard = DismissGuard::default();
        let seq = guard.shown();
        assert!(guard.may_dismiss(seq));
    }
}
