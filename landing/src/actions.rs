//! User actions and the host capabilities they need.
//!
//! The page never touches the host directly. Reading the date goes through a
//! [`Clock`], leaving the page or scrolling goes through a [`Navigator`]. Both
//! are injected so rendering and state logic stay pure in tests.

use chrono::{Local, NaiveDate};

/// Source of "today" for the footer year.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Wall clock in the local timezone.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock stuck on one date.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Host navigation capability.
pub trait Navigator {
    /// Open an external URL in a new context. The URL is passed as configured.
    fn open_external(&mut self, url: &str);

    /// Smooth-scroll to an in-page element by id (without the leading `#`).
    fn scroll_to_anchor(&mut self, anchor: &str);
}

/// Navigator for hosts without a browser: records intents in the log.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn open_external(&mut self, url: &str) {
        tracing::info!(url, "open external");
    }

    fn scroll_to_anchor(&mut self, anchor: &str) {
        tracing::info!(anchor, "scroll to anchor");
    }
}

/// Something a control on the page does when activated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Mobile menu button
    ToggleMenu,
    /// Leave the page for an external URL
    OpenExternal(String),
    /// Scroll to an element id on this page
    ScrollTo(String),
}

impl Action {
    /// Value for the `data-action` attribute the page script dispatches on.
    pub fn data_action(&self) -> &'static str {
        match self {
            Action::ToggleMenu => "toggle-menu",
            Action::OpenExternal(_) => "open-external",
            Action::ScrollTo(_) => "scroll-to",
        }
    }
}

/// How the user activated a control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Activation {
    /// Click or tap
    Pointer,
    /// Key press, named as in `KeyboardEvent.key`
    Key(String),
}

impl Activation {
    pub fn key(key: impl Into<String>) -> Self {
        Activation::Key(key.into())
    }

    /// Pointer always activates; keys only for Enter and Space.
    pub fn triggers(&self) -> bool {
        match self {
            Activation::Pointer => true,
            Activation::Key(key) => matches!(key.as_str(), "Enter" | " " | "Spacebar"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_triggers() {
        assert!(Activation::Pointer.triggers());
    }

    #[test]
    fn enter_and_space_trigger() {
        assert!(Activation::key("Enter").triggers());
        assert!(Activation::key(" ").triggers());
        assert!(Activation::key("Spacebar").triggers());
    }

    #[test]
    fn other_keys_do_not_trigger() {
        for key in ["Tab", "Escape", "a", "ArrowDown"] {
            assert!(!Activation::key(key).triggers(), "{key} should not trigger");
        }
    }

    #[test]
    fn fixed_clock_returns_its_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).expect("valid date");
        assert_eq!(FixedClock(date).today(), date);
    }

    #[test]
    fn data_action_names() {
        assert_eq!(Action::ToggleMenu.data_action(), "toggle-menu");
        assert_eq!(Action::OpenExternal("x".into()).data_action(), "open-external");
        assert_eq!(Action::ScrollTo("newsletter".into()).data_action(), "scroll-to");
    }
}
