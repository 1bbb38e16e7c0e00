//! One mounted page: content, menu state and host capabilities.

use crate::actions::{Action, Activation, Clock, Navigator};
use crate::content::Content;
use crate::menu::{MenuController, MenuState};
use crate::render_page;

/// Drives the page between renders.
///
/// User input arrives as an [`Action`] plus the [`Activation`] that fired it.
/// Pointer and keyboard routes end in the same [`PageSession::perform`], so the
/// two cannot behave differently.
pub struct PageSession<C, N> {
    content: Content,
    menu: MenuController,
    clock: C,
    navigator: N,
}

impl<C: Clock, N: Navigator> PageSession<C, N> {
    /// Mount a page. The menu starts closed.
    pub fn new(content: Content, clock: C, navigator: N) -> Self {
        Self {
            content,
            menu: MenuController::new(),
            clock,
            navigator,
        }
    }

    pub fn menu_state(&self) -> MenuState {
        self.menu.state()
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Handle a user activation. Returns whether the action ran.
    pub fn activate(&mut self, action: &Action, activation: &Activation) -> bool {
        if !activation.triggers() {
            return false;
        }
        self.perform(action);
        true
    }

    /// Run an action.
    pub fn perform(&mut self, action: &Action) {
        match action {
            Action::ToggleMenu => {
                let state = self.menu.toggle();
                tracing::debug!(?state, "menu toggled");
            }
            Action::OpenExternal(url) => self.navigator.open_external(url),
            Action::ScrollTo(anchor) => self.navigator.scroll_to_anchor(anchor),
        }
    }

    /// Drop UI state as a fresh page load would.
    pub fn remount(&mut self) {
        self.menu.reset();
    }

    /// Render the current state with today's date.
    pub fn render(&self) -> String {
        render_page(&self.content, self.menu.state(), self.clock.today())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::FixedClock;
    use chrono::NaiveDate;

    #[derive(Default)]
    struct Recorder {
        opened: Vec<String>,
        scrolled: Vec<String>,
    }

    impl Navigator for Recorder {
        fn open_external(&mut self, url: &str) {
            self.opened.push(url.to_string());
        }

        fn scroll_to_anchor(&mut self, anchor: &str) {
            self.scrolled.push(anchor.to_string());
        }
    }

    fn session() -> PageSession<FixedClock, Recorder> {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date");
        PageSession::new(Content::default(), FixedClock(date), Recorder::default())
    }

    #[test]
    fn pointer_and_enter_open_the_same_url() {
        let mut page = session();
        let action = Action::OpenExternal("https://www.effectivealtruism.org/".into());

        assert!(page.activate(&action, &Activation::Pointer));
        assert!(page.activate(&action, &Activation::key("Enter")));

        let opened = &page.navigator().opened;
        assert_eq!(opened.len(), 2);
        assert_eq!(opened[0], opened[1]);
    }

    #[test]
    fn unrelated_key_does_nothing() {
        let mut page = session();
        let action = Action::OpenExternal("https://example.org".into());
        assert!(!page.activate(&action, &Activation::key("Tab")));
        assert!(page.navigator().opened.is_empty());
    }

    #[test]
    fn url_is_passed_through_untouched() {
        let mut page = session();
        let url = "https://chat.whatsapp.com/HtnrgFwcNvxEBk4bbJy4vq?x=1&y= 2";
        page.perform(&Action::OpenExternal(url.into()));
        assert_eq!(page.navigator().opened, [url]);
    }

    #[test]
    fn scroll_goes_to_navigator() {
        let mut page = session();
        page.activate(&Action::ScrollTo("newsletter".into()), &Activation::Pointer);
        assert_eq!(page.navigator().scrolled, ["newsletter"]);
    }

    #[test]
    fn toggle_twice_returns_to_closed() {
        let mut page = session();
        page.activate(&Action::ToggleMenu, &Activation::Pointer);
        assert_eq!(page.menu_state(), MenuState::Open);
        page.activate(&Action::ToggleMenu, &Activation::key(" "));
        assert_eq!(page.menu_state(), MenuState::Closed);
    }

    #[test]
    fn remount_closes_menu() {
        let mut page = session();
        page.perform(&Action::ToggleMenu);
        page.remount();
        assert_eq!(page.menu_state(), MenuState::Closed);
    }

    #[test]
    fn render_reflects_menu_state() {
        // The live panel precedes the inert template copy
        let live_panel = |html: &str| {
            let panel = html.find(r#"class="mobile-nav""#);
            let template = html.find("<template");
            matches!((panel, template), (Some(p), Some(t)) if p < t)
        };

        let mut page = session();
        assert!(!live_panel(&page.render()));
        page.perform(&Action::ToggleMenu);
        assert!(live_panel(&page.render()));
    }
}
