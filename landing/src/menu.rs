//! Mobile menu state.

/// Whether the mobile navigation panel is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MenuState {
    /// Panel hidden (initial)
    #[default]
    Closed,
    /// Panel shown
    Open,
}

impl MenuState {
    /// The other state.
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }
}

impl From<bool> for MenuState {
    fn from(open: bool) -> Self {
        if open { MenuState::Open } else { MenuState::Closed }
    }
}

/// Sole owner and writer of [`MenuState`] for one mounted page.
///
/// The only transition is [`MenuController::toggle`]; following a link or
/// clicking outside the panel does not close it.
#[derive(Debug, Default)]
pub struct MenuController {
    state: MenuState,
}

impl MenuController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Flip the state and return the new one.
    pub fn toggle(&mut self) -> MenuState {
        self.state = self.state.toggled();
        self.state
    }

    /// Back to `Closed`, as on a fresh mount.
    pub fn reset(&mut self) {
        self.state = MenuState::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert_eq!(MenuController::new().state(), MenuState::Closed);
    }

    #[test]
    fn toggle_opens_then_closes() {
        let mut menu = MenuController::new();
        assert_eq!(menu.toggle(), MenuState::Open);
        assert!(menu.state().is_open());
        assert_eq!(menu.toggle(), MenuState::Closed);
    }

    #[test]
    fn toggled_is_an_involution() {
        for state in [MenuState::Closed, MenuState::Open] {
            assert_eq!(state.toggled().toggled(), state);
        }
    }

    #[test]
    fn reset_closes_an_open_menu() {
        let mut menu = MenuController::new();
        menu.toggle();
        menu.reset();
        assert_eq!(menu.state(), MenuState::Closed);
    }

    #[test]
    fn from_bool() {
        assert_eq!(MenuState::from(true), MenuState::Open);
        assert_eq!(MenuState::from(false), MenuState::Closed);
    }
}
