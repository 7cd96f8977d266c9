//! Keyboard handling for the plot viewer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input action resulting from user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Toggle help.
    Help,
    /// Switch between line and scatter drawing.
    ToggleStyle,
    /// No action.
    None,
}

/// Input handler with optional vim-style quit key.
#[derive(Debug, Clone)]
pub struct InputHandler {
    /// Enable vim-style keys (`Q` also quits).
    pub vim_keys: bool,
}

impl InputHandler {
    /// Creates a new input handler.
    #[must_use]
    pub fn new(vim_keys: bool) -> Self {
        Self { vim_keys }
    }

    /// Handles a key event and returns the corresponding action.
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> Action {
        // Raw mode delivers Ctrl+C as a key, not a signal
        if event.modifiers.contains(KeyModifiers::CONTROL) {
            return match event.code {
                KeyCode::Char('c' | 'q') => Action::Quit,
                _ => Action::None,
            };
        }

        match event.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Char('Q') if self.vim_keys => Action::Quit,
            KeyCode::Char('?') | KeyCode::F(1) => Action::Help,
            KeyCode::Char('m' | 's') => Action::ToggleStyle,
            _ => Action::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn key_event_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    #[test]
    fn test_quit_actions() {
        let handler = InputHandler::new(true);

        assert_eq!(handler.handle_key(key_event(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(handler.handle_key(key_event(KeyCode::Esc)), Action::Quit);
        assert_eq!(handler.handle_key(key_event_ctrl(KeyCode::Char('c'))), Action::Quit);
        assert_eq!(handler.handle_key(key_event_ctrl(KeyCode::Char('q'))), Action::Quit);
    }

    #[test]
    fn test_vim_quit_only_when_enabled() {
        let shift_q = key_event(KeyCode::Char('Q'));
        assert_eq!(InputHandler::new(true).handle_key(shift_q), Action::Quit);
        assert_eq!(InputHandler::new(false).handle_key(shift_q), Action::None);
    }

    #[test]
    fn test_help() {
        let handler = InputHandler::default();

        assert_eq!(handler.handle_key(key_event(KeyCode::Char('?'))), Action::Help);
        assert_eq!(handler.handle_key(key_event(KeyCode::F(1))), Action::Help);
    }

    #[test]
    fn test_toggle_style() {
        let handler = InputHandler::default();

        assert_eq!(handler.handle_key(key_event(KeyCode::Char('m'))), Action::ToggleStyle);
        assert_eq!(handler.handle_key(key_event(KeyCode::Char('s'))), Action::ToggleStyle);
    }

    #[test]
    fn test_ctrl_other_key_no_action() {
        let handler = InputHandler::default();
        assert_eq!(handler.handle_key(key_event_ctrl(KeyCode::Char('m'))), Action::None);
    }

    #[test]
    fn test_unknown_key_returns_none() {
        let handler = InputHandler::default();
        assert_eq!(handler.handle_key(key_event(KeyCode::Tab)), Action::None);
        assert_eq!(handler.handle_key(key_event(KeyCode::Char('x'))), Action::None);
    }
}
