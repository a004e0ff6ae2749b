use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use anyhow::Result;

pub struct KeyHandler;

impl KeyHandler {
    pub fn handle_normal_mode_key(key_event: KeyEvent) -> NormalModeAction {
        match key_event.code {
            KeyCode::Char('q') => NormalModeAction::Quit,
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                NormalModeAction::Quit
            }
            KeyCode::Up | KeyCode::Char('k') => NormalModeAction::MoveSelectionUp,
            KeyCode::Down | KeyCode::Char('j') => NormalModeAction::MoveSelectionDown,
            KeyCode::Char('a') | KeyCode::Char('i') => NormalModeAction::FocusInput,
            KeyCode::Char('e') | KeyCode::Enter => NormalModeAction::EditItem,
            KeyCode::Char('d') | KeyCode::Char('x') => NormalModeAction::DeleteItem,
            KeyCode::Char('?') => NormalModeAction::ToggleHelpMode,
            _ => NormalModeAction::None,
        }
    }

    pub fn handle_input_mode_key(key_event: KeyEvent) -> InputModeAction {
        match key_event.code {
            KeyCode::Esc => InputModeAction::Cancel,
            KeyCode::Enter => InputModeAction::Submit,
            KeyCode::Backspace => InputModeAction::Backspace,
            KeyCode::Delete => InputModeAction::Delete,
            KeyCode::Left => InputModeAction::MoveCursorLeft,
            KeyCode::Right => InputModeAction::MoveCursorRight,
            KeyCode::Home => InputModeAction::MoveCursorHome,
            KeyCode::End => InputModeAction::MoveCursorEnd,
            KeyCode::Char(c) => InputModeAction::InsertChar(c),
            _ => InputModeAction::None,
        }
    }

    pub fn handle_confirm_mode_key(key_event: KeyEvent) -> ConfirmModeAction {
        match key_event.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => ConfirmModeAction::Confirm,
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => ConfirmModeAction::Cancel,
            _ => ConfirmModeAction::None,
        }
    }

    pub fn handle_edit_mode_key(key_event: KeyEvent) -> EditModeAction {
        match key_event.code {
            KeyCode::Esc => EditModeAction::CancelEdit,
            KeyCode::Enter => EditModeAction::ConfirmEdit,
            KeyCode::Backspace => EditModeAction::Backspace,
            KeyCode::Delete => EditModeAction::Delete,
            KeyCode::Left => EditModeAction::MoveCursorLeft,
            KeyCode::Right => EditModeAction::MoveCursorRight,
            KeyCode::Home => EditModeAction::MoveCursorHome,
            KeyCode::End => EditModeAction::MoveCursorEnd,
            KeyCode::Char(c) => EditModeAction::InsertChar(c),
            _ => EditModeAction::None,
        }
    }

    pub fn handle_help_mode_key(key_event: KeyEvent) -> HelpModeAction {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('?') => {
                HelpModeAction::ExitHelpMode
            }
            _ => HelpModeAction::None,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum NormalModeAction {
    None,
    Quit,
    MoveSelectionUp,
    MoveSelectionDown,
    FocusInput,
    EditItem,
    DeleteItem,
    ToggleHelpMode,
}

#[derive(Debug, PartialEq)]
pub enum InputModeAction {
    None,
    Cancel,
    Submit,
    Backspace,
    Delete,
    MoveCursorLeft,
    MoveCursorRight,
    MoveCursorHome,
    MoveCursorEnd,
    InsertChar(char),
}

#[derive(Debug, PartialEq)]
pub enum ConfirmModeAction {
    None,
    Confirm,
    Cancel,
}

#[derive(Debug, PartialEq)]
pub enum EditModeAction {
    None,
    CancelEdit,
    ConfirmEdit,
    Backspace,
    Delete,
    MoveCursorLeft,
    MoveCursorRight,
    MoveCursorHome,
    MoveCursorEnd,
    InsertChar(char),
}

#[derive(Debug, PartialEq)]
pub enum HelpModeAction {
    None,
    ExitHelpMode,
}

pub trait KeyEventHandler {
    fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_mode_basic_keys() {
        let key_event = KeyEvent::from(KeyCode::Char('q'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::Quit);

        let key_event = KeyEvent::from(KeyCode::Char('a'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::FocusInput);

        let key_event = KeyEvent::from(KeyCode::Char('i'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::FocusInput);

        let key_event = KeyEvent::from(KeyCode::Char('e'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::EditItem);

        let key_event = KeyEvent::from(KeyCode::Char('d'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::DeleteItem);

        let key_event = KeyEvent::from(KeyCode::Char('?'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::ToggleHelpMode);
    }

    #[test]
    fn test_normal_mode_navigation_keys() {
        let key_event = KeyEvent::from(KeyCode::Up);
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::MoveSelectionUp);

        let key_event = KeyEvent::from(KeyCode::Char('k'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::MoveSelectionUp);

        let key_event = KeyEvent::from(KeyCode::Down);
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::MoveSelectionDown);

        let key_event = KeyEvent::from(KeyCode::Char('j'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::MoveSelectionDown);
    }

    #[test]
    fn test_normal_mode_ctrl_keys() {
        let mut key_event = KeyEvent::from(KeyCode::Char('c'));
        key_event.modifiers = KeyModifiers::CONTROL;
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::Quit);
    }

    #[test]
    fn test_input_mode_keys() {
        let key_event = KeyEvent::from(KeyCode::Esc);
        assert_eq!(KeyHandler::handle_input_mode_key(key_event), InputModeAction::Cancel);

        let key_event = KeyEvent::from(KeyCode::Enter);
        assert_eq!(KeyHandler::handle_input_mode_key(key_event), InputModeAction::Submit);

        let key_event = KeyEvent::from(KeyCode::Backspace);
        assert_eq!(KeyHandler::handle_input_mode_key(key_event), InputModeAction::Backspace);

        let key_event = KeyEvent::from(KeyCode::Home);
        assert_eq!(KeyHandler::handle_input_mode_key(key_event), InputModeAction::MoveCursorHome);

        let key_event = KeyEvent::from(KeyCode::Char('x'));
        assert_eq!(KeyHandler::handle_input_mode_key(key_event), InputModeAction::InsertChar('x'));
    }

    #[test]
    fn test_confirm_mode_keys() {
        let key_event = KeyEvent::from(KeyCode::Char('y'));
        assert_eq!(KeyHandler::handle_confirm_mode_key(key_event), ConfirmModeAction::Confirm);

        let key_event = KeyEvent::from(KeyCode::Enter);
        assert_eq!(KeyHandler::handle_confirm_mode_key(key_event), ConfirmModeAction::Confirm);

        let key_event = KeyEvent::from(KeyCode::Char('n'));
        assert_eq!(KeyHandler::handle_confirm_mode_key(key_event), ConfirmModeAction::Cancel);

        let key_event = KeyEvent::from(KeyCode::Esc);
        assert_eq!(KeyHandler::handle_confirm_mode_key(key_event), ConfirmModeAction::Cancel);

        let key_event = KeyEvent::from(KeyCode::Char('z'));
        assert_eq!(KeyHandler::handle_confirm_mode_key(key_event), ConfirmModeAction::None);
    }

    #[test]
    fn test_edit_mode_keys() {
        let key_event = KeyEvent::from(KeyCode::Esc);
        assert_eq!(KeyHandler::handle_edit_mode_key(key_event), EditModeAction::CancelEdit);

        let key_event = KeyEvent::from(KeyCode::Enter);
        assert_eq!(KeyHandler::handle_edit_mode_key(key_event), EditModeAction::ConfirmEdit);

        let key_event = KeyEvent::from(KeyCode::Backspace);
        assert_eq!(KeyHandler::handle_edit_mode_key(key_event), EditModeAction::Backspace);

        let key_event = KeyEvent::from(KeyCode::Delete);
        assert_eq!(KeyHandler::handle_edit_mode_key(key_event), EditModeAction::Delete);

        let key_event = KeyEvent::from(KeyCode::Left);
        assert_eq!(KeyHandler::handle_edit_mode_key(key_event), EditModeAction::MoveCursorLeft);

        let key_event = KeyEvent::from(KeyCode::Right);
        assert_eq!(KeyHandler::handle_edit_mode_key(key_event), EditModeAction::MoveCursorRight);

        let key_event = KeyEvent::from(KeyCode::Char('x'));
        assert_eq!(KeyHandler::handle_edit_mode_key(key_event), EditModeAction::InsertChar('x'));
    }

    #[test]
    fn test_help_mode_keys() {
        let key_event = KeyEvent::from(KeyCode::Esc);
        assert_eq!(KeyHandler::handle_help_mode_key(key_event), HelpModeAction::ExitHelpMode);

        let key_event = KeyEvent::from(KeyCode::Char('?'));
        assert_eq!(KeyHandler::handle_help_mode_key(key_event), HelpModeAction::ExitHelpMode);

        let key_event = KeyEvent::from(KeyCode::Char('q'));
        assert_eq!(KeyHandler::handle_help_mode_key(key_event), HelpModeAction::ExitHelpMode);

        let key_event = KeyEvent::from(KeyCode::Char('z'));
        assert_eq!(KeyHandler::handle_help_mode_key(key_event), HelpModeAction::None);
    }
}
