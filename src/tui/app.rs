use crate::config::Config;
use crate::todo::store::TodoListStore;
use crate::tui::handlers::{
    ConfirmModeAction, EditModeAction, HelpModeAction, InputModeAction, KeyEventHandler,
    KeyHandler, NormalModeAction,
};
use crate::tui::input::InputState;
use anyhow::Result;
use crossterm::event::KeyEvent;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    Normal,
    Input,
    ConfirmDelete,
    EditDialog,
    Help,
}

pub struct App {
    pub store: TodoListStore,
    pub input: InputState,
    pub edit_input: InputState,
    pub selected_index: usize,
    pub input_focused: bool,
    pub help_mode: bool,
    pub should_quit: bool,
    pub config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            store: TodoListStore::new(),
            input: InputState::new(),
            edit_input: InputState::new(),
            selected_index: 0,
            input_focused: false,
            help_mode: false,
            should_quit: false,
            config,
        }
    }

    // The modals are driven by the store's pending state, never by
    // separate visibility flags.
    pub fn mode(&self) -> Mode {
        if self.help_mode {
            Mode::Help
        } else if self.store.pending_edit().is_some() {
            Mode::EditDialog
        } else if self.store.pending_delete().is_some() {
            Mode::ConfirmDelete
        } else if self.input_focused {
            Mode::Input
        } else {
            Mode::Normal
        }
    }

    fn handle_normal_mode_key(&mut self, key_event: KeyEvent) {
        match KeyHandler::handle_normal_mode_key(key_event) {
            NormalModeAction::Quit => {
                self.should_quit = true;
            }
            NormalModeAction::MoveSelectionUp => {
                self.move_selection_up();
            }
            NormalModeAction::MoveSelectionDown => {
                self.move_selection_down();
            }
            NormalModeAction::FocusInput => {
                self.input_focused = true;
            }
            NormalModeAction::EditItem => {
                self.request_edit_selected();
            }
            NormalModeAction::DeleteItem => {
                self.store.request_delete(self.selected_index);
            }
            NormalModeAction::ToggleHelpMode => {
                self.help_mode = true;
            }
            NormalModeAction::None => {}
        }
    }

    fn handle_input_mode_key(&mut self, key_event: KeyEvent) {
        match KeyHandler::handle_input_mode_key(key_event) {
            InputModeAction::Cancel => {
                self.input.clear();
                self.input_focused = false;
            }
            InputModeAction::Submit => {
                self.submit_input();
            }
            InputModeAction::Backspace => self.input.backspace(),
            InputModeAction::Delete => self.input.delete(),
            InputModeAction::MoveCursorLeft => self.input.move_cursor_left(),
            InputModeAction::MoveCursorRight => self.input.move_cursor_right(),
            InputModeAction::MoveCursorHome => self.input.move_cursor_home(),
            InputModeAction::MoveCursorEnd => self.input.move_cursor_end(),
            InputModeAction::InsertChar(c) => self.input.insert_char(c),
            InputModeAction::None => {}
        }
    }

    fn handle_confirm_mode_key(&mut self, key_event: KeyEvent) {
        match KeyHandler::handle_confirm_mode_key(key_event) {
            ConfirmModeAction::Confirm => {
                self.store.confirm_delete();
                self.clamp_selection();
            }
            ConfirmModeAction::Cancel => {
                self.store.cancel_delete();
            }
            ConfirmModeAction::None => {}
        }
    }

    fn handle_edit_mode_key(&mut self, key_event: KeyEvent) {
        match KeyHandler::handle_edit_mode_key(key_event) {
            EditModeAction::CancelEdit => {
                self.store.cancel_edit();
                self.edit_input.clear();
            }
            EditModeAction::ConfirmEdit => {
                self.store.confirm_edit();
                // A rejected draft stays pending and keeps the dialog open
                if self.store.pending_edit().is_none() {
                    self.edit_input.clear();
                }
            }
            EditModeAction::Backspace => {
                self.edit_input.backspace();
                self.sync_edit_draft();
            }
            EditModeAction::Delete => {
                self.edit_input.delete();
                self.sync_edit_draft();
            }
            EditModeAction::MoveCursorLeft => self.edit_input.move_cursor_left(),
            EditModeAction::MoveCursorRight => self.edit_input.move_cursor_right(),
            EditModeAction::MoveCursorHome => self.edit_input.move_cursor_home(),
            EditModeAction::MoveCursorEnd => self.edit_input.move_cursor_end(),
            EditModeAction::InsertChar(c) => {
                self.edit_input.insert_char(c);
                self.sync_edit_draft();
            }
            EditModeAction::None => {}
        }
    }

    fn handle_help_mode_key(&mut self, key_event: KeyEvent) {
        match KeyHandler::handle_help_mode_key(key_event) {
            HelpModeAction::ExitHelpMode => {
                self.help_mode = false;
            }
            HelpModeAction::None => {}
        }
    }

    fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    fn move_selection_down(&mut self) {
        if self.selected_index < self.store.len().saturating_sub(1) {
            self.selected_index += 1;
        }
    }

    fn clamp_selection(&mut self) {
        self.selected_index = self.selected_index.min(self.store.len().saturating_sub(1));
    }

    fn submit_input(&mut self) {
        let before = self.store.len();
        self.store.add(&self.input.buffer);
        // A rejected submission leaves the field as typed for correction
        if self.store.len() > before {
            self.input.clear();
            self.input_focused = false;
            self.selected_index = 0;
        }
    }

    fn request_edit_selected(&mut self) {
        self.store.request_edit(self.selected_index);
        if let Some(pending) = self.store.pending_edit() {
            self.edit_input.set(pending.draft.clone());
        }
    }

    // Every keystroke in the edit dialog pushes the buffer into the store,
    // mirroring a text-change event
    fn sync_edit_draft(&mut self) {
        self.store.update_edit_draft(&self.edit_input.buffer);
    }
}

impl KeyEventHandler for App {
    fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        match self.mode() {
            Mode::Help => self.handle_help_mode_key(key_event),
            Mode::EditDialog => self.handle_edit_mode_key(key_event),
            Mode::ConfirmDelete => self.handle_confirm_mode_key(key_event),
            Mode::Input => self.handle_input_mode_key(key_event),
            Mode::Normal => self.handle_normal_mode_key(key_event),
        }
        Ok(())
    }
}
