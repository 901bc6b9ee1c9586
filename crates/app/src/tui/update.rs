use anyhow::Result;
use crossterm::event::{KeyCode, KeyModifiers};
use keepsake_core::app::Command;
use super::model::{TuiModel, ViewMode};

/// Messages that can be sent from the TUI to the application service
#[derive(Debug, Clone, PartialEq)]
pub enum TuiMessage {
    /// Send a command to the app service
    Command(Command),

    /// No action needed
    None,
}

/// The Update function - handles user input and updates the model
pub struct TuiUpdate;

impl TuiUpdate {
    /// Handle a key press and update the model accordingly
    /// Returns a TuiMessage that should be sent to the app service
    pub fn handle_key(model: &mut TuiModel, key: KeyCode, modifiers: KeyModifiers) -> Result<TuiMessage> {
        // Handle global keys first (quit, help, etc.)
        if let Some(msg) = Self::handle_global_keys(model, key, modifiers)? {
            return Ok(msg);
        }

        match model.mode {
            ViewMode::Dashboard => Self::handle_dashboard_keys(model, key, modifiers),
            ViewMode::Help => Self::handle_help_keys(model, key, modifiers),
        }
    }

    /// Handle terminal resize
    pub fn handle_resize(model: &mut TuiModel, width: u16, height: u16) -> Result<TuiMessage> {
        model.ui_state.terminal_width = width;
        model.ui_state.terminal_height = height;
        Ok(TuiMessage::None)
    }

    /// Handle global keys that work in any mode
    fn handle_global_keys(model: &mut TuiModel, key: KeyCode, modifiers: KeyModifiers) -> Result<Option<TuiMessage>> {
        match key {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                Ok(Some(TuiMessage::Command(Command::Quit)))
            }

            KeyCode::Char('q') | KeyCode::Esc if modifiers.is_empty() => {
                if matches!(model.mode, ViewMode::Help) {
                    model.mode = ViewMode::Dashboard;
                    Ok(Some(TuiMessage::None))
                } else {
                    Ok(Some(TuiMessage::Command(Command::Quit)))
                }
            }

            KeyCode::Char('?') => {
                model.mode = ViewMode::Help;
                Ok(Some(TuiMessage::None))
            }

            _ => Ok(None),
        }
    }

    fn handle_dashboard_keys(model: &mut TuiModel, key: KeyCode, _modifiers: KeyModifiers) -> Result<TuiMessage> {
        match key {
            KeyCode::Left | KeyCode::Char('h') => {
                model.select_previous_card();
                Ok(TuiMessage::None)
            }

            KeyCode::Right | KeyCode::Char('l') => {
                model.select_next_card();
                Ok(TuiMessage::None)
            }

            KeyCode::Enter => {
                // The overlay sits on top of its card and swallows the press
                if model.selected_card_shows_overlay() {
                    return Ok(TuiMessage::Command(Command::TapOverlay));
                }
                if model.press_selected_card() {
                    Ok(TuiMessage::Command(Command::PressCard { index: model.cards.selected }))
                } else {
                    Ok(TuiMessage::None)
                }
            }

            KeyCode::Char('v') => {
                if model.video.overlay_visible() {
                    Ok(TuiMessage::Command(Command::TapOverlay))
                } else {
                    Ok(TuiMessage::None)
                }
            }

            KeyCode::Char('p') => {
                if model.video.playing {
                    Ok(TuiMessage::Command(Command::PauseVideo))
                } else {
                    Ok(TuiMessage::None)
                }
            }

            KeyCode::Char(' ') => {
                Ok(TuiMessage::Command(Command::SpawnHearts { count: model.ui_state.heart_burst }))
            }

            _ => Ok(TuiMessage::None),
        }
    }

    /// Handle keys in help view
    fn handle_help_keys(model: &mut TuiModel, _key: KeyCode, _modifiers: KeyModifiers) -> Result<TuiMessage> {
        // Any key exits help
        model.mode = ViewMode::Dashboard;
        Ok(TuiMessage::None)
    }
}
