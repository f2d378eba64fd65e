use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Modal};
use crate::ui::browse::BrowseFocus;
use crate::ui::room_form::FormField;

#[derive(Debug, Clone)]
pub enum Action {
    // Global
    Quit,
    ShowHelp,
    CloseModal,

    // Text input
    TypeChar(char),
    Backspace,
    Submit,

    // Form navigation
    NextField,
    PrevField,
    CycleLeft,
    CycleRight,

    // List navigation
    NavigateUp,
    NavigateDown,

    // Browse screen
    FocusFilters,
    FocusResults,
    ClearFilters,
    Refresh,
    NewRoom,
    EditSelected,
    DeleteSelected,
    ReserveSelected,

    // Room form
    ToggleFeature,

    // Delete confirmation
    ConfirmDelete,
}

pub fn map_key(key: KeyEvent, app: &App) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match &app.modal {
        Some(Modal::Help) => Some(Action::CloseModal),

        Some(Modal::ConfirmDelete { .. }) => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                Some(Action::ConfirmDelete)
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::CloseModal),
            _ => None,
        },

        Some(Modal::RoomForm(form)) => match key.code {
            KeyCode::Esc => Some(Action::CloseModal),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Tab => Some(Action::NextField),
            KeyCode::BackTab => Some(Action::PrevField),
            KeyCode::Left => Some(Action::CycleLeft),
            KeyCode::Right => Some(Action::CycleRight),
            KeyCode::Up => Some(Action::NavigateUp),
            KeyCode::Down => Some(Action::NavigateDown),
            KeyCode::Char(' ') if form.active_field == FormField::Features => {
                Some(Action::ToggleFeature)
            }
            KeyCode::Char(c) => Some(Action::TypeChar(c)),
            KeyCode::Backspace => Some(Action::Backspace),
            _ => None,
        },

        Some(Modal::Reserve(_)) => match key.code {
            KeyCode::Esc => Some(Action::CloseModal),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Tab => Some(Action::NextField),
            KeyCode::BackTab => Some(Action::PrevField),
            KeyCode::Char(c) => Some(Action::TypeChar(c)),
            KeyCode::Backspace => Some(Action::Backspace),
            _ => None,
        },

        None => match app.browse.focus {
            BrowseFocus::Filters => match key.code {
                KeyCode::Esc => Some(Action::FocusResults),
                KeyCode::Enter => Some(Action::Submit),
                KeyCode::Tab => Some(Action::NextField),
                KeyCode::BackTab => Some(Action::PrevField),
                KeyCode::Left => Some(Action::CycleLeft),
                KeyCode::Right => Some(Action::CycleRight),
                KeyCode::Char(c) => Some(Action::TypeChar(c)),
                KeyCode::Backspace => Some(Action::Backspace),
                _ => None,
            },
            BrowseFocus::Results => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
                KeyCode::Char('?') => Some(Action::ShowHelp),
                KeyCode::Char('f') | KeyCode::Char('/') | KeyCode::Tab => {
                    Some(Action::FocusFilters)
                }
                KeyCode::Char('c') => Some(Action::ClearFilters),
                KeyCode::Char('r') => Some(Action::Refresh),
                KeyCode::Char('n') => Some(Action::NewRoom),
                KeyCode::Char('e') => Some(Action::EditSelected),
                KeyCode::Char('d') => Some(Action::DeleteSelected),
                KeyCode::Enter | KeyCode::Char('b') => Some(Action::ReserveSelected),
                KeyCode::Up | KeyCode::Char('k') => Some(Action::NavigateUp),
                KeyCode::Down | KeyCode::Char('j') => Some(Action::NavigateDown),
                _ => None,
            },
        },
    }
}
