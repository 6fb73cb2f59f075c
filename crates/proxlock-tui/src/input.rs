use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use crate::app::{App, Page};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ScrollDown,
    ScrollUp,
    ScrollHalfPageDown,
    ScrollHalfPageUp,
    ScrollPageDown,
    ScrollPageUp,
    JumpToTop,
    JumpToBottom,
    PendingG, // First 'g' press, waiting for second 'g'
    GotoHome,
    GotoPricing,
    OpenApp,
    OpenDocs,
    OpenDiscord,
    Refresh, // Re-fetch plan data on the pricing page
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Scrolling (home page document)
        (KeyCode::Char('j'), KeyModifiers::NONE) => Action::ScrollDown,
        (KeyCode::Char('k'), KeyModifiers::NONE) => Action::ScrollUp,
        (KeyCode::Down, KeyModifiers::NONE) => Action::ScrollDown,
        (KeyCode::Up, KeyModifiers::NONE) => Action::ScrollUp,
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => Action::ScrollHalfPageDown,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::ScrollHalfPageUp,
        (KeyCode::Char('f'), KeyModifiers::CONTROL) => Action::ScrollPageDown,
        (KeyCode::Char('b'), KeyModifiers::CONTROL) => Action::ScrollPageUp,
        (KeyCode::PageDown, KeyModifiers::NONE) => Action::ScrollPageDown,
        (KeyCode::PageUp, KeyModifiers::NONE) => Action::ScrollPageUp,

        // Jump to top/bottom
        (KeyCode::Char('g'), KeyModifiers::NONE) => {
            // gg requires double press
            if app.pending_key == Some('g') {
                Action::JumpToTop
            } else {
                Action::PendingG
            }
        }
        (KeyCode::Char('G'), KeyModifiers::SHIFT) => Action::JumpToBottom,
        (KeyCode::Home, KeyModifiers::NONE) => Action::JumpToTop,
        (KeyCode::End, KeyModifiers::NONE) => Action::JumpToBottom,

        // Page switching
        (KeyCode::Char('h'), KeyModifiers::NONE) => Action::GotoHome,
        (KeyCode::Char('p'), KeyModifiers::NONE) => Action::GotoPricing,
        (KeyCode::Esc, KeyModifiers::NONE) if app.page == Page::Pricing => Action::GotoHome,

        // External links
        (KeyCode::Char('o'), KeyModifiers::NONE) => Action::OpenApp,
        (KeyCode::Enter, KeyModifiers::NONE) => Action::OpenApp,
        (KeyCode::Char('D'), KeyModifiers::SHIFT) => Action::OpenDocs,
        (KeyCode::Char('i'), KeyModifiers::NONE) => Action::OpenDiscord,

        (KeyCode::Char('r'), KeyModifiers::NONE) if app.page == Page::Pricing => Action::Refresh,

        _ => Action::None,
    }
}

/// Handle a mouse event and return the corresponding action
pub fn handle_mouse_event(mouse: MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::ScrollDown => Action::ScrollDown,
        MouseEventKind::ScrollUp => Action::ScrollUp,
        _ => Action::None,
    }
}
